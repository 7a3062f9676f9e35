//! Ductal flow from echocardiographic measurements.

use std::f64::consts::PI;

/// Flow in mL/min through a circular duct.
///
/// The diameter is converted from millimetres to metres, the cross-section is
/// `π·d²/4`, and the product with heart rate and peak velocity is scaled by
/// 1000 once. No argument is checked; a zero diameter yields exactly zero.
pub fn derive_flow(diameter_mm: f64, peak_velocity: f64, heart_rate: f64) -> f64 {
    let d = diameter_mm / 1000.0;
    PI * d * d / 4.0 * heart_rate * peak_velocity * 1000.0
}

/// Where the flow predictor comes from: typed in directly, or computed from
/// the duct measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlowSource {
    Measured(f64),
    Derived {
        diameter_mm: f64,
        peak_velocity: f64,
        heart_rate: f64,
    },
}

impl FlowSource {
    /// Resolve to a flow value in mL/min.
    pub fn flow(&self) -> f64 {
        match *self {
            FlowSource::Measured(flow) => flow,
            FlowSource::Derived {
                diameter_mm,
                peak_velocity,
                heart_rate,
            } => derive_flow(diameter_mm, peak_velocity, heart_rate),
        }
    }
}

impl From<f64> for FlowSource {
    fn from(flow: f64) -> Self {
        FlowSource::Measured(flow)
    }
}
