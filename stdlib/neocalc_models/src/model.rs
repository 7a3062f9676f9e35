//! SAFE and FLOW-D evaluation.

use std::fmt;

#[cfg(feature = "logging")]
use log::trace;

use crate::coefficients::{FLOW_D, FLOW_D_THRESHOLD, SAFE, SAFE_THRESHOLD};
use crate::inputs::ClinicalInputs;
use crate::logistic::sigmoid;
use crate::spline::spline_basis;

/// Linear predictor of the SAFE model.
pub fn safe_logit(flow: f64, weight: f64, gest_age: f64, postnatal_day: f64) -> f64 {
    SAFE.intercept
        + SAFE.flow * flow
        + SAFE.weight * weight
        + SAFE.gest_age * gest_age
        + SAFE.postnatal_day * postnatal_day
}

/// Linear predictor of the FLOW-D model.
///
/// For flow large enough that the spline terms overflow, the negative
/// quadratic `ns3` term dominates and the predictor saturates at `-inf`.
pub fn flow_d_logit(flow: f64, weight: f64, gest_age: f64, postnatal_day: f64) -> f64 {
    let ns = spline_basis(flow);
    let logit = FLOW_D.intercept
        + FLOW_D.ns1 * ns.ns1
        + FLOW_D.ns2 * ns.ns2
        + FLOW_D.ns3 * ns.ns3
        + FLOW_D.weight * weight
        + FLOW_D.gest_age * gest_age
        + FLOW_D.postnatal_day * postnatal_day;
    if logit.is_nan() && ![flow, weight, gest_age, postnatal_day].iter().any(|v| v.is_nan()) {
        f64::NEG_INFINITY
    } else {
        logit
    }
}

/// Probability of a stable phenotype.
pub fn calc_safe(flow: f64, weight: f64, gest_age: f64, postnatal_day: f64) -> f64 {
    sigmoid(safe_logit(flow, weight, gest_age, postnatal_day))
}

/// Probability of an adverse outcome.
pub fn calc_flow_d(flow: f64, weight: f64, gest_age: f64, postnatal_day: f64) -> f64 {
    sigmoid(flow_d_logit(flow, weight, gest_age, postnatal_day))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModelKind {
    Safe,
    FlowD,
}

impl ModelKind {
    pub fn name(&self) -> &'static str {
        match self {
            ModelKind::Safe => "SAFE",
            ModelKind::FlowD => "FLOW-D",
        }
    }

    pub fn threshold(&self) -> f64 {
        match self {
            ModelKind::Safe => SAFE_THRESHOLD,
            ModelKind::FlowD => FLOW_D_THRESHOLD,
        }
    }

    pub fn logit(&self, inputs: &ClinicalInputs) -> f64 {
        let ClinicalInputs {
            flow,
            weight,
            gest_age,
            postnatal_day,
        } = *inputs;
        match self {
            ModelKind::Safe => safe_logit(flow, weight, gest_age, postnatal_day),
            ModelKind::FlowD => flow_d_logit(flow, weight, gest_age, postnatal_day),
        }
    }

    pub fn probability(&self, inputs: &ClinicalInputs) -> f64 {
        sigmoid(self.logit(inputs))
    }

    pub fn evaluate(&self, inputs: &ClinicalInputs) -> ProbabilityResult {
        ProbabilityResult::new(*self, self.probability(inputs))
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reading of a probability against its model's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RiskLabel {
    StablePhenotype,
    NotStable,
    HighRisk,
    LowRisk,
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLabel::StablePhenotype => "Stable phenotype",
            RiskLabel::NotStable => "Not stable / uncertain",
            RiskLabel::HighRisk => "High risk",
            RiskLabel::LowRisk => "Low risk",
        };
        f.write_str(s)
    }
}

/// One model's output for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProbabilityResult {
    pub model: ModelKind,
    pub probability: f64,
    /// `probability >= model.threshold()`
    pub crosses_threshold: bool,
}

impl ProbabilityResult {
    pub fn new(model: ModelKind, probability: f64) -> Self {
        Self {
            model,
            probability,
            crosses_threshold: probability >= model.threshold(),
        }
    }

    pub fn label(&self) -> RiskLabel {
        match (self.model, self.crosses_threshold) {
            (ModelKind::Safe, true) => RiskLabel::StablePhenotype,
            (ModelKind::Safe, false) => RiskLabel::NotStable,
            (ModelKind::FlowD, true) => RiskLabel::HighRisk,
            (ModelKind::FlowD, false) => RiskLabel::LowRisk,
        }
    }

    pub fn percent(&self) -> f64 {
        self.probability * 100.0
    }
}

impl fmt::Display for ProbabilityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.3} ({:.1}%) {}",
            self.model,
            self.probability,
            self.percent(),
            self.label()
        )
    }
}

/// Both model results for one patient.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assessment {
    pub inputs: ClinicalInputs,
    pub safe: ProbabilityResult,
    pub flow_d: ProbabilityResult,
}

/// Evaluate SAFE and FLOW-D on the same inputs.
pub fn assess(inputs: &ClinicalInputs) -> Assessment {
    let safe = ModelKind::Safe.evaluate(inputs);
    let flow_d = ModelKind::FlowD.evaluate(inputs);
    #[cfg(feature = "logging")]
    trace!(
        "assessment {:?}: safe={} flow_d={}",
        inputs,
        safe.probability,
        flow_d.probability
    );
    Assessment {
        inputs: *inputs,
        safe,
        flow_d,
    }
}
