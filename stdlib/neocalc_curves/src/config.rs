//! Sweep configuration and per-axis presets.

use neocalc_models::Predictor;

/// Number of intervals a preset sweep is cut into.
pub const DEFAULT_SAMPLE_COUNT: usize = 50;

/// Slider range and axis title for one predictor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPreset {
    pub min: f64,
    pub max: f64,
    pub label: &'static str,
}

impl AxisPreset {
    pub fn for_predictor(predictor: Predictor) -> Self {
        match predictor {
            Predictor::Flow => AxisPreset {
                min: 0.2,
                max: 3.0,
                label: "Ductal flow (mL/min)",
            },
            Predictor::Weight => AxisPreset {
                min: 300.0,
                max: 2500.0,
                label: "Weight (g)",
            },
            Predictor::GestAge => AxisPreset {
                min: 22.0,
                max: 36.0,
                label: "Gestational age (weeks)",
            },
            Predictor::PostnatalDay => AxisPreset {
                min: 0.0,
                max: 21.0,
                label: "Postnatal day (days)",
            },
        }
    }
}

/// Which predictor to vary, over what range, in how many intervals.
///
/// The grid is `x_i = min + i * (max - min) / n` for `i = 0..=n`, where `n`
/// is `sample_count` capped one below `usize::MAX`, so a well-formed config
/// yields `n + 1` points with both ends included.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    pub variable: Predictor,
    pub min: f64,
    pub max: f64,
    pub sample_count: usize,
}

impl SweepConfig {
    pub fn new(variable: Predictor, min: f64, max: f64, sample_count: usize) -> Self {
        Self {
            variable,
            min,
            max,
            sample_count,
        }
    }

    /// Full slider range of `variable` in [`DEFAULT_SAMPLE_COUNT`] intervals.
    pub fn preset(variable: Predictor) -> Self {
        let preset = AxisPreset::for_predictor(variable);
        Self::new(variable, preset.min, preset.max, DEFAULT_SAMPLE_COUNT)
    }

    /// Number of intervals the range is cut into. Capped so the point count
    /// still fits in a `usize`.
    pub fn intervals(&self) -> usize {
        self.sample_count.min(usize::MAX - 1)
    }

    /// Distance between neighbouring points. Zero for a zero sample count,
    /// infinite when `max - min` overflows.
    pub fn step(&self) -> f64 {
        match self.intervals() {
            0 => 0.0,
            n => (self.max - self.min) / n as f64,
        }
    }

    /// Number of points the sweep produces.
    pub fn len(&self) -> usize {
        if !self.min.is_finite() || !self.max.is_finite() || self.max < self.min {
            0
        } else if self.max == self.min || self.intervals() == 0 {
            1
        } else {
            self.intervals() + 1
        }
    }

    /// Value of the `i`th grid point. Index 0 is `min` and the last index is
    /// `max` exactly. When the step overflows, points are interpolated as
    /// `min·(1 - t) + max·t` instead.
    pub fn x_at(&self, i: usize) -> f64 {
        let n = self.intervals();
        if i == 0 {
            return self.min;
        }
        if i >= n {
            return self.max;
        }
        let step = self.step();
        if step.is_finite() {
            self.min + i as f64 * step
        } else {
            let t = i as f64 / n as f64;
            self.min * (1.0 - t) + self.max * t
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn axis_label(&self) -> &'static str {
        AxisPreset::for_predictor(self.variable).label
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::preset(Predictor::Flow)
    }
}
