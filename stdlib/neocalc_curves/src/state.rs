//! Chart state owned by a front-end and the series it renders.
//!
//! A front-end keeps one [`ChartState`]: the axis being swept and the current
//! value of every slider. Each redraw calls [`ChartState::series`], which is a
//! pure function of that state.

use neocalc_models::{ClinicalInputs, Predictor};

use crate::config::{AxisPreset, SweepConfig, DEFAULT_SAMPLE_COUNT};
use crate::labels::format_axis_value;
use crate::sampler::sweep;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartState {
    pub axis: Predictor,
    pub values: ClinicalInputs,
    pub sample_count: usize,
}

/// Materialized curves for one redraw.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSeries {
    pub variable: Predictor,
    pub axis_label: String,
    pub xs: Vec<f64>,
    pub safe: Vec<f64>,
    pub flow_d: Vec<f64>,
}

impl ChartState {
    pub fn new(values: ClinicalInputs) -> Self {
        Self {
            axis: Predictor::Flow,
            values,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    pub fn select_axis(&mut self, axis: Predictor) {
        self.axis = axis;
    }

    /// Store a slider value. The swept axis keeps its stored value too; it is
    /// simply ignored until another axis is selected.
    pub fn set_value(&mut self, predictor: Predictor, value: f64) {
        self.values.set(predictor, value);
    }

    /// Whether the slider for `predictor` is disabled because it is the axis.
    pub fn is_locked(&self, predictor: Predictor) -> bool {
        self.axis == predictor
    }

    pub fn config(&self) -> SweepConfig {
        let preset = AxisPreset::for_predictor(self.axis);
        SweepConfig::new(self.axis, preset.min, preset.max, self.sample_count)
    }

    pub fn series(&self) -> CurveSeries {
        let config = self.config();
        let points = sweep(self.values, config);
        let n = points.len();
        let mut series = CurveSeries {
            variable: self.axis,
            axis_label: config.axis_label().to_string(),
            xs: Vec::with_capacity(n),
            safe: Vec::with_capacity(n),
            flow_d: Vec::with_capacity(n),
        };
        for p in points {
            series.xs.push(p.x);
            series.safe.push(p.p_safe);
            series.flow_d.push(p.p_flow);
        }
        series
    }
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new(ClinicalInputs::default())
    }
}

impl CurveSeries {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn tick_labels(&self) -> Vec<String> {
        self.xs
            .iter()
            .map(|&x| format_axis_value(self.variable, x))
            .collect()
    }
}
