//! Sensitivity curves for the SAFE and FLOW-D models.
//!
//! One predictor is swept over a range while the other three stay fixed, and
//! both models are evaluated at every grid point. [`sweep`] is the lazy core;
//! [`ChartState`] packages the slider state a front-end keeps and turns it into
//! a [`CurveSeries`] per redraw.

#![warn(missing_debug_implementations)]

pub mod config;
pub mod labels;
pub mod render;
pub mod sampler;
pub mod state;

pub use config::{AxisPreset, SweepConfig, DEFAULT_SAMPLE_COUNT};
pub use labels::format_axis_value;
pub use render::{probability_chart_svg, sparkline_ascii};
pub use sampler::{sweep, CurvePoint, Sweep};
pub use state::{ChartState, CurveSeries};

pub use neocalc_models::{ClinicalInputs, Predictor};
