//! Ductal flow risk models.
//!
//! Two fixed logistic regressions evaluated on four bedside predictors
//! (ductal flow, birth weight, gestational age, postnatal day):
//!
//! - **SAFE** predicts a stable phenotype, linear in all four predictors.
//! - **FLOW-D** predicts an adverse outcome, with flow expanded through a
//!   natural cubic spline.
//!
//! Every function in the evaluation path is pure and total over finite
//! inputs. Input range checks are offered separately through
//! [`ClinicalInputs::validate`] for callers that want them.
//!
//! ```ignore
//! use neocalc_models::{assess, ClinicalInputs, RiskLabel};
//!
//! let a = assess(&ClinicalInputs::new(0.5, 800.0, 26.0, 3.0));
//! assert_eq!(a.flow_d.label(), RiskLabel::HighRisk);
//! ```

#![warn(missing_debug_implementations)]

pub mod coefficients;
pub mod flow;
pub mod inputs;
pub mod logistic;
pub mod model;
pub mod spline;

pub use coefficients::{
    FlowDCoefficients, SafeCoefficients, SplineKnots, FLOW_D, FLOW_D_THRESHOLD, FLOW_SPLINE, SAFE,
    SAFE_THRESHOLD,
};
pub use flow::{derive_flow, FlowSource};
pub use inputs::{ClinicalInputs, InputError, ParsePredictorError, PlausibleRange, Predictor};
pub use logistic::sigmoid;
pub use model::{
    assess, calc_flow_d, calc_safe, flow_d_logit, safe_logit, Assessment, ModelKind,
    ProbabilityResult, RiskLabel,
};
pub use spline::{natural_spline_basis, spline_basis, truncated_cubic, SplineBasis};

/// Serializes a value to a pretty-printed JSON string.
#[cfg(feature = "serde")]
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserializes a value from a JSON string.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> serde::Deserialize<'de>>(json: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(json)
}
