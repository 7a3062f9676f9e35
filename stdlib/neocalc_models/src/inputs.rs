//! Clinical predictors shared by both models.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The four bedside values both models read.
///
/// Units: flow in mL/min, weight in grams, gestational age in weeks,
/// postnatal day in days. Any finite values are accepted by the evaluator;
/// see [`ClinicalInputs::validate`] for the clinical guidance ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClinicalInputs {
    pub flow: f64,
    pub weight: f64,
    pub gest_age: f64,
    pub postnatal_day: f64,
}

/// Names one field of [`ClinicalInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Predictor {
    Flow,
    Weight,
    GestAge,
    PostnatalDay,
}

/// Closed interval a predictor is expected to fall in at the bedside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlausibleRange {
    pub min: f64,
    pub max: f64,
}

impl PlausibleRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    #[error("{predictor} is not a finite number")]
    NonFinite { predictor: Predictor },
    #[error("{predictor} = {value} is outside the plausible range [{min}, {max}]")]
    OutOfRange {
        predictor: Predictor,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown predictor: {0:?}")]
pub struct ParsePredictorError(pub String);

impl Predictor {
    pub const ALL: [Predictor; 4] = [
        Predictor::Flow,
        Predictor::Weight,
        Predictor::GestAge,
        Predictor::PostnatalDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Predictor::Flow => "flow",
            Predictor::Weight => "weight",
            Predictor::GestAge => "gest_age",
            Predictor::PostnatalDay => "postnatal_day",
        }
    }

    /// Range the calculator form accepts for this predictor.
    pub fn plausible_range(&self) -> PlausibleRange {
        let (min, max) = match self {
            Predictor::Flow => (0.2, 3.0),
            Predictor::Weight => (300.0, 2500.0),
            Predictor::GestAge => (22.0, 36.0),
            Predictor::PostnatalDay => (0.0, 21.0),
        };
        PlausibleRange { min, max }
    }
}

impl fmt::Display for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Predictor {
    type Err = ParsePredictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Predictor::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePredictorError(s.to_string()))
    }
}

impl ClinicalInputs {
    pub fn new(flow: f64, weight: f64, gest_age: f64, postnatal_day: f64) -> Self {
        Self {
            flow,
            weight,
            gest_age,
            postnatal_day,
        }
    }

    pub fn get(&self, predictor: Predictor) -> f64 {
        match predictor {
            Predictor::Flow => self.flow,
            Predictor::Weight => self.weight,
            Predictor::GestAge => self.gest_age,
            Predictor::PostnatalDay => self.postnatal_day,
        }
    }

    pub fn set(&mut self, predictor: Predictor, value: f64) {
        match predictor {
            Predictor::Flow => self.flow = value,
            Predictor::Weight => self.weight = value,
            Predictor::GestAge => self.gest_age = value,
            Predictor::PostnatalDay => self.postnatal_day = value,
        }
    }

    /// Copy of `self` with one predictor replaced.
    pub fn with(mut self, predictor: Predictor, value: f64) -> Self {
        self.set(predictor, value);
        self
    }

    /// Check every predictor is finite and inside its plausible range.
    ///
    /// Reports the first failing predictor in declaration order. The models
    /// themselves never call this.
    pub fn validate(&self) -> Result<(), InputError> {
        for predictor in Predictor::ALL {
            let value = self.get(predictor);
            if !value.is_finite() {
                return Err(InputError::NonFinite { predictor });
            }
            let range = predictor.plausible_range();
            if !range.contains(value) {
                return Err(InputError::OutOfRange {
                    predictor,
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}

impl Default for ClinicalInputs {
    /// Midpoint-ish values matching the chart sliders' starting positions.
    fn default() -> Self {
        Self {
            flow: 1.2,
            weight: 1000.0,
            gest_age: 28.0,
            postnatal_day: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn get_and_with_address_the_same_field() {
        let base = ClinicalInputs::new(1.0, 900.0, 27.0, 4.0);
        for p in Predictor::ALL {
            let changed = base.with(p, 42.0);
            assert_eq!(changed.get(p), 42.0);
            for other in Predictor::ALL.into_iter().filter(|o| *o != p) {
                assert_eq!(changed.get(other), base.get(other));
            }
        }
    }

    #[test]
    fn predictor_names_round_trip() {
        for p in Predictor::ALL {
            assert_eq!(p.to_string().parse::<Predictor>(), Ok(p));
        }
        assert_eq!(
            "pulse".parse::<Predictor>(),
            Err(ParsePredictorError("pulse".into()))
        );
    }

    #[test]
    fn validate_accepts_range_edges() {
        assert_eq!(ClinicalInputs::new(0.2, 300.0, 22.0, 0.0).validate(), Ok(()));
        assert_eq!(ClinicalInputs::new(3.0, 2500.0, 36.0, 21.0).validate(), Ok(()));
    }

    #[test]
    fn validate_reports_first_offender() {
        let err = ClinicalInputs::new(1.0, 120.0, 40.0, 3.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange {
                predictor: Predictor::Weight,
                value: 120.0,
                min: 300.0,
                max: 2500.0,
            }
        );
        assert_eq!(
            err.to_string(),
            "weight = 120 is outside the plausible range [300, 2500]"
        );
    }

    #[test]
    fn validate_rejects_non_finite() {
        let err = ClinicalInputs::new(f64::NAN, 1000.0, 28.0, 3.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            InputError::NonFinite {
                predictor: Predictor::Flow
            }
        );
    }

    #[test]
    fn default_inputs_are_plausible() {
        assert!(ClinicalInputs::default().validate().is_ok());
    }
}
