//! Lazy evaluation of both models along one predictor.

use std::iter::FusedIterator;

#[cfg(feature = "logging")]
use log::debug;
use neocalc_models::{ClinicalInputs, ModelKind};

use crate::config::SweepConfig;

/// Both model probabilities at one value of the swept predictor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvePoint {
    pub x: f64,
    pub p_safe: f64,
    pub p_flow: f64,
}

/// Iterator over the grid of a [`SweepConfig`].
///
/// Holds only the fixed inputs, the config and an index window, so cloning it
/// or calling [`sweep`] again restarts from the first point.
#[derive(Debug, Clone)]
pub struct Sweep {
    fixed: ClinicalInputs,
    config: SweepConfig,
    front: usize,
    back: usize,
}

/// Sweep `config.variable` over its range with the other predictors held at
/// their values in `fixed`.
///
/// Yields `config.len()` points in ascending order of the swept value. An
/// inverted or non-finite range yields nothing; a collapsed range or a zero
/// sample count yields the single point at `config.min`.
pub fn sweep(fixed: ClinicalInputs, config: SweepConfig) -> Sweep {
    let len = config.len();
    #[cfg(feature = "logging")]
    {
        if len == 0 {
            debug!(
                "empty sweep of {} over [{}, {}]",
                config.variable, config.min, config.max
            );
        } else {
            debug!(
                "sweeping {} over [{}, {}] in {} points",
                config.variable, config.min, config.max, len
            );
        }
    }
    Sweep {
        fixed,
        config,
        front: 0,
        back: len,
    }
}

impl Sweep {
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    fn point_at(&self, i: usize) -> CurvePoint {
        let x = self.config.x_at(i);
        let inputs = self.fixed.with(self.config.variable, x);
        CurvePoint {
            x,
            p_safe: ModelKind::Safe.probability(&inputs),
            p_flow: ModelKind::FlowD.probability(&inputs),
        }
    }
}

impl Iterator for Sweep {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.front >= self.back {
            return None;
        }
        let point = self.point_at(self.front);
        self.front += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Sweep {
    fn next_back(&mut self) -> Option<CurvePoint> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point_at(self.back))
    }
}

impl ExactSizeIterator for Sweep {}

impl FusedIterator for Sweep {}
