//! Fixed model constants.
//!
//! The SAFE and FLOW-D coefficients were fitted offline and are baked into the
//! crate. Every evaluation path reads them from here; nothing else in the
//! workspace re-types a coefficient, knot or threshold.

/// Decision threshold for the SAFE model. Probabilities at or above it are
/// read as a stable phenotype.
pub const SAFE_THRESHOLD: f64 = 0.459;

/// Decision threshold for the FLOW-D model. Probabilities at or above it are
/// read as elevated risk of an adverse outcome.
pub const FLOW_D_THRESHOLD: f64 = 0.47;

/// Coefficients of the SAFE linear predictor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeCoefficients {
    pub intercept: f64,
    pub flow: f64,
    pub weight: f64,
    pub gest_age: f64,
    pub postnatal_day: f64,
}

/// Coefficients of the FLOW-D linear predictor. `ns1..ns3` multiply the
/// natural spline basis of the flow predictor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowDCoefficients {
    pub intercept: f64,
    pub ns1: f64,
    pub ns2: f64,
    pub ns3: f64,
    pub weight: f64,
    pub gest_age: f64,
    pub postnatal_day: f64,
}

/// Knots and boundaries of the natural cubic spline applied to flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineKnots {
    pub knot1: f64,
    pub knot2: f64,
    /// Lower boundary knot of the fitted spline. It does not enter the
    /// truncated-power basis below and is kept only as a record of the fit.
    pub boundary_min: f64,
    pub boundary_max: f64,
}

pub const SAFE: SafeCoefficients = SafeCoefficients {
    intercept: -28.20254534,
    flow: 0.58022365,
    weight: 0.01695558,
    gest_age: 0.45355769,
    postnatal_day: 0.18274358,
};

pub const FLOW_D: FlowDCoefficients = FlowDCoefficients {
    intercept: 32.78823733,
    ns1: 1.75804767,
    ns2: -14.14134246,
    ns3: -8.35643658,
    weight: -0.02250974,
    gest_age: -0.28389427,
    postnatal_day: -0.17834946,
};

pub const FLOW_SPLINE: SplineKnots = SplineKnots {
    knot1: 0.9012766,
    knot2: 1.2678588,
    boundary_min: 0.2261947,
    boundary_max: 2.7967098,
};
