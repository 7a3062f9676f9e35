//! Natural cubic spline basis for the flow predictor.
//!
//! FLOW-D was fitted with a three-column natural spline of flow (two interior
//! knots). The basis is written in truncated-power form:
//!
//! ```text
//! tp(x, k) = max(x - k, 0)^3
//! d1 = (tp(x, k1) - tp(x, k2)) / (k2 - k1)
//! d2 = (tp(x, k2) - tp(x, b1)) / (b1 - k2)
//! ns1 = x, ns2 = d1 - d2, ns3 = d2
//! ```

use crate::coefficients::{SplineKnots, FLOW_SPLINE};

/// The three basis columns for one flow value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplineBasis {
    pub ns1: f64,
    pub ns2: f64,
    pub ns3: f64,
}

impl SplineBasis {
    pub fn as_array(&self) -> [f64; 3] {
        [self.ns1, self.ns2, self.ns3]
    }
}

/// Truncated cubic `max(x - k, 0)^3`.
#[inline]
pub fn truncated_cubic(x: f64, k: f64) -> f64 {
    let t = (x - k).max(0.0);
    t * t * t
}

/// Basis of `x` under arbitrary knots.
pub fn natural_spline_basis(x: f64, knots: &SplineKnots) -> SplineBasis {
    let SplineKnots {
        knot1: k1,
        knot2: k2,
        boundary_max: b1,
        ..
    } = *knots;

    let d1 = (truncated_cubic(x, k1) - truncated_cubic(x, k2)) / (k2 - k1);
    let d2 = (truncated_cubic(x, k2) - truncated_cubic(x, b1)) / (b1 - k2);
    if d1.is_finite() && d2.is_finite() {
        return SplineBasis {
            ns1: x,
            ns2: d1 - d2,
            ns3: d2,
        };
    }

    // The cubes overflow only far above b1, where every truncated term is
    // active and the differences factor exactly:
    //   d1 - d2 = 3(b1 - k1)x + k1² + k1·k2 - k2·b1 - b1²
    //   d2      = (x - k2)² + (x - k2)(x - b1) + (x - b1)²
    let (b, c) = (x - k2, x - b1);
    SplineBasis {
        ns1: x,
        ns2: 3.0 * (b1 - k1) * x + (k1 * k1 + k1 * k2 - k2 * b1 - b1 * b1),
        ns3: b * b + b * c + c * c,
    }
}

/// Basis of a flow value under the FLOW-D knots.
pub fn spline_basis(flow: f64) -> SplineBasis {
    natural_spline_basis(flow, &FLOW_SPLINE)
}
