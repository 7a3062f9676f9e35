use neocalc_curves::{sparkline_ascii, sweep, ChartState, Predictor, SweepConfig};
use neocalc_models::{assess, FLOW_D_THRESHOLD, SAFE_THRESHOLD};
use pretty_assertions::assert_eq;

use crate::{init_logging, CASES};

#[test]
fn curve_passes_through_the_calculator_point() {
    init_logging();
    for case in CASES {
        let inputs = case.inputs();
        let a = assess(&inputs);
        for axis in Predictor::ALL {
            let v = inputs.get(axis);
            let config = SweepConfig::new(axis, v, v, 1);
            let point = sweep(inputs, config).next().unwrap();
            assert_eq!(point.x, v);
            assert_eq!(point.p_safe, a.safe.probability, "{} on {axis}", case.name);
            assert_eq!(point.p_flow, a.flow_d.probability, "{} on {axis}", case.name);
        }
    }
}

#[test]
fn flow_axis_crosses_the_flow_d_threshold() {
    let mut state = ChartState::new(CASES[0].inputs());
    state.select_axis(Predictor::Flow);
    state.set_value(Predictor::Weight, 900.0);
    state.set_value(Predictor::GestAge, 27.0);
    let series = state.series();

    let above = series.flow_d.iter().filter(|p| **p >= FLOW_D_THRESHOLD).count();
    assert!(above > 0 && above < series.len());
}

#[test]
fn weight_axis_crosses_the_safe_threshold() {
    let mut state = ChartState::new(CASES[1].inputs());
    state.select_axis(Predictor::Weight);
    let series = state.series();

    assert!(series.safe[0] < SAFE_THRESHOLD);
    assert!(series.safe[series.len() - 1] >= SAFE_THRESHOLD);
    assert_eq!(sparkline_ascii(&series.safe, 10).len(), 10);
}

#[test]
fn redraws_are_reproducible() {
    let state = ChartState::new(CASES[2].inputs());
    assert_eq!(state.series(), state.series());
}
