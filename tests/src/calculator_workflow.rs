use neocalc_models::{assess, ClinicalInputs, InputError, Predictor, RiskLabel};
use pretty_assertions::assert_eq;

use crate::{init_logging, CASES};

fn labels() -> Vec<(&'static str, RiskLabel, RiskLabel)> {
    CASES
        .iter()
        .map(|case| {
            let a = assess(&case.inputs());
            (case.name, a.safe.label(), a.flow_d.label())
        })
        .collect()
}

#[test]
fn every_case_gets_both_labels() {
    init_logging();
    assert_eq!(
        labels(),
        vec![
            ("reference", RiskLabel::StablePhenotype, RiskLabel::LowRisk),
            ("extremely_preterm", RiskLabel::NotStable, RiskLabel::HighRisk),
            ("high_flow", RiskLabel::StablePhenotype, RiskLabel::LowRisk),
            ("echo_derived", RiskLabel::StablePhenotype, RiskLabel::HighRisk),
        ]
    );
}

#[test]
fn echo_derived_flow_feeds_both_models() {
    let case = CASES[3];
    let a = assess(&case.inputs());
    assert!((a.inputs.flow - 0.8835729338221294).abs() < 1e-12);
    assert!((a.safe.probability - 0.6334807393117331).abs() < 1e-9);
    assert!((a.flow_d.probability - 0.996679426057885).abs() < 1e-9);
}

#[test]
fn form_validation_is_separate_from_evaluation() {
    // out of range for the form, still evaluable
    let inputs = ClinicalInputs::new(3.5, 1500.0, 30.0, 5.0);
    assert!(matches!(
        inputs.validate(),
        Err(InputError::OutOfRange {
            predictor: Predictor::Flow,
            ..
        })
    ));
    let a = assess(&inputs);
    assert!(a.safe.probability > 0.0 && a.safe.probability < 1.0);
    assert!(a.flow_d.probability > 0.0 && a.flow_d.probability < 1.0);
}

#[test]
fn result_cards_render_like_the_calculator() {
    let a = assess(&CASES[1].inputs());
    assert_eq!(a.safe.to_string(), "SAFE: 0.118 (11.8%) Not stable / uncertain");
}

#[test]
fn assessment_json_carries_inputs_and_flags() {
    let a = assess(&CASES[0].inputs());
    let value = serde_json::to_value(a).unwrap();
    assert_eq!(value["inputs"]["weight"], 1500.0f64);
    assert_eq!(value["safe"]["model"], "safe");
    assert_eq!(value["safe"]["crosses_threshold"], true);
    assert_eq!(value["flow_d"]["model"], "flow_d");
    assert_eq!(value["flow_d"]["crosses_threshold"], false);
}
