use neocalc_curves::{probability_chart_svg, sparkline_ascii, ChartState, Predictor};
use neocalc_models::{assess, to_json, ClinicalInputs, FlowSource, FLOW_D_THRESHOLD};

fn main() {
    env_logger::init();

    // Flow from echo measurements: 2.5 mm duct, 1.2 m/s, 150 bpm
    let flow = FlowSource::Derived {
        diameter_mm: 2.5,
        peak_velocity: 1.2,
        heart_rate: 150.0,
    }
    .flow();
    let inputs = ClinicalInputs::new(flow, 900.0, 27.0, 4.0);
    if let Err(e) = inputs.validate() {
        println!("warning: {e}");
    }

    let a = assess(&inputs);
    println!("flow={flow:.2} mL/min");
    println!("{}", a.safe);
    println!("{}", a.flow_d);

    let mut state = ChartState::new(inputs);
    for axis in Predictor::ALL {
        state.select_axis(axis);
        let series = state.series();
        println!(
            "{:<24} SAFE   |{}|",
            series.axis_label,
            sparkline_ascii(&series.safe, 40)
        );
        println!(
            "{:<24} FLOW-D |{}|",
            "",
            sparkline_ascii(&series.flow_d, 40)
        );
    }

    state.select_axis(Predictor::Flow);
    let svg = probability_chart_svg(&state.series().flow_d, FLOW_D_THRESHOLD, 400, 200);
    println!("svg: {} bytes", svg.len());

    match to_json(&a) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("serialization failed: {e}"),
    }
}
