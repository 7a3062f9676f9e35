use neocalc_models::Predictor;

/// Tick label for a swept value: whole grams for weight, two decimals for
/// everything else.
pub fn format_axis_value(variable: Predictor, x: f64) -> String {
    match variable {
        Predictor::Weight => format!("{}", x.round()),
        _ => format!("{x:.2}"),
    }
}
