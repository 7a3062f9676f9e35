//! Dependency-free renderings of probability curves.
//!
//! Both renderers use a fixed `[0, 1]` vertical scale so curves from different
//! sweeps stay comparable and a threshold sits at the same height every time.

const LEVELS: &[u8] = b" .:-=+*#%@";

/// One character per column, darker for higher probability.
///
/// Resamples `probabilities` to `width` columns by nearest index. Values are
/// clamped into `[0, 1]` first.
pub fn sparkline_ascii(probabilities: &[f64], width: usize) -> String {
    if probabilities.is_empty() || width == 0 {
        return String::new();
    }

    let mut out = String::with_capacity(width);
    for i in 0..width {
        let idx = if width == 1 {
            probabilities.len() - 1
        } else {
            (i * (probabilities.len() - 1)) / (width - 1)
        };
        let z = probabilities[idx].clamp(0.0, 1.0);
        let level = ((z * (LEVELS.len() - 1) as f64).round() as usize).min(LEVELS.len() - 1);
        out.push(LEVELS[level] as char);
    }
    out
}

/// SVG line chart of one probability series with a dashed horizontal line at
/// `threshold`. Points are spread evenly across the width in input order.
pub fn probability_chart_svg(
    probabilities: &[f64],
    threshold: f64,
    width: u32,
    height: u32,
) -> String {
    if probabilities.is_empty() || width == 0 || height == 0 {
        return String::new();
    }

    let w = width as f64;
    let h = height as f64;
    let y_of = |p: f64| h - p.clamp(0.0, 1.0) * h;

    let mut points = String::new();
    if probabilities.len() == 1 {
        points.push_str(&format!("0,{:.3}", y_of(probabilities[0])));
    } else {
        let dx = w / ((probabilities.len() - 1) as f64);
        for (i, &p) in probabilities.iter().enumerate() {
            if i > 0 {
                points.push(' ');
            }
            points.push_str(&format!("{:.3},{:.3}", i as f64 * dx, y_of(p)));
        }
    }

    let ty = y_of(threshold);
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">\
<line x1=\"0\" y1=\"{ty:.3}\" x2=\"{width}\" y2=\"{ty:.3}\" stroke=\"gray\" stroke-dasharray=\"4 2\" />\
<polyline fill=\"none\" stroke=\"black\" stroke-width=\"1\" points=\"{points}\" /></svg>"
    )
}
