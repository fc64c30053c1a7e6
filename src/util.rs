/// Min/max Y across several series, ignoring non-finite values.
pub fn value_bounds(series: &[&[(f64, f64)]]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut found = false;
    for points in series {
        for &(_, y) in *points {
            if y.is_finite() {
                if y < lo {
                    lo = y;
                }
                if y > hi {
                    hi = y;
                }
                found = true;
            }
        }
    }
    if found {
        Some((lo, hi))
    } else {
        None
    }
}

/// Widen a raw min/max into a non-degenerate axis range.
pub fn padded_range(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span <= f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    let pad = span * 0.05;
    (min - pad, max + pad)
}

/// Format a duration as H:MM:SS for the status header.
pub fn format_elapsed(seconds: i64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{h}:{m:02}:{s:02}")
}
