// File: crates/stock-grid-core/src/format.rs
// Summary: Fixed-precision number formatting for axis labels.

/// Round `value` to `digits` decimals and render with exactly that many.
///
/// Ties round toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`), and a
/// result that rounds to zero never prints a minus sign.
pub fn format_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, round_half_up(value, digits))
}

/// `format_fixed` of `value * 100` with a trailing `%`.
pub fn format_percent(value: f64, digits: usize) -> String {
    format!("{}%", format_fixed(value * 100.0, digits))
}

fn round_half_up(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(digits.min(15) as i32);
    let rounded = (value * factor + 0.5).floor() / factor;
    // normalise -0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}
