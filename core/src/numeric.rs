/// Render the square-root diagnostic line, e.g. `sqrt(5) is 2.236068`.
///
/// Six fractional digits, matching C's `%lf`.
#[must_use]
pub fn sqrt_line(operand: u32) -> String {
    let root = f64::from(operand).sqrt();
    format!("sqrt({operand}) is {root:.6}")
}
