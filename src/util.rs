/// Numeric helpers.
///
/// `%g`-style number formatting for rendered values, and range-checked
/// conversion of number literal text to `f64`.
pub mod num;
