/// Numeric conversion helpers.
///
/// This module provides checked conversions from `f64` to integer types,
/// used when sizing domains. Every function returns an `Option`, which is
/// `None` whenever the conversion would lose information.
pub mod num;
