//! Saturating clamp shared by every filter.
//!
//! All channel arithmetic runs in a wider type (f32 or i32) and is
//! saturated into the 8-bit range just before storage. The same helper
//! covers both, so integer and float paths saturate identically.

/// Bound `value` into `[min, max]`.
///
/// Returns `min` if `value < min`, `max` if `value > max`, otherwise
/// `value` unchanged. Works for any ordered numeric type.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Saturate a floating-point channel sum into 8-bit storage.
///
/// Clamps into `[0, 255]`, then rounds to nearest. Every filter variant
/// converts through this function so rounding stays uniform across the
/// crate.
pub fn to_channel(value: f32) -> u8 {
    clamp(value, 0.0, 255.0).round() as u8
}
