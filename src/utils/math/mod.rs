pub mod vector;

/// Round to `places` decimal places, halves away from zero.
#[inline]
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
