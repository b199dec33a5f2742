use nalgebra::Vector3;
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Component-wise linear interpolation between two vectors
#[inline]
pub fn lerp_vec3(start: &Vector3<f64>, end: &Vector3<f64>, factor: f64) -> Vector3<f64> {
    Vector3::new(
        lerp(start.x, end.x, factor),
        lerp(start.y, end.y, factor),
        lerp(start.z, end.z, factor),
    )
}

/// Normalized position of `value` within `[start, end]`, clamped to [0, 1]
#[inline]
pub fn inverse_lerp(start: f64, end: f64, value: f64) -> f64 {
    if (end - start).abs() < f64::EPSILON {
        return 0.0;
    }
    ((value - start) / (end - start)).clamp(0.0, 1.0)
}
