/// Floating point type used throughout the system
pub type Real = f64;

/// Linear interpolation of y over [x0, x1] at x.
pub fn lerp(x: Real, x0: Real, x1: Real, y0: Real, y1: Real) -> Real {
    if (x1 - x0).abs() < f64::EPSILON {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}
