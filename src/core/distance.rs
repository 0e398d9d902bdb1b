use geo::Point;

/// Euclidean distance between two points on the plane
///
/// Computed as `sqrt(dx² + dy²)` with plain multiplications so the result is
/// reproducible bit-for-bit on any IEEE 754 target.
#[inline]
pub fn planar_distance(from: Point<f64>, to: Point<f64>) -> f64 {
    delta_length(to - from)
}

/// Length of an offset vector
#[inline]
pub fn delta_length(delta: Point<f64>) -> f64 {
    let (dx, dy) = (delta.x(), delta.y());
    (dx * dx + dy * dy).sqrt()
}
