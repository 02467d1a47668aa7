//! Quadratic Bézier degree elevation.

use crate::model::Point;

/// Re-express the quadratic (p0, c, p2) as the equivalent cubic. Exact for
/// finite input; the elevated curve traces the same points.
pub fn quadratic_to_cubic(p0: Point, c: Point, p2: Point) -> [Point; 4] {
    let c1 = Point {
        x: p0.x + (2.0 / 3.0) * (c.x - p0.x),
        y: p0.y + (2.0 / 3.0) * (c.y - p0.y),
    };
    let c2 = Point {
        x: p2.x + (2.0 / 3.0) * (c.x - p2.x),
        y: p2.y + (2.0 / 3.0) * (c.y - p2.y),
    };
    [p0, c1, c2, p2]
}

/// Evaluate the quadratic at parameter t ∈ [0, 1].
pub fn quadratic_point(t: f32, p0: Point, c: Point, p2: Point) -> Point {
    let u = 1.0 - t;
    Point {
        x: u * u * p0.x + 2.0 * u * t * c.x + t * t * p2.x,
        y: u * u * p0.y + 2.0 * u * t * c.y + t * t * p2.y,
    }
}
