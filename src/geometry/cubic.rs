//! Adaptive cubic Bézier sampling.
//!
//! Emits interior points only; the walker is responsible for the curve's
//! endpoints. Points come out in curve-traversal order, which downstream
//! code relies on to build polygon boundaries.

use crate::geometry::tolerance::MAX_SAMPLE_DEPTH;
use crate::model::Point;

/// Recursively subdivide the cubic (p0, p1, p2, p3) until each piece is
/// flat within `tol2` (tolerance squared), pushing one midpoint per flat
/// piece. A curve with all four control points coincident is degenerate and
/// contributes nothing.
pub fn sample_cubic(points: &mut Vec<Point>,
    x0: f32, y0: f32, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32,
    tol2: f32, depth: u32)
{
    if x0 == x1 && x0 == x2 && x0 == x3 && y0 == y1 && y0 == y2 && y0 == y3 {
        return;
    }

    let x01 = 0.5*(x0 + x1); let y01 = 0.5*(y0 + y1);
    let x12 = 0.5*(x1 + x2); let y12 = 0.5*(y1 + y2);
    let x23 = 0.5*(x2 + x3); let y23 = 0.5*(y2 + y3);
    let x012 = 0.5*(x01 + x12); let y012 = 0.5*(y01 + y12);
    let x123 = 0.5*(x12 + x23); let y123 = 0.5*(y12 + y23);
    let x0123 = 0.5*(x012 + x123); let y0123 = 0.5*(y012 + y123);

    let dx = x3 - x0;
    let dy = y3 - y0;

    // Perpendicular-distance proxies of both control points from the chord.
    let d1 = ((x1 - x3) * dy - (y1 - y3) * dx).abs();
    let d2 = ((x2 - x3) * dy - (y2 - y3) * dx).abs();

    if (d1 + d2) * (d1 + d2) < tol2 * (dx * dx + dy * dy) || depth >= MAX_SAMPLE_DEPTH {
        points.push(Point { x: x0123, y: y0123 });
    } else {
        sample_cubic(points, x0, y0, x01, y01, x012, y012, x0123, y0123, tol2, depth + 1);
        sample_cubic(points, x0123, y0123, x123, y123, x23, y23, x3, y3, tol2, depth + 1);
    }
}

/// Evaluate the cubic at parameter t ∈ [0, 1].
pub fn cubic_point(t: f32, p0: Point, p1: Point, p2: Point, p3: Point) -> Point {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;
    let uuu = uu * u;
    let ttt = tt * t;
    Point {
        x: uuu * p0.x + 3.0 * uu * t * p1.x + 3.0 * u * tt * p2.x + ttt * p3.x,
        y: uuu * p0.y + 3.0 * uu * t * p1.y + 3.0 * u * tt * p2.y + ttt * p3.y,
    }
}
