//! Elliptical-arc decomposition into cubic Bézier segments.
//!
//! Arcs arrive in endpoint parameterization (two endpoints, radii, x-axis
//! rotation, large-arc and sweep flags). They are converted to center
//! parameterization, then the angular span is chopped into steps of at most
//! `ARC_MAX_STEP` and each step is fitted with one cubic.

use crate::geometry::tolerance::{clamp, near_zero, ARC_MAX_STEP, ARC_MIN_ANGLE, EPS_POS, EPS_RADIUS};
use crate::model::Point;

/// One cubic Bézier piece of a decomposed arc, oriented start-to-end.
#[derive(Clone, Copy, Debug)]
pub struct ArcSegment {
    pub from: Point,
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

/// Decompose the arc from `p1` to `p2` into cubic segments.
///
/// Unreachable radii are scaled up per the standard endpoint-to-center
/// conversion, so any finite input with usable radii produces segments whose
/// chain starts at `p1` and ends at `p2`. A collapsed radius degrades the
/// arc to a single straight segment; coincident endpoints produce none.
pub fn arc_to_cubics(
    p1: Point,
    p2: Point,
    rx: f32,
    ry: f32,
    x_rotation: f32,
    large_arc: bool,
    sweep: bool,
) -> Vec<ArcSegment> {
    if near_zero(p1.x - p2.x, EPS_POS) && near_zero(p1.y - p2.y, EPS_POS) {
        return Vec::new();
    }
    if near_zero(rx, EPS_RADIUS) || near_zero(ry, EPS_RADIUS) {
        return vec![line_segment(p1, p2)];
    }

    let (radius, center, theta, delta) =
        endpoint_to_center(p1, p2, rx.abs(), ry.abs(), x_rotation, large_arc, sweep);

    let mut curves = Vec::new();
    let sign = if delta < 0.0 { -1.0 } else { 1.0 };
    let mut angle = theta;
    let mut remaining = delta.abs();
    let mut current = ellipse_point(center, radius, x_rotation, angle);

    while remaining > ARC_MIN_ANGLE {
        let step = remaining.min(ARC_MAX_STEP);
        let next_angle = angle + step * sign;
        let next = ellipse_point(center, radius, x_rotation, next_angle);

        // Circular-arc fit constant, applied in the ellipse's parametric space.
        let half_tan = (step / 2.0).tan();
        let alpha = step.sin() * ((4.0 + 3.0 * half_tan * half_tan).sqrt() - 1.0) / 3.0;

        let d_start = ellipse_derivative(radius, x_rotation, angle);
        let d_end = ellipse_derivative(radius, x_rotation, next_angle);

        curves.push(ArcSegment {
            from: current,
            c1: Point {
                x: current.x + alpha * sign * d_start.x,
                y: current.y + alpha * sign * d_start.y,
            },
            c2: Point {
                x: next.x - alpha * sign * d_end.x,
                y: next.y - alpha * sign * d_end.y,
            },
            to: next,
        });

        angle = next_angle;
        current = next;
        remaining -= step;
    }

    curves
}

/// Standard endpoint-to-center conversion. Returns the (possibly scaled-up)
/// radii, the center, the start angle and the signed angular delta wrapped
/// into (-2pi, 2pi).
fn endpoint_to_center(
    p1: Point,
    p2: Point,
    rx: f32,
    ry: f32,
    x_rotation: f32,
    large_arc: bool,
    sweep: bool,
) -> ((f32, f32), Point, f32, f32) {
    let (sin_phi, cos_phi) = x_rotation.sin_cos();

    let dx2 = (p1.x - p2.x) / 2.0;
    let dy2 = (p1.y - p2.y) / 2.0;

    // Midpoint in the ellipse's local frame.
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;

    let mut rx = rx;
    let mut ry = ry;
    let cr = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if cr > 1.0 {
        // Endpoints unreachable with the given radii; scale both up.
        let scale = cr.sqrt();
        rx *= scale;
        ry *= scale;
    }

    let rxs = rx * rx;
    let rys = ry * ry;
    let x1ps = x1p * x1p;
    let y1ps = y1p * y1p;

    let dq = rxs * rys - rxs * y1ps - rys * x1ps;
    let pq = (dq.max(0.0) / (rxs * y1ps + rys * x1ps)).sqrt();
    let q = if large_arc != sweep { pq } else { -pq };

    let cxp = q * rx * y1p / ry;
    let cyp = -q * ry * x1p / rx;

    let center = Point {
        x: cos_phi * cxp - sin_phi * cyp + (p1.x + p2.x) / 2.0,
        y: sin_phi * cxp + cos_phi * cyp + (p1.y + p2.y) / 2.0,
    };

    let theta = vector_angle(1.0, 0.0, (x1p - cxp) / rx, (y1p - cyp) / ry);
    let mut delta = vector_angle(
        (x1p - cxp) / rx,
        (y1p - cyp) / ry,
        (-x1p - cxp) / rx,
        (-y1p - cyp) / ry,
    ) % (2.0 * std::f32::consts::PI);

    // Sweep selects the traversal direction; push delta onto the matching
    // branch so large arcs span more than half a turn.
    if !sweep && delta > 0.0 {
        delta -= 2.0 * std::f32::consts::PI;
    } else if sweep && delta < 0.0 {
        delta += 2.0 * std::f32::consts::PI;
    }

    ((rx, ry), center, theta, delta)
}

/// Point on the ellipse at parametric angle `t`.
fn ellipse_point(center: Point, radius: (f32, f32), x_rotation: f32, t: f32) -> Point {
    let (sin_phi, cos_phi) = x_rotation.sin_cos();
    Point {
        x: center.x + radius.0 * cos_phi * t.cos() - radius.1 * sin_phi * t.sin(),
        y: center.y + radius.0 * sin_phi * t.cos() + radius.1 * cos_phi * t.sin(),
    }
}

/// Derivative of the parametric ellipse at angle `t`.
fn ellipse_derivative(radius: (f32, f32), x_rotation: f32, t: f32) -> Point {
    let (sin_phi, cos_phi) = x_rotation.sin_cos();
    Point {
        x: -radius.0 * cos_phi * t.sin() - radius.1 * sin_phi * t.cos(),
        y: -radius.0 * sin_phi * t.sin() + radius.1 * cos_phi * t.cos(),
    }
}

/// Signed angle between two vectors, acos input clamped against roundoff.
fn vector_angle(ux: f32, uy: f32, vx: f32, vy: f32) -> f32 {
    let dot = ux * vx + uy * vy;
    let len = ((ux * ux + uy * uy) * (vx * vx + vy * vy)).sqrt();
    let angle = clamp(dot / len, -1.0, 1.0).acos();
    if ux * vy - uy * vx < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Straight fallback segment with control points at the thirds.
fn line_segment(p1: Point, p2: Point) -> ArcSegment {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    ArcSegment {
        from: p1,
        c1: Point { x: p1.x + dx / 3.0, y: p1.y + dy / 3.0 },
        c2: Point { x: p1.x + 2.0 * dx / 3.0, y: p1.y + 2.0 * dy / 3.0 },
        to: p2,
    }
}
