use polygonize::geometry::arc::arc_to_cubics;
use polygonize::geometry::cubic::{cubic_point, sample_cubic};
use polygonize::geometry::quadratic::{quadratic_point, quadratic_to_cubic};
use polygonize::Point;
use proptest::prelude::*;
use std::f32::consts::PI;

fn coord() -> impl Strategy<Value = f32> {
    (-100i32..=100).prop_map(|v| v as f32 * 0.5)
}

fn interior_count(c: [f32; 8], tol: f32) -> usize {
    let mut pts = Vec::new();
    sample_cubic(&mut pts, c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], tol * tol, 0);
    pts.len()
}

proptest! {
    // Halving the tolerance can only subdivide further, never less.
    #[test]
    fn refinement_is_monotonic(
        c in prop::array::uniform8(coord()),
        tol in 0.01f32..8.0,
    ) {
        let coarse = interior_count(c, tol);
        let fine = interior_count(c, tol / 2.0);
        prop_assert!(
            fine >= coarse,
            "tol {} gave {} points, tol/2 gave {}",
            tol, coarse, fine
        );
    }

    #[test]
    fn coincident_control_points_emit_nothing(x in coord(), y in coord(), tol in 0.01f32..8.0) {
        prop_assert_eq!(interior_count([x, y, x, y, x, y, x, y], tol), 0);
    }

    // Degree elevation is exact: the cubic retraces the quadratic.
    #[test]
    fn quadratic_elevation_is_exact(
        x0 in coord(), y0 in coord(),
        cx in coord(), cy in coord(),
        x2 in coord(), y2 in coord(),
    ) {
        let p0 = Point::new(x0, y0);
        let c = Point::new(cx, cy);
        let p2 = Point::new(x2, y2);
        let [q0, q1, q2, q3] = quadratic_to_cubic(p0, c, p2);
        for i in 0..=16 {
            let t = i as f32 / 16.0;
            let a = quadratic_point(t, p0, c, p2);
            let b = cubic_point(t, q0, q1, q2, q3);
            prop_assert!(
                (a.x - b.x).abs() < 1e-2 && (a.y - b.y).abs() < 1e-2,
                "divergence at t={}: ({}, {}) vs ({}, {})",
                t, a.x, a.y, b.x, b.y
            );
        }
    }

    // Arcs generated from a known center parameterization must convert back
    // and decompose into a chain that is continuous and meets both
    // endpoints.
    #[test]
    fn arc_chain_is_continuous_and_spans_endpoints(
        cx in -50i32..=50, cy in -50i32..=50,
        rx in 5i32..=50, ry in 5i32..=50,
        rot_step in 0u8..8,
        theta_step in 0u8..16,
        delta_step in 1u8..15,
        sweep in any::<bool>(),
    ) {
        let center = Point::new(cx as f32, cy as f32);
        let rx = rx as f32;
        let ry = ry as f32;
        let rot = rot_step as f32 * PI / 8.0;
        let theta = theta_step as f32 * PI / 8.0;
        let delta = (delta_step as f32 * PI / 8.0) * if sweep { 1.0 } else { -1.0 };
        let large_arc = delta.abs() > PI;

        let at = |t: f32| Point::new(
            center.x + rx * rot.cos() * t.cos() - ry * rot.sin() * t.sin(),
            center.y + rx * rot.sin() * t.cos() + ry * rot.cos() * t.sin(),
        );
        let p1 = at(theta);
        let p2 = at(theta + delta);
        let chord = ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt();
        prop_assume!(chord > 0.5);

        let segs = arc_to_cubics(p1, p2, rx, ry, rot, large_arc, sweep);
        prop_assert!(!segs.is_empty());

        let eps = 0.2;
        let first = segs.first().unwrap();
        let last = segs.last().unwrap();
        prop_assert!(
            (first.from.x - p1.x).abs() < eps && (first.from.y - p1.y).abs() < eps,
            "start ({}, {}) != p1 ({}, {})",
            first.from.x, first.from.y, p1.x, p1.y
        );
        prop_assert!(
            (last.to.x - p2.x).abs() < eps && (last.to.y - p2.y).abs() < eps,
            "end ({}, {}) != p2 ({}, {})",
            last.to.x, last.to.y, p2.x, p2.y
        );
        for w in segs.windows(2) {
            prop_assert!(
                (w[0].to.x - w[1].from.x).abs() < eps
                    && (w[0].to.y - w[1].from.y).abs() < eps
            );
        }
    }
}
