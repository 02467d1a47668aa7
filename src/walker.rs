//! Command walker: drives the curve flatteners over a path command
//! sequence and accumulates one polygon per sub-path.

use crate::geometry::arc::arc_to_cubics;
use crate::geometry::cubic::sample_cubic;
use crate::geometry::quadratic::quadratic_to_cubic;
use crate::geometry::tolerance::effective_tolerance;
use crate::model::{
    FlattenOptions, FlattenOutcome, PathCommand, Point, Polygon, UnsupportedCommand,
};

/// Flatten `commands` into polygons. Options are resolved into effective
/// values up front; the caller's struct is never written to.
pub fn flatten_commands(commands: &[PathCommand], opts: &FlattenOptions) -> FlattenOutcome {
    let tol = effective_tolerance(opts.tolerance);
    let mut walker = Walker {
        polys: Vec::new(),
        tol2: tol * tol,
        decimals: opts.decimals,
        prev_cubic_c2: None,
    };

    let mut unsupported = None;
    for (index, cmd) in commands.iter().enumerate() {
        if !walker.step(cmd) {
            unsupported = Some(UnsupportedCommand {
                index,
                code: cmd.code().to_string(),
            });
            break;
        }
    }

    FlattenOutcome {
        polygons: walker.polys,
        unsupported,
    }
}

struct Walker {
    polys: Vec<Polygon>,
    tol2: f32,
    decimals: Option<u32>,
    // Second control point of the last cubic/smooth-cubic command, for
    // smooth control-point reflection. Any other command clears it.
    prev_cubic_c2: Option<Point>,
}

impl Walker {
    /// Apply one command. Returns false when the command is unsupported and
    /// the run must stop.
    fn step(&mut self, cmd: &PathCommand) -> bool {
        match *cmd {
            PathCommand::Move { to } => {
                self.polys.push(Polygon::default());
                self.push_point(to.x, to.y);
                self.prev_cubic_c2 = None;
            }
            PathCommand::Line { to }
            | PathCommand::HorizontalLine { to }
            | PathCommand::VerticalLine { to } => {
                self.push_point(to.x, to.y);
                self.prev_cubic_c2 = None;
            }
            PathCommand::Close { to } => {
                // `to` is the sub-path start, resolved upstream.
                self.push_point(to.x, to.y);
                if let Some(p) = self.polys.last_mut() {
                    p.closed = true;
                }
                self.prev_cubic_c2 = None;
            }
            PathCommand::Cubic { from, c1, c2, to } => {
                self.run_cubic(from, c1, c2, to);
                self.prev_cubic_c2 = Some(c2);
            }
            PathCommand::SmoothCubic { from, c2, to } => {
                // Reflect the previous cubic's second control point through
                // the current start; without one the control collapses onto
                // the start point.
                let c1 = match self.prev_cubic_c2 {
                    Some(prev) => Point {
                        x: from.x * 2.0 - prev.x,
                        y: from.y * 2.0 - prev.y,
                    },
                    None => from,
                };
                self.run_cubic(from, c1, c2, to);
                self.prev_cubic_c2 = Some(c2);
            }
            PathCommand::Quadratic { from, c, to } => {
                let [q0, q1, q2, q3] = quadratic_to_cubic(from, c, to);
                self.run_cubic(q0, q1, q2, q3);
                self.prev_cubic_c2 = None;
            }
            PathCommand::Arc {
                from,
                to,
                rx,
                ry,
                x_rotation,
                large_arc,
                sweep,
            } => {
                let segments = arc_to_cubics(from, to, rx, ry, x_rotation, large_arc, sweep);
                for (i, seg) in segments.iter().enumerate() {
                    if i == 0 {
                        self.push_point(seg.from.x, seg.from.y);
                    }
                    self.run_cubic(seg.from, seg.c1, seg.c2, seg.to);
                }
                self.prev_cubic_c2 = None;
            }
            PathCommand::SmoothQuadratic { .. } => return false,
        }
        true
    }

    /// Sample one cubic's interior points, then its end point.
    fn run_cubic(&mut self, p0: Point, p1: Point, p2: Point, p3: Point) {
        let mut interior = Vec::new();
        sample_cubic(
            &mut interior,
            p0.x, p0.y, p1.x, p1.y, p2.x, p2.y, p3.x, p3.y,
            self.tol2, 0,
        );
        for p in interior {
            self.push_point(p.x, p.y);
        }
        self.push_point(p3.x, p3.y);
    }

    /// Append one coordinate pair to the current polygon, quantizing at
    /// append time when decimals are configured. Points arriving before any
    /// move command have no polygon to land in and are dropped.
    fn push_point(&mut self, x: f32, y: f32) {
        let (x, y) = match self.decimals {
            Some(d) => (round_to(x, d), round_to(y, d)),
            None => (x, y),
        };
        if let Some(p) = self.polys.last_mut() {
            p.points.push(Point { x, y });
        }
    }
}

#[inline]
fn round_to(v: f32, decimals: u32) -> f32 {
    let scale = 10f32.powi(decimals as i32);
    (v * scale).round() / scale
}
