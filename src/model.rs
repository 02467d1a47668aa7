use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// One absolute path command, as produced by an upstream parser.
///
/// `HorizontalLine`, `VerticalLine` and `Close` carry a fully resolved
/// target even though the path syntax omits one axis (or both); resolving
/// relative coordinates is the parser's job, not ours.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    Move { to: Point },
    Line { to: Point },
    HorizontalLine { to: Point },
    VerticalLine { to: Point },
    /// `to` is the start point of the current sub-path.
    Close { to: Point },
    Cubic { from: Point, c1: Point, c2: Point, to: Point },
    /// First control point is synthesized by the walker from the previous
    /// cubic's second control point.
    SmoothCubic { from: Point, c2: Point, to: Point },
    Quadratic { from: Point, c: Point, to: Point },
    Arc {
        from: Point,
        to: Point,
        rx: f32,
        ry: f32,
        x_rotation: f32,
        large_arc: bool,
        sweep: bool,
    },
    /// Smooth quadratic (`T`). Parsers emit it; the walker does not flatten
    /// it and halts the run when one is encountered.
    SmoothQuadratic { to: Point },
}

impl PathCommand {
    /// Single-letter path-syntax code, for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            PathCommand::Move { .. } => "M",
            PathCommand::Line { .. } => "L",
            PathCommand::HorizontalLine { .. } => "H",
            PathCommand::VerticalLine { .. } => "V",
            PathCommand::Close { .. } => "Z",
            PathCommand::Cubic { .. } => "C",
            PathCommand::SmoothCubic { .. } => "S",
            PathCommand::Quadratic { .. } => "Q",
            PathCommand::Arc { .. } => "A",
            PathCommand::SmoothQuadratic { .. } => "T",
        }
    }
}

/// One flattened sub-path. Point order is traversal order and defines the
/// polygon boundary.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub closed: bool,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FlattenOptions {
    /// Maximum chord deviation of the approximation. Non-finite or
    /// non-positive values fall back to the default (1.0).
    pub tolerance: f32,
    /// When set, every emitted coordinate is rounded to this many decimal
    /// places at append time.
    pub decimals: Option<u32>,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        FlattenOptions {
            tolerance: crate::geometry::tolerance::DEFAULT_TOLERANCE,
            decimals: None,
        }
    }
}

/// Command that stopped a flatten run early.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnsupportedCommand {
    pub index: usize,
    pub code: String,
}

/// Result of a flatten run. `unsupported` is set when processing stopped at
/// a command the walker does not handle; `polygons` then holds everything
/// accumulated up to that point.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FlattenOutcome {
    pub polygons: Vec<Polygon>,
    pub unsupported: Option<UnsupportedCommand>,
}

impl FlattenOutcome {
    pub fn completed(&self) -> bool {
        self.unsupported.is_none()
    }
}
