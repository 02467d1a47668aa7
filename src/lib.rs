//! Flatten absolute vector-path commands into polygonal approximations.
//!
//! The input is a sequence of path commands with all coordinates already
//! resolved to absolute values (an upstream parser's job). Each sub-path
//! becomes one [`Polygon`] whose vertices approximate its curves within the
//! configured tolerance.

pub mod model;
pub mod geometry {
    pub mod arc;
    pub mod cubic;
    pub mod quadratic;
    pub mod tolerance;
}
pub mod json;
mod walker;

pub use model::{
    FlattenOptions, FlattenOutcome, PathCommand, Point, Polygon, UnsupportedCommand,
};

/// Flatten a command sequence into polygons.
///
/// Never panics for finite input. The only failure surface is an
/// unsupported command, which stops the run and is reported through
/// [`FlattenOutcome::unsupported`] alongside the polygons accumulated so
/// far.
pub fn flatten(commands: &[PathCommand], opts: &FlattenOptions) -> FlattenOutcome {
    walker::flatten_commands(commands, opts)
}
