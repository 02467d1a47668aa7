// Centralized tolerances and helpers for robust flattening

pub const DEFAULT_TOLERANCE: f32 = 1.0;   // chord deviation when caller gives none
pub const EPS_POS: f32 = 1e-4;            // point coincidence threshold (px)
pub const EPS_RADIUS: f32 = 1e-6;         // arc radius treated as collapsed
pub const ARC_MIN_ANGLE: f32 = 1e-5;      // remaining arc sweep treated as done (radians)

// Per-segment angular step for arc decomposition. Pi/2 would still keep each
// Bezier under a quarter turn; pi/4 gives a tighter fit per segment.
pub const ARC_MAX_STEP: f32 = std::f32::consts::FRAC_PI_4;

// Adaptive sampling cap; past this depth a curve is taken as flat so that
// non-finite coordinates cannot recurse forever.
pub const MAX_SAMPLE_DEPTH: u32 = 16;

#[inline] pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 { x.max(lo).min(hi) }
#[inline] pub fn near_zero(x: f32, eps: f32) -> bool { x.abs() <= eps }

/// Effective tolerance for a run: positive finite caller value, else default.
#[inline]
pub fn effective_tolerance(t: f32) -> f32 {
    if t.is_finite() && t > 0.0 { t } else { DEFAULT_TOLERANCE }
}
