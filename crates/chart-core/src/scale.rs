// File: crates/chart-core/src/scale.rs
// Summary: Value-to-pixel transforms for linear and log10 axes.

use crate::axis::{Axis, ScaleKind};

/// Logical value along an axis (e.g., input size or nanoseconds).
pub type Value = f64;

/// Smallest value a log10 scale will accept; anything below clamps here.
pub const LOG_FLOOR: f64 = 1e-12;

/// Maps the data range [vmin, vmax] onto the pixel range [near_px, far_px].
/// For a Y axis `near_px` is the bottom edge; for an X axis it is the left edge.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub near_px: f32,
    pub far_px: f32,
    pub vmin: Value,
    pub vmax: Value,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn new_linear(near_px: f32, far_px: f32, vmin: Value, mut vmax: Value) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { near_px, far_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 }
    }

    pub fn new_log10(near_px: f32, far_px: f32, mut vmin: Value, mut vmax: Value) -> Self {
        // Ensure strictly positive range for log scale
        vmin = vmin.max(LOG_FLOOR);
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { near_px, far_px, vmin, vmax, log: true, log_min, log_max }
    }

    pub fn for_axis(axis: &Axis, near_px: f32, far_px: f32) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(near_px, far_px, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(near_px, far_px, axis.min, axis.max),
        }
    }

    /// Whether `v` has a position on this scale (log scales drop non-positive values).
    #[inline]
    pub fn accepts(&self, v: Value) -> bool {
        v.is_finite() && (!self.log || v > 0.0)
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let frac = if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(LOG_FLOOR).log10() - self.log_min) / span
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            (v - self.vmin) / span
        };
        self.near_px + frac as f32 * (self.far_px - self.near_px)
    }
}
