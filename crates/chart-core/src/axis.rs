// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind and tick placement.

use crate::grid::{log_ticks, nice_ticks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

/// Where ticks go along an axis.
#[derive(Clone, Debug, PartialEq)]
pub enum Ticks {
    /// Generated from the axis range; roughly `target` ticks on linear axes,
    /// one per decade on log axes.
    Auto { target: usize },
    /// Exactly these values, in this order, whether or not any data sits there.
    Fixed(Vec<f64>),
}

impl Default for Ticks {
    fn default() -> Self { Ticks::Auto { target: 6 } }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    pub ticks: Ticks,
    /// Tick label rotation in degrees, counter-clockwise. 0 keeps labels horizontal.
    pub tick_rotation: f32,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: ScaleKind::Linear,
            ticks: Ticks::default(),
            tick_rotation: 0.0,
        }
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn with_tick_rotation(mut self, degrees: f32) -> Self {
        self.tick_rotation = degrees;
        self
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 1.0)
    }

    /// Tick positions in data units.
    pub fn tick_values(&self) -> Vec<f64> {
        match (&self.ticks, self.kind) {
            (Ticks::Fixed(v), _) => v.clone(),
            (Ticks::Auto { target }, ScaleKind::Linear) => nice_ticks(self.min, self.max, *target),
            (Ticks::Auto { .. }, ScaleKind::Log10) => log_ticks(self.min, self.max),
        }
    }
}
