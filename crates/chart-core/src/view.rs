// File: crates/chart-core/src/view.rs
// Summary: Visible data ranges and autoscale for chart axes.

use crate::axis::{ScaleKind, Ticks};
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Data bounds of every series plus the chart's fixed X ticks, padded by
    /// `margin` (fraction of span; multiplicative in log space for log axes).
    /// Empty charts fall back to the unit square (decade 1..10 on log Y).
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let y_log = chart.y_axis.kind == ScaleKind::Log10;
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for s in &chart.series {
            for &(x, y) in &s.data_xy {
                if !x.is_finite() { continue; }
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                if y.is_finite() && (!y_log || y > 0.0) {
                    y_min = y_min.min(y);
                    y_max = y_max.max(y);
                }
            }
        }
        if let Ticks::Fixed(ticks) = &chart.x_axis.ticks {
            for &x in ticks {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
            }
        }

        if !x_min.is_finite() || !x_max.is_finite() {
            x_min = 0.0;
            x_max = 1.0;
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            (y_min, y_max) = if y_log { (1.0, 10.0) } else { (0.0, 1.0) };
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_min -= 0.5;
            x_max += 0.5;
        }

        let xm = (x_max - x_min) * margin;
        let (y_min, y_max) = if y_log {
            let (lo, hi) = (y_min.log10(), y_max.log10());
            let (lo, hi) = if (hi - lo).abs() < 1e-9 { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
            let m = (hi - lo) * margin;
            (10f64.powf(lo - m), 10f64.powf(hi + m))
        } else {
            let (lo, hi) = if (y_max - y_min).abs() < 1e-9 { (y_min - 0.5, y_max + 0.5) } else { (y_min, y_max) };
            let m = (hi - lo) * margin;
            (lo - m, hi + m)
        };
        Self { x_min: x_min - xm, x_max: x_max + xm, y_min, y_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
