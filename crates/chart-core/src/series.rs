// File: crates/chart-core/src/series.rs
// Summary: Labelled XY line series with optional point markers.
// Colors come from the theme palette by series index.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
}

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend text. An empty label keeps the series out of the legend.
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub marker: Marker,
}

impl Series {
    pub fn line(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, marker: Marker::None }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }
}
