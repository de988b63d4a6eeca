// File: crates/bench-charts/src/render.rs
// Summary: ChartRenderer; one line chart per metric, one series per structure.
// Notes:
// - The standard and dense-sampling layouts are both `RenderMode` values fed
//   to the same routine; nothing else differs between them.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chart_core::{Axis, Chart, Marker, RenderOptions, ScaleKind, Series, Ticks};
use log::{debug, info, warn};

use crate::dataset::{Dataset, Metric, Structure};
use crate::error::Error;

/// Input sizes shown by the dense-sampling preset (the sizes the benchmark generator runs).
pub const DENSE_SAMPLING_SIZES: [u64; 5] = [3_000_000, 3_500_000, 4_000_000, 4_500_000, 5_000_000];

/// Fraction of the data span left empty on each side of the plot.
const AXIS_MARGIN: f64 = 0.05;

/// Which input sizes make up the x axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XAxisValues {
    /// Every distinct N present for the plotted structures.
    AllDistinct,
    /// Exactly these sizes; rows with other sizes are dropped.
    Fixed(Vec<u64>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderMode {
    pub x_values: XAxisValues,
    pub y_scale: ScaleKind,
    /// Degrees, counter-clockwise.
    pub x_tick_rotation: f32,
    /// Grow margins so tick labels are never clipped.
    pub auto_layout: bool,
}

impl RenderMode {
    /// All sizes in the data, linear time axis, horizontal labels.
    pub fn standard() -> Self {
        Self {
            x_values: XAxisValues::AllDistinct,
            y_scale: ScaleKind::Linear,
            x_tick_rotation: 0.0,
            auto_layout: false,
        }
    }

    /// A fixed list of sizes, log10 time axis, labels rotated 45 degrees.
    pub fn dense_sampling(sizes: impl IntoIterator<Item = u64>) -> Self {
        let mut sizes: Vec<u64> = sizes.into_iter().collect();
        sizes.sort_unstable();
        sizes.dedup();
        Self {
            x_values: XAxisValues::Fixed(sizes),
            y_scale: ScaleKind::Log10,
            x_tick_rotation: 45.0,
            auto_layout: true,
        }
    }
}

impl Default for RenderMode {
    fn default() -> Self { Self::standard() }
}

/// Structures that get a series, in plotting order.
pub fn plotted_structures(excluded: &[Structure]) -> Vec<Structure> {
    Structure::ALL.into_iter().filter(|s| !excluded.contains(s)).collect()
}

/// X axis sizes for a chart: the fixed list as given, or the sorted distinct
/// sizes of the structures that are not excluded.
pub fn x_axis_values(dataset: &Dataset, excluded: &[Structure], mode: &RenderMode) -> Vec<u64> {
    match &mode.x_values {
        XAxisValues::AllDistinct => dataset.distinct_sizes(&plotted_structures(excluded)),
        XAxisValues::Fixed(sizes) => sizes.clone(),
    }
}

/// Build the chart for `metric` without rendering it. Structures with no rows
/// in the chart's x domain contribute no series (and no legend entry).
pub fn build_metric_chart(
    dataset: &Dataset,
    metric: Metric,
    y_label: &str,
    excluded: &[Structure],
    mode: &RenderMode,
) -> Chart {
    let sizes = x_axis_values(dataset, excluded, mode);
    let allowed = match mode.x_values {
        XAxisValues::Fixed(_) => Some(sizes.as_slice()),
        XAxisValues::AllDistinct => None,
    };

    let mut chart = Chart::new().with_title(y_label);
    chart.x_axis = Axis::new("N", 0.0, 1.0)
        .with_ticks(Ticks::Fixed(sizes.iter().map(|&n| n as f64).collect()))
        .with_tick_rotation(mode.x_tick_rotation);
    chart.y_axis = Axis::new(y_label, 0.0, 1.0).with_kind(mode.y_scale);

    for structure in plotted_structures(excluded) {
        let points = dataset.points(structure, metric, allowed);
        if points.is_empty() {
            if !dataset.is_empty() {
                warn!("no {} rows to plot in chart '{}'", structure, y_label);
            }
            continue;
        }
        debug!("{}: {} has {} points", metric.column(), structure, points.len());
        let data = points.into_iter().map(|(n, v)| (n as f64, v)).collect();
        chart.add_series(Series::line(structure.label(), data).with_marker(Marker::Circle));
    }

    chart.autoscale_axes(AXIS_MARGIN);
    chart
}

/// Renders metric charts to PNG files with shared surface/theme settings.
#[derive(Clone, Debug, Default)]
pub struct ChartRenderer {
    options: RenderOptions,
}

impl ChartRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Surface options for `mode`.
    pub fn render_options(&self, mode: &RenderMode) -> RenderOptions {
        let mut opts = self.options.clone();
        opts.auto_layout = mode.auto_layout;
        opts
    }

    /// Render the `metric` chart to `output_path`, replacing any existing file.
    /// The parent directory must already exist.
    pub fn render_metric_chart(
        &self,
        dataset: &Dataset,
        metric: Metric,
        y_label: &str,
        output_path: &Path,
        excluded: &[Structure],
        mode: &RenderMode,
    ) -> Result<(), Error> {
        let chart = build_metric_chart(dataset, metric, y_label, excluded, mode);
        let bytes = chart
            .render_to_png_bytes(&self.render_options(mode))
            .map_err(|e| Error::Render { path: output_path.to_path_buf(), source: e.into() })?;
        write_png(output_path, &bytes)?;
        info!("wrote {} ({} series, {} bytes)", output_path.display(), chart.series.len(), bytes.len());
        Ok(())
    }
}

/// Create (or truncate) `path`, write `bytes`, flush, and close before returning.
fn write_png(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let io_err = |source| Error::Io { path: path.to_path_buf(), source };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(bytes).map_err(io_err)?;
    file.flush().map_err(io_err)?;
    Ok(())
}
