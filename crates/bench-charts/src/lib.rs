// File: crates/bench-charts/src/lib.rs
// Summary: Renders AVL / Red-Black / SkipList benchmark results as timing charts.

pub mod config;
pub mod dataset;
pub mod error;
pub mod render;

use std::path::PathBuf;

use log::info;

pub use config::{chart_jobs, ChartJob, Config};
pub use dataset::{Dataset, Metric, ResultRow, Structure};
pub use error::{DataLoadError, Error};
pub use render::{build_metric_chart, x_axis_values, ChartRenderer, RenderMode, XAxisValues};

/// Printed to stdout once every chart has been written.
pub const COMPLETION_MESSAGE: &str = "Gráficos gerados.";

/// Load the results once, then write every chart of [`chart_jobs`] in order.
/// Stops at the first failure; charts already written are left in place.
pub fn run(config: &Config) -> Result<Vec<PathBuf>, Error> {
    let dataset = Dataset::load(&config.input)?;
    info!("loaded {} rows from {}", dataset.len(), config.input.display());

    let renderer = ChartRenderer::new(config.render_options());
    let mut written = Vec::new();
    for job in chart_jobs() {
        let out = config.output_path(&job);
        renderer.render_metric_chart(&dataset, job.metric, job.y_label(), &out, &job.excluded, &config.mode)?;
        written.push(out);
    }
    Ok(written)
}
