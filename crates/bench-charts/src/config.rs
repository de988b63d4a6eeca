// File: crates/bench-charts/src/config.rs
// Summary: Run configuration: fixed input/output locations, render mode, theme.
// Notes:
// - The binary takes no arguments; the BENCH_CHARTS_* environment variables
//   are the only overrides.

use std::ffi::OsString;
use std::path::PathBuf;

use chart_core::{RenderOptions, Theme};
use log::warn;

use crate::dataset::{Metric, Structure};
use crate::error::Error;
use crate::render::{RenderMode, DENSE_SAMPLING_SIZES};

pub const DEFAULT_INPUT: &str = "../resultados/resultados.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "../graficos";

pub const ENV_INPUT: &str = "BENCH_CHARTS_INPUT";
pub const ENV_OUTPUT_DIR: &str = "BENCH_CHARTS_OUTPUT_DIR";
pub const ENV_MODE: &str = "BENCH_CHARTS_MODE";
pub const ENV_SIZES: &str = "BENCH_CHARTS_SIZES";
pub const ENV_THEME: &str = "BENCH_CHARTS_THEME";

/// One of the charts the driver produces.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartJob {
    pub metric: Metric,
    pub file_name: &'static str,
    pub excluded: Vec<Structure>,
}

impl ChartJob {
    pub fn y_label(&self) -> &'static str {
        self.metric.default_label()
    }
}

/// The three charts, in generation order. SkipList does no balancing, so it
/// is left out of the balancing chart.
pub fn chart_jobs() -> Vec<ChartJob> {
    vec![
        ChartJob { metric: Metric::SearchRemoval, file_name: "grafico_busca_remocao.png", excluded: Vec::new() },
        ChartJob { metric: Metric::Balancing, file_name: "grafico_balanceamento.png", excluded: vec![Structure::SkipList] },
        ChartJob { metric: Metric::Total, file_name: "grafico_total.png", excluded: Vec::new() },
    ]
}

#[derive(Clone, Debug)]
pub struct Config {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub mode: RenderMode,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            mode: RenderMode::standard(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Defaults overridden by whatever `get` returns for the BENCH_CHARTS_* keys.
    /// Path keys are taken as-is; the others must be valid UTF-8.
    pub fn from_lookup(get: impl Fn(&str) -> Option<OsString>) -> Result<Self, Error> {
        let text = |key: &str| -> Result<Option<String>, Error> {
            get(key)
                .map(|v| v.into_string().map_err(|_| Error::Config(format!("{key}: value is not valid UTF-8"))))
                .transpose()
        };

        let mut cfg = Self::default();
        if let Some(input) = get(ENV_INPUT) {
            cfg.input = PathBuf::from(input);
        }
        if let Some(dir) = get(ENV_OUTPUT_DIR) {
            cfg.output_dir = PathBuf::from(dir);
        }
        if let Some(name) = text(ENV_THEME)? {
            cfg.theme = chart_core::theme::find(&name)
                .ok_or_else(|| Error::Config(format!("{ENV_THEME}: unknown theme '{name}'")))?;
        }
        let sizes = text(ENV_SIZES)?;
        cfg.mode = match text(ENV_MODE)?.as_deref().map(str::trim) {
            None | Some("") | Some("standard") => {
                if sizes.is_some() {
                    warn!("{ENV_SIZES} is ignored unless {ENV_MODE}=dense");
                }
                RenderMode::standard()
            }
            Some("dense") => {
                let sizes = match sizes {
                    Some(list) => parse_sizes(&list)?,
                    None => DENSE_SAMPLING_SIZES.to_vec(),
                };
                RenderMode::dense_sampling(sizes)
            }
            Some(other) => {
                return Err(Error::Config(format!("{ENV_MODE}: expected 'standard' or 'dense', got '{other}'")));
            }
        };
        Ok(cfg)
    }

    pub fn output_path(&self, job: &ChartJob) -> PathBuf {
        self.output_dir.join(job.file_name)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { theme: self.theme, ..RenderOptions::default() }
    }
}

/// Comma separated list of positive sizes, e.g. `100,200,300`.
fn parse_sizes(list: &str) -> Result<Vec<u64>, Error> {
    let sizes = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<u64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(Error::Config(format!("{ENV_SIZES}: '{s}' is not a positive integer"))),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if sizes.is_empty() {
        return Err(Error::Config(format!("{ENV_SIZES}: no sizes given")));
    }
    Ok(sizes)
}
