// File: crates/bench-charts/src/error.rs
// Summary: Error taxonomy for loading results and writing charts.

use std::path::PathBuf;

use thiserror::Error;

/// The results CSV could not be turned into a dataset.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot open results file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}: missing column `{column}`", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    #[error("{}: malformed results data", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
    #[error("cannot write chart {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render chart {}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}
