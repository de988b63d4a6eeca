// File: crates/bench-charts/src/dataset.rs
// Summary: Benchmark result rows and the immutable dataset loaded from the results CSV.

use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::DataLoadError;

/// Benchmarked data structure (the `Estrutura` column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Structure {
    #[serde(rename = "AVL")]
    Avl,
    #[serde(rename = "RB")]
    Rb,
    #[serde(rename = "SkipList")]
    SkipList,
}

impl Structure {
    /// Plotting order.
    pub const ALL: [Structure; 3] = [Structure::Avl, Structure::Rb, Structure::SkipList];

    /// Label as it appears in the CSV and in chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            Structure::Avl => "AVL",
            Structure::Rb => "RB",
            Structure::SkipList => "SkipList",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the timing columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    SearchRemoval,
    Balancing,
    Total,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::SearchRemoval, Metric::Balancing, Metric::Total];

    /// Exact CSV header of the column.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::SearchRemoval => COL_SEARCH_REMOVAL,
            Metric::Balancing => COL_BALANCING,
            Metric::Total => COL_TOTAL,
        }
    }

    /// Axis label and chart title used by the driver.
    pub fn default_label(&self) -> &'static str {
        match self {
            Metric::SearchRemoval => "Tempo Busca+Remocao (ns)",
            Metric::Balancing => "Tempo Balanceamento (ns)",
            Metric::Total => "Tempo Total (ns)",
        }
    }
}

pub const COL_STRUCTURE: &str = "Estrutura";
pub const COL_SIZE: &str = "N";
pub const COL_SEARCH_REMOVAL: &str = "TempoBuscaRemocao(ns)";
pub const COL_BALANCING: &str = "TempoBalanceamento(ns)";
pub const COL_TOTAL: &str = "TempoTotal(ns)";

/// Headers the results file must carry, matched exactly.
pub const REQUIRED_COLUMNS: [&str; 5] = [COL_STRUCTURE, COL_SIZE, COL_SEARCH_REMOVAL, COL_BALANCING, COL_TOTAL];

/// One benchmark observation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Estrutura")]
    pub structure: Structure,
    #[serde(rename = "N")]
    pub n: u64,
    #[serde(rename = "TempoBuscaRemocao(ns)")]
    pub search_removal_ns: f64,
    #[serde(rename = "TempoBalanceamento(ns)")]
    pub balancing_ns: f64,
    #[serde(rename = "TempoTotal(ns)")]
    pub total_ns: f64,
}

impl ResultRow {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::SearchRemoval => self.search_removal_ns,
            Metric::Balancing => self.balancing_ns,
            Metric::Total => self.total_ns,
        }
    }
}

/// Rows in file order. Never mutated after loading.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<ResultRow>,
}

impl Dataset {
    pub fn new(rows: Vec<ResultRow>) -> Self {
        Self { rows }
    }

    /// Load the results CSV at `path`. A header row with every column in
    /// [`REQUIRED_COLUMNS`] is required; extra columns are ignored.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|source| DataLoadError::Open { path: path.to_path_buf(), source })?;
        Self::from_csv(rdr, path)
    }

    /// Like [`Dataset::load`] but from any reader; `origin` names it in errors.
    pub fn from_reader<R: io::Read>(reader: R, origin: impl Into<PathBuf>) -> Result<Self, DataLoadError> {
        let rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        Self::from_csv(rdr, &origin.into())
    }

    fn from_csv<R: io::Read>(mut rdr: csv::Reader<R>, origin: &Path) -> Result<Self, DataLoadError> {
        let malformed = |source| DataLoadError::Malformed { path: origin.to_path_buf(), source };

        let headers = rdr.headers().map_err(malformed)?.clone();
        debug!("{}: headers {:?}", origin.display(), headers);
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataLoadError::MissingColumn { path: origin.to_path_buf(), column });
            }
        }

        let rows = rdr
            .deserialize::<ResultRow>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(malformed)?;
        debug!("{}: loaded {} rows", origin.display(), rows.len());
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted distinct input sizes among rows of `structures`.
    pub fn distinct_sizes(&self, structures: &[Structure]) -> Vec<u64> {
        self.rows
            .iter()
            .filter(|r| structures.contains(&r.structure))
            .map(|r| r.n)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// `(N, metric)` points of one structure sorted by N, optionally restricted
    /// to the sizes in `allowed`.
    pub fn points(&self, structure: Structure, metric: Metric, allowed: Option<&[u64]>) -> Vec<(u64, f64)> {
        let mut points: Vec<(u64, f64)> = self
            .rows
            .iter()
            .filter(|r| r.structure == structure)
            .filter(|r| allowed.map_or(true, |a| a.contains(&r.n)))
            .map(|r| (r.n, r.metric(metric)))
            .collect();
        points.sort_by_key(|&(n, _)| n);
        points
    }
}
