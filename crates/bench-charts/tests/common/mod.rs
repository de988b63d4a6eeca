// File: crates/bench-charts/tests/common/mod.rs
// Purpose: Shared fixtures: results CSVs written into temp directories.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const HEADER: &str = "Estrutura,N,TempoBuscaRemocao(ns),TempoBalanceamento(ns),TempoTotal(ns)";

/// Rows for AVL, RB and SkipList at N = 100, 200, 300 (same shape as the generator's output).
pub fn three_sizes_csv() -> String {
    let mut s = String::from(HEADER);
    s.push('\n');
    for n in [100u64, 200, 300] {
        s.push_str(&format!("AVL,{n},{},{},{}\n", n * 10, n * 5, n * 15));
        s.push_str(&format!("RB,{n},{},{},{}\n", n * 9, n * 4, n * 13));
        s.push_str(&format!("SkipList,{n},{},0,{}\n", n * 12, n * 12));
    }
    s
}

pub fn write_csv(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("resultados.csv");
    std::fs::write(&path, contents).expect("write csv fixture");
    path
}
