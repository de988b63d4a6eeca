// File: crates/bench-charts/src/main.rs
// Summary: Binary entry point; renders the three timing charts from the results CSV.

use anyhow::Result;
use bench_charts::{Config, COMPLETION_MESSAGE};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env()?;
    bench_charts::run(&config)?;
    println!("{COMPLETION_MESSAGE}");
    Ok(())
}
