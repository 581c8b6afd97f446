// File: crates/heap-plots/src/main.rs
// Summary: Renders the seven min-heap benchmark plots into docs/performance-plots/.

use std::path::Path;

use anyhow::{bail, Result};

use heap_plots::dataset::{Columns, BENCHMARKS};
use heap_plots::{generate_all, OUTPUT_DIR};

fn main() -> Result<()> {
    let out_dir = Path::new(OUTPUT_DIR);
    let columns = Columns::from_records(&BENCHMARKS);

    let report = generate_all(&columns, out_dir)?;
    if !report.failed.is_empty() {
        bail!(
            "{} of {} charts failed",
            report.failed.len(),
            report.failed.len() + report.written.len()
        );
    }

    println!("All {} plots written to {}", report.written.len(), out_dir.display());
    Ok(())
}
