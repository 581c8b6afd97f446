// File: crates/heap-plots/src/lib.rs
// Summary: Generation entry point tying the dataset to the seven chart specs.

pub mod charts;
pub mod dataset;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::charts::{chart_specs, render_chart};
use crate::dataset::Columns;
use plot_core::RenderError;

/// Fixed destination for the generated artifacts, relative to the
/// repository root. The generator never creates it.
pub const OUTPUT_DIR: &str = "docs/performance-plots";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("output directory '{}' does not exist; create it before running", .0.display())]
    MissingOutputDir(PathBuf),
}

/// One chart that could not be rendered.
#[derive(Debug)]
pub struct ChartFailure {
    pub file_name: &'static str,
    pub error: RenderError,
}

/// Outcome of a full generation run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<ChartFailure>,
}

/// Render every chart into `out_dir`. A chart that fails is reported and
/// skipped; the remaining charts are still attempted, so earlier artifacts
/// stay valid. Only a missing output directory aborts the whole run.
pub fn generate_all(columns: &Columns, out_dir: &Path) -> Result<RunReport, GenerateError> {
    if !out_dir.is_dir() {
        return Err(GenerateError::MissingOutputDir(out_dir.to_path_buf()));
    }

    let mut report = RunReport::default();
    for spec in chart_specs() {
        match render_chart(&spec, columns, out_dir) {
            Ok(path) => {
                println!("Wrote {}", path.display());
                report.written.push(path);
            }
            Err(err) => {
                eprintln!("Failed to render {}: {}", spec.file_name, err);
                report.failed.push(ChartFailure { file_name: spec.file_name, error: err });
            }
        }
    }
    Ok(report)
}
