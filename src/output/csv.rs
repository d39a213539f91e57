//! CSV export
//!
//! Sequence exports carry one row per value with the producing method in
//! the last column, so several exports concatenate cleanly for spreadsheet
//! analysis. Export file names embed a local timestamp; two runs never
//! collide within the same second.

use crate::generator::BatchOutcome;
use crate::Result;
use anyhow::Context;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write a sequence to `path` as `index,value,method` rows
pub fn write_sequence(path: &Path, values: &[f64], method: &str) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    writeln!(file, "index,value,method")?;
    for (index, value) in values.iter().enumerate() {
        writeln!(file, "{index},{value},{method}")?;
    }
    file.flush()?;
    Ok(())
}

/// Write a batched run to `path` as `batch,index,value,method` rows
pub fn write_batches(path: &Path, outcome: &BatchOutcome, method: &str) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
    writeln!(file, "batch,index,value,method")?;
    for (batch, values) in outcome.batches.iter().enumerate() {
        for (index, value) in values.iter().enumerate() {
            writeln!(file, "{batch},{index},{value},{method}")?;
        }
    }
    file.flush()?;
    Ok(())
}

/// Export a sequence into `dir` under a timestamped name
///
/// Creates the directory if needed and returns the path written.
pub fn export_sequence(dir: &Path, method: &str, values: &[f64]) -> Result<PathBuf> {
    let path = timestamped_path(dir, method)?;
    write_sequence(&path, values, method)?;
    Ok(path)
}

/// Export a batched run into `dir` under a timestamped name
pub fn export_batches(dir: &Path, method: &str, outcome: &BatchOutcome) -> Result<PathBuf> {
    let path = timestamped_path(dir, method)?;
    write_batches(&path, outcome, method)?;
    Ok(path)
}

fn timestamped_path(dir: &Path, method: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    Ok(dir.join(format!("results_{method}_{stamp}.csv")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{run_batches, GeneratorSpec};

    fn spec() -> GeneratorSpec {
        GeneratorSpec::Linear {
            seed: 1,
            multiplier: 5,
            increment: 3,
            modulus: 16,
        }
    }

    #[test]
    fn test_write_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_sequence(&path, &[0.5, 0.25], "linear").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "index,value,method");
        assert_eq!(lines[1], "0,0.5,linear");
        assert_eq!(lines[2], "1,0.25,linear");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_empty_sequence_has_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_sequence(&path, &[], "linear").unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn test_export_sequence_creates_directory_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let export_dir = dir.path().join("nested").join("results");
        let path = export_sequence(&export_dir, "linear", &[0.5]).unwrap();

        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("results_linear_"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_write_batches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batches.csv");
        let outcome = run_batches(&spec(), 4, 3);
        write_batches(&path, &outcome, "linear").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "batch,index,value,method");
        assert_eq!(lines.len(), 1 + 3 * 4);
        assert!(lines[1].starts_with("0,0,"));
        assert!(lines[5].starts_with("1,0,"));
    }
}
