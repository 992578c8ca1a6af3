//! Runtime configuration: flag → environment → default resolution.


use crate::error::{GradeError, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Environment variable naming the EstimatedFV CSV.
pub const ESTIMATED_FV_ENV_VAR: &str = "DRAFT_GRADES_ESTIMATED_FV";

/// Environment variable naming the directory the workbook is written to.
pub const OUTPUT_DIR_ENV_VAR: &str = "DRAFT_GRADES_OUTPUT_DIR";

/// File name looked up in the working and data directories.
pub const ESTIMATED_FV_FILE: &str = "EstimatedFV.csv";

/// Per-user data directory for this tool, if the platform has one.
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("draft-grades"))
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Default locations for the EstimatedFV table, in lookup order.
pub fn estimated_fv_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(ESTIMATED_FV_FILE)];
    if let Some(dir) = data_dir() {
        candidates.push(dir.join(ESTIMATED_FV_FILE));
    }
    candidates
}

/// First existing path among `candidates`.
fn first_existing(candidates: Vec<PathBuf>) -> Result<PathBuf> {
    match candidates.iter().find(|p| p.is_file()) {
        Some(found) => Ok(found.clone()),
        None => Err(GradeError::ReferenceDataNotFound {
            searched: candidates,
        }),
    }
}

/// Resolve the EstimatedFV path: explicit flag, then
/// `DRAFT_GRADES_ESTIMATED_FV`, then `./EstimatedFV.csv`, then the data
/// directory.
pub fn resolve_estimated_fv_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit.or_else(|| env_path(ESTIMATED_FV_ENV_VAR)) {
        debug!("using EstimatedFV table at {}", path.display());
        return Ok(path);
    }
    first_existing(estimated_fv_candidates())
}

/// Resolve the output directory: explicit flag, then
/// `DRAFT_GRADES_OUTPUT_DIR`, then the working directory.
pub fn resolve_output_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env_path(OUTPUT_DIR_ENV_VAR))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Path the workbook will be written to.
pub fn output_path(dir: &Path, filename: &str) -> PathBuf {
    dir.join(filename)
}
