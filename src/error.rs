//! Error types for the draft grades pipeline

use crate::input::FileRole;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GradeError>;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Missing files: {}", join_roles(.roles))]
    MissingFiles { roles: Vec<FileRole> },

    #[error("{role} is missing required columns: {}", .columns.join(", "))]
    MissingColumns { role: FileRole, columns: Vec<String> },

    #[error("{role} row {row}: invalid value {value:?} in column {column}")]
    InvalidValue {
        role: FileRole,
        column: String,
        row: usize,
        value: String,
    },

    #[error("{table} is missing required column {column}")]
    MissingReferenceColumn { table: &'static str, column: String },

    #[error("{table} row {row}: invalid value {value:?} in column {column}")]
    InvalidReferenceValue {
        table: &'static str,
        column: String,
        row: usize,
        value: String,
    },

    #[error("EstimatedFV table not found (searched: {})", display_paths(.searched))]
    ReferenceDataNotFound { searched: Vec<std::path::PathBuf> },

    #[error("Invalid league abbreviation: {league:?}")]
    InvalidLeague { league: String },
}

fn join_roles(roles: &[FileRole]) -> String {
    roles
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_paths(paths: &[std::path::PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
