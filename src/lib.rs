//! Draft Grades Library
//!
//! Grades a sports league's player draft from the league's CSV exports:
//! how each pick's projected future overall compares with what its draft
//! slot was expected to yield, how valuable the pick is relative to its
//! position, and how every drafting team did overall.
//!
//! ## Pipeline
//!
//! - **Input** ([`input`]): role-tagged raw tables, validated into typed rows
//! - **Reference data** ([`reference`]): expected value per (round, slot) and
//!   positional averages per (round, position)
//! - **Grading** ([`pipeline`]): reconciliation, per-pick metrics, team
//!   rankings with verdicts, draft quality and top picks
//! - **Export** ([`export`]): four-sheet XLSX workbook
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use draft_grades::{
//!     export::export_workbook, input::{detect_files, load_input_set},
//!     pipeline::{grade, GradeOptions}, reference::ReferenceTables, DraftYear, LeagueName,
//! };
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> draft_grades::Result<()> {
//! let files: Vec<PathBuf> = vec!["exports/SHL_player_information.csv".into()];
//! let inputs = load_input_set(&detect_files(&files)?, &[])?;
//! let refs = ReferenceTables::load(Path::new("EstimatedFV.csv"), None)?;
//!
//! let year = DraftYear::new(2024);
//! let report = grade(inputs, &refs, GradeOptions::new(year))?;
//! let league: LeagueName = "SHL".parse()?;
//! let workbook = export_workbook(&report.tables, &league, year)?;
//! std::fs::write(&workbook.filename, &workbook.bytes)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export DRAFT_GRADES_ESTIMATED_FV=/path/to/EstimatedFV.csv
//! export DRAFT_GRADES_OUTPUT_DIR=/path/to/reports
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod models;
pub mod pipeline;
pub mod reference;

// Re-export commonly used types
pub use cli::types::{DraftRound, DraftYear, LeagueName, PickSlot, PlayerId, PositionCode, TeamCode};
pub use config::{ESTIMATED_FV_ENV_VAR, OUTPUT_DIR_ENV_VAR};
pub use error::{GradeError, Result};
pub use export::{ExportedWorkbook, XLSX_MIME_TYPE};
pub use models::{PickRecord, ResultTables};
