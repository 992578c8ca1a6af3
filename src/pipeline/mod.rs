//! The grading pipeline.
//!
//! - `reconcile`: join input tables into picks for the target year
//! - `metrics`: derive expected value, BPA deviation and weighted value
//! - `aggregate`: team rankings, draft quality and top picks
//! - `verdict`: threshold rules for team aggregates

pub mod aggregate;
pub mod metrics;
pub mod reconcile;
pub mod verdict;


use crate::cli::types::{DraftYear, TeamCode};
use crate::error::Result;
use crate::input::{DraftTables, InputSet};
use crate::models::{PickRecord, ResultTables};
use crate::reference::ReferenceTables;
use log::info;
use serde::Serialize;
use std::collections::BTreeSet;

pub use aggregate::DEFAULT_TOP_N;

/// Non-fatal degradations observed during a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineDiagnostics {
    /// `player_information` rows dropped while reading.
    pub skipped_rows: usize,
    /// `players_personal` rows dropped for a blank `Player_ID`.
    pub skipped_projections: usize,
    /// `players_personal` rows ignored because the player already had one.
    pub duplicate_projections: usize,
    /// Drafting team codes with no `team_information` entry.
    pub unmapped_teams: BTreeSet<TeamCode>,
    /// Picks with no (round, slot) entry in the EstimatedFV table.
    pub missing_expected_value: usize,
    /// Picks with no (round, position) positional average.
    pub missing_positional_average: usize,
    /// Picks whose weighted value could not be computed.
    pub undefined_weighted_value: usize,
}

impl PipelineDiagnostics {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Options for a grading run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeOptions {
    pub year: DraftYear,
    pub top_n: usize,
}

impl GradeOptions {
    pub fn new(year: DraftYear) -> Self {
        Self {
            year,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

impl Default for GradeOptions {
    fn default() -> Self {
        Self::new(DraftYear::default())
    }
}

/// Everything a grading run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub year: DraftYear,
    pub picks: Vec<PickRecord>,
    pub tables: ResultTables,
    pub diagnostics: PipelineDiagnostics,
}

/// Run the pipeline over typed input tables.
pub fn grade_tables(
    tables: &DraftTables,
    refs: &ReferenceTables,
    options: GradeOptions,
) -> GradeReport {
    let mut diagnostics = PipelineDiagnostics {
        skipped_rows: tables.skipped_rows,
        skipped_projections: tables.skipped_projections,
        ..Default::default()
    };

    let reconciled = reconcile::reconcile(tables, options.year, &mut diagnostics);
    info!(
        "{} picks in the {} draft after filtering",
        reconciled.len(),
        options.year
    );

    let picks = metrics::compute_metrics(reconciled, refs, &mut diagnostics);
    let tables = aggregate::aggregate(&picks, options.top_n);

    GradeReport {
        year: options.year,
        picks,
        tables,
        diagnostics,
    }
}

/// Validate a raw input set and run the pipeline.
///
/// Missing tables, missing columns and invalid values abort the run before
/// any result is produced.
pub fn grade(
    inputs: InputSet,
    refs: &ReferenceTables,
    options: GradeOptions,
) -> Result<GradeReport> {
    let tables = inputs.validate()?.into_tables()?;
    info!(
        "inputs: {} players, {} projections, {} teams, {} player records",
        tables.players.len(),
        tables.personal.len(),
        tables.teams.len(),
        tables.player_record_rows
    );
    Ok(grade_tables(&tables, refs, options))
}
