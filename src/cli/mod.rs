//! CLI argument definitions and parsing.

pub mod types;

#[cfg(test)]
mod tests;

use crate::input::FileRole;
use crate::pipeline::DEFAULT_TOP_N;
use clap::builder::TypedValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{DraftYear, LeagueName};

/// Explicit per-role input paths. These override files detected by name.
#[derive(Debug, Default, Args)]
pub struct InputPaths {
    /// Path to the player_record export.
    #[clap(long)]
    pub player_record: Option<PathBuf>,

    /// Path to the players_personal export.
    #[clap(long)]
    pub players_personal: Option<PathBuf>,

    /// Path to the team_information export.
    #[clap(long)]
    pub team_information: Option<PathBuf>,

    /// Path to the player_information export.
    #[clap(long)]
    pub player_information: Option<PathBuf>,
}

impl InputPaths {
    /// The paths that were given, tagged with their role.
    pub fn explicit(&self) -> Vec<(FileRole, PathBuf)> {
        [
            (FileRole::PlayerRecord, &self.player_record),
            (FileRole::PlayersPersonal, &self.players_personal),
            (FileRole::TeamInformation, &self.team_information),
            (FileRole::PlayerInformation, &self.player_information),
        ]
        .into_iter()
        .filter_map(|(role, path)| path.clone().map(|p| (role, p)))
        .collect()
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Grade one league's draft and export the results as XLSX.
    ///
    /// Input files are matched to their role by name (`player_record`,
    /// `players_personal`, `team_information`, `player_information`).
    Grade {
        /// League abbreviation, used in the output file name.
        #[clap(long, short)]
        league: LeagueName,

        /// Draft year to grade.
        #[clap(long, short, default_value_t = DraftYear::default())]
        year: DraftYear,

        /// CSV exports to grade; roles are detected from file names.
        files: Vec<PathBuf>,

        #[clap(flatten)]
        inputs: InputPaths,

        /// EstimatedFV table (or set `DRAFT_GRADES_ESTIMATED_FV`).
        #[clap(long)]
        estimated_fv: Option<PathBuf>,

        /// Positional averages CSV (`round,position,average`) replacing the
        /// built-in table.
        #[clap(long)]
        positional_averages: Option<PathBuf>,

        /// Directory for the workbook (or set `DRAFT_GRADES_OUTPUT_DIR`).
        #[clap(long, short)]
        output_dir: Option<PathBuf>,

        /// Number of picks in the top picks sheet.
        #[clap(long, default_value_t = DEFAULT_TOP_N, value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize))]
        top: usize,

        /// Also print the result tables as JSON.
        #[clap(long)]
        json: bool,

        /// Print detected files and run diagnostics.
        #[clap(long, short)]
        verbose: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "draft-grades", about = "Grade a league's draft picks")]
pub struct DraftGrades {
    #[clap(subcommand)]
    pub command: Commands,
}
