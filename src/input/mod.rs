//! Raw input tables and their roles.
//!
//! A grading run needs four CSV exports from the league:
//! - `player_record`: required but not consumed by the current pipeline
//! - `players_personal`: future-overall projections per player
//! - `team_information`: team code to home city mapping
//! - `player_information`: draft details per player (read permissively)
//!
//! Tables are loaded into [`RawTable`]s, collected into an [`InputSet`] and
//! validated into typed rows by [`schema`].

pub mod schema;

#[cfg(test)]
mod tests;

use crate::error::{GradeError, Result};
use csv::ReaderBuilder;
use log::{debug, warn};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub use schema::{DraftTables, PersonalRow, PlayerInfoRow, TeamRow};

/// The role a raw table plays in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FileRole {
    PlayerRecord,
    PlayersPersonal,
    TeamInformation,
    PlayerInformation,
}

impl FileRole {
    /// Canonical order, also the order in which file names are matched.
    pub const ALL: [FileRole; 4] = [
        FileRole::PlayerRecord,
        FileRole::PlayersPersonal,
        FileRole::TeamInformation,
        FileRole::PlayerInformation,
    ];

    /// Substring that identifies this role in an export's file name.
    pub fn file_key(&self) -> &'static str {
        match self {
            FileRole::PlayerRecord => "player_record",
            FileRole::PlayersPersonal => "players_personal",
            FileRole::TeamInformation => "team_information",
            FileRole::PlayerInformation => "player_information",
        }
    }

    /// Columns that must be present for the table to be usable.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            FileRole::PlayerRecord => &[],
            FileRole::PlayersPersonal => &["Player_ID", "Future_Overall"],
            FileRole::TeamInformation => &["Team", "Home_City"],
            FileRole::PlayerInformation => &[
                "Player_ID",
                "First_Name",
                "Last_Name",
                "Position",
                "Drafted_By",
                "Draft_Round",
                "Drafted_Position",
                "Draft_Year",
            ],
        }
    }

    /// `player_information` exports are known to carry malformed rows and
    /// non-UTF-8 names.
    pub fn read_mode(&self) -> ReadMode {
        match self {
            FileRole::PlayerInformation => ReadMode::Permissive,
            _ => ReadMode::Strict,
        }
    }

    /// Detect a role from a file name using the league's export naming.
    ///
    /// ```rust
    /// use draft_grades::input::FileRole;
    ///
    /// assert_eq!(
    ///     FileRole::from_file_name("TFL_player_information.csv"),
    ///     Some(FileRole::PlayerInformation)
    /// );
    /// assert_eq!(FileRole::from_file_name("notes.csv"), None);
    /// ```
    pub fn from_file_name(name: &str) -> Option<FileRole> {
        FileRole::ALL
            .into_iter()
            .find(|role| name.contains(role.file_key()))
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileRole::PlayerRecord => "Player record file",
            FileRole::PlayersPersonal => "Player personal file",
            FileRole::TeamInformation => "Team information file",
            FileRole::PlayerInformation => "Player information file",
        };
        write!(f, "{}", s)
    }
}

/// How strictly a CSV file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Any CSV or encoding error aborts the read.
    Strict,
    /// Latin-1 fallback for non-UTF-8 input; malformed and over-long rows are
    /// skipped; short rows are padded with blanks.
    Permissive,
}

/// A header row plus string cells, before any typing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    skipped_rows: usize,
}

impl RawTable {
    /// Build a table from in-memory cells. Every row is padded or cut to
    /// the header width.
    pub fn from_rows(headers: &[&str], rows: Vec<Vec<&str>>) -> Self {
        let width = headers.len();
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|row| {
                    let mut cells: Vec<String> = row.into_iter().map(str::to_string).collect();
                    cells.resize(width, String::new());
                    cells
                })
                .collect(),
            skipped_rows: 0,
        }
    }

    /// Read a table from a CSV file.
    pub fn from_path(path: &Path, mode: ReadMode) -> Result<Self> {
        let file = fs::File::open(path)?;
        let table = Self::from_reader(file, mode)?;
        debug!(
            "read {} rows from {} ({} skipped)",
            table.len(),
            path.display(),
            table.skipped_rows
        );
        Ok(table)
    }

    /// Read a table from any CSV source.
    pub fn from_reader<R: Read>(mut rdr: R, mode: ReadMode) -> Result<Self> {
        match mode {
            ReadMode::Strict => {
                let mut reader = ReaderBuilder::new().from_reader(rdr);
                let headers = clean_headers(reader.headers()?.iter());
                let mut rows = Vec::new();
                for record in reader.records() {
                    rows.push(record?.iter().map(str::to_string).collect());
                }
                Ok(Self {
                    headers,
                    rows,
                    skipped_rows: 0,
                })
            }
            ReadMode::Permissive => {
                let mut bytes = Vec::new();
                rdr.read_to_end(&mut bytes)?;
                let text = decode_lenient(bytes);

                let mut reader = ReaderBuilder::new()
                    .flexible(true)
                    .from_reader(text.as_bytes());
                let headers = clean_headers(reader.headers()?.iter());
                let width = headers.len();

                let mut rows = Vec::new();
                let mut skipped_rows = 0;
                for (idx, record) in reader.records().enumerate() {
                    let record = match record {
                        Ok(record) => record,
                        Err(e) => {
                            warn!("skipping unreadable row {}: {}", idx + 1, e);
                            skipped_rows += 1;
                            continue;
                        }
                    };
                    if record.len() > width {
                        warn!(
                            "skipping row {}: expected {} fields, found {}",
                            idx + 1,
                            width,
                            record.len()
                        );
                        skipped_rows += 1;
                        continue;
                    }
                    let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
                    cells.resize(width, String::new());
                    rows.push(cells);
                }

                Ok(Self {
                    headers,
                    rows,
                    skipped_rows,
                })
            }
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows dropped while reading in permissive mode.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Resolve the indices of `role`'s required columns, in declaration order.
    pub fn require_columns(&self, role: FileRole) -> Result<Vec<usize>> {
        let mut indices = Vec::new();
        let mut missing = Vec::new();
        for name in role.required_columns() {
            match self.column_index(name) {
                Some(idx) => indices.push(idx),
                None => missing.push(name.to_string()),
            }
        }

        if missing.is_empty() {
            Ok(indices)
        } else {
            Err(GradeError::MissingColumns {
                role,
                columns: missing,
            })
        }
    }
}

fn clean_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    headers
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect()
}

/// UTF-8 when valid, otherwise every byte is read as its Latin-1 code point.
fn decode_lenient(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

/// The four raw tables of a grading run, any of which may still be missing.
#[derive(Debug, Clone, Default)]
pub struct InputSet {
    pub player_record: Option<RawTable>,
    pub players_personal: Option<RawTable>,
    pub team_information: Option<RawTable>,
    pub player_information: Option<RawTable>,
}

impl InputSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, role: FileRole) -> &mut Option<RawTable> {
        match role {
            FileRole::PlayerRecord => &mut self.player_record,
            FileRole::PlayersPersonal => &mut self.players_personal,
            FileRole::TeamInformation => &mut self.team_information,
            FileRole::PlayerInformation => &mut self.player_information,
        }
    }

    /// Assign a table to a role, returning the table it replaced.
    pub fn insert(&mut self, role: FileRole, table: RawTable) -> Option<RawTable> {
        self.slot(role).replace(table)
    }

    /// Builder-style variant of [`InputSet::insert`].
    pub fn with(mut self, role: FileRole, table: RawTable) -> Self {
        self.insert(role, table);
        self
    }

    pub fn get(&self, role: FileRole) -> Option<&RawTable> {
        match role {
            FileRole::PlayerRecord => self.player_record.as_ref(),
            FileRole::PlayersPersonal => self.players_personal.as_ref(),
            FileRole::TeamInformation => self.team_information.as_ref(),
            FileRole::PlayerInformation => self.player_information.as_ref(),
        }
    }

    /// Roles with no table yet, in canonical order.
    pub fn missing_roles(&self) -> Vec<FileRole> {
        FileRole::ALL
            .into_iter()
            .filter(|role| self.get(*role).is_none())
            .collect()
    }

    /// Ensure all four tables are present.
    pub fn validate(self) -> Result<ValidatedInputs> {
        let missing = self.missing_roles();
        match self {
            InputSet {
                player_record: Some(player_record),
                players_personal: Some(players_personal),
                team_information: Some(team_information),
                player_information: Some(player_information),
            } => Ok(ValidatedInputs {
                player_record,
                players_personal,
                team_information,
                player_information,
            }),
            _ => Err(GradeError::MissingFiles { roles: missing }),
        }
    }
}

/// All four tables, guaranteed present.
#[derive(Debug, Clone)]
pub struct ValidatedInputs {
    pub player_record: RawTable,
    pub players_personal: RawTable,
    pub team_information: RawTable,
    pub player_information: RawTable,
}

/// A file offered to the run together with the role detected from its name.
#[derive(Debug, Clone, Serialize)]
pub struct DetectedFile {
    pub path: PathBuf,
    pub role: Option<FileRole>,
    pub size_bytes: u64,
}

impl DetectedFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// Detect the role of each path by file name.
pub fn detect_files(paths: &[PathBuf]) -> Result<Vec<DetectedFile>> {
    paths
        .iter()
        .map(|path| {
            let size_bytes = fs::metadata(path)?.len();
            let role = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(FileRole::from_file_name);
            Ok(DetectedFile {
                path: path.clone(),
                role,
                size_bytes,
            })
        })
        .collect()
}

/// Load detected files plus any explicit per-role paths into an [`InputSet`].
///
/// Files without a role are ignored. A later file for the same role replaces
/// an earlier one; explicit paths replace detected ones.
pub fn load_input_set(
    detected: &[DetectedFile],
    explicit: &[(FileRole, PathBuf)],
) -> Result<InputSet> {
    let mut inputs = InputSet::new();

    for file in detected {
        let Some(role) = file.role else {
            warn!("ignoring {}: no recognised role in file name", file.path.display());
            continue;
        };
        let table = RawTable::from_path(&file.path, role.read_mode())?;
        if inputs.insert(role, table).is_some() {
            warn!("{} supplied more than once, using {}", role, file.path.display());
        }
    }

    for (role, path) in explicit {
        let table = RawTable::from_path(path, role.read_mode())?;
        inputs.insert(*role, table);
    }

    Ok(inputs)
}
