//! Average future-overall by draft round and position.

use crate::cli::types::{DraftRound, PositionCode};
use crate::error::{GradeError, Result};
use crate::input::{RawTable, ReadMode};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

const TABLE_NAME: &str = "positional averages";

/// Built-in sample averages, one value per round (1..=7) for each position
/// code. Punters and kickers are never graded, so they have no entry.
/// Leagues with their own figures pass them through `from_path`.
const DEFAULT_AVERAGES: [(&str, [f64; 7]); 14] = [
    ("QB", [58.4, 53.6, 49.8, 46.5, 43.9, 41.7, 39.8]),
    ("RB", [55.1, 51.2, 47.9, 45.0, 42.6, 40.5, 38.8]),
    ("FB", [44.0, 41.3, 39.6, 38.2, 36.9, 35.8, 34.9]),
    ("WR", [56.3, 52.0, 48.4, 45.3, 42.8, 40.7, 38.9]),
    ("TE", [52.7, 48.9, 45.6, 43.1, 41.0, 39.2, 37.6]),
    ("T", [57.2, 52.8, 49.1, 46.0, 43.4, 41.2, 39.3]),
    ("G", [53.9, 50.1, 46.8, 44.2, 42.0, 40.1, 38.4]),
    ("C", [52.1, 48.7, 45.9, 43.5, 41.4, 39.6, 38.0]),
    ("DE", [56.8, 52.3, 48.7, 45.6, 43.1, 41.0, 39.2]),
    ("DT", [55.6, 51.4, 47.8, 44.9, 42.5, 40.4, 38.7]),
    ("LB", [54.9, 50.6, 47.2, 44.4, 42.1, 40.0, 38.3]),
    ("CB", [55.8, 51.5, 47.9, 45.0, 42.6, 40.5, 38.8]),
    ("S", [54.2, 50.3, 46.9, 44.1, 41.8, 39.8, 38.1]),
    ("LS", [38.5, 37.2, 36.4, 35.7, 35.1, 34.6, 34.2]),
];

/// Round → position code → average future-overall.
///
/// Absent rounds and positions have no entry; callers treat that as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalAverages {
    rounds: BTreeMap<DraftRound, HashMap<String, f64>>,
}

impl Default for PositionalAverages {
    fn default() -> Self {
        let mut averages = Self::empty();
        for (position, per_round) in DEFAULT_AVERAGES {
            for (round, value) in DraftRound::all().zip(per_round) {
                averages.insert(round, position, value);
            }
        }
        averages
    }
}

impl PositionalAverages {
    pub fn empty() -> Self {
        Self {
            rounds: BTreeMap::new(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(std::fs::File::open(path)?)
    }

    /// Parse a CSV with `round`, `position` and `average` columns.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let raw = RawTable::from_reader(rdr, ReadMode::Strict)?;
        let column = |name: &str| {
            raw.column_index(name)
                .ok_or_else(|| GradeError::MissingReferenceColumn {
                    table: TABLE_NAME,
                    column: name.to_string(),
                })
        };
        let (round_col, position_col, average_col) =
            (column("round")?, column("position")?, column("average")?);

        let mut averages = Self::empty();
        for (idx, cells) in raw.rows().iter().enumerate() {
            let invalid = |column: &str, value: &str| GradeError::InvalidReferenceValue {
                table: TABLE_NAME,
                column: column.to_string(),
                row: idx + 1,
                value: value.to_string(),
            };

            let round = cells[round_col]
                .trim()
                .parse::<u8>()
                .map_err(|_| invalid("round", &cells[round_col]))?;
            let average = cells[average_col]
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| invalid("average", &cells[average_col]))?;

            averages.insert(DraftRound::new(round), cells[position_col].trim(), average);
        }
        Ok(averages)
    }

    pub fn insert(&mut self, round: DraftRound, position: &str, average: f64) {
        self.rounds
            .entry(round)
            .or_default()
            .insert(position.to_string(), average);
    }

    pub fn get(&self, round: DraftRound, position: &PositionCode) -> Option<f64> {
        self.rounds.get(&round)?.get(position.as_str()).copied()
    }

    #[cfg(test)]
    pub fn has_round(&self, round: DraftRound) -> bool {
        self.rounds.contains_key(&round)
    }
}
