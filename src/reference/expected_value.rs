//! Expected fair value per (round, pick slot), read from the EstimatedFV table.

use crate::cli::types::{DraftRound, PickSlot};
use crate::error::{GradeError, Result};
use crate::input::{RawTable, ReadMode};
use log::warn;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

const TABLE_NAME: &str = "EstimatedFV";
const ROUND_COLUMN: &str = "draft round";
const SLOT_COLUMN: &str = "draft_position";
const VALUE_COLUMN: &str = "expected_FV";

/// Lookup of the future-overall a pick slot is expected to return.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpectedValueTable {
    entries: HashMap<(DraftRound, PickSlot), i64>,
}

impl ExpectedValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_reader(std::fs::File::open(path)?)
    }

    /// Parse an EstimatedFV CSV (`draft round`, `draft_position`,
    /// `expected_FV`). Values are truncated to whole numbers; for a repeated
    /// (round, slot) the first row wins.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let raw = RawTable::from_reader(rdr, ReadMode::Strict)?;
        let column = |name: &str| {
            raw.column_index(name)
                .ok_or_else(|| GradeError::MissingReferenceColumn {
                    table: TABLE_NAME,
                    column: name.to_string(),
                })
        };
        let (round_col, slot_col, value_col) =
            (column(ROUND_COLUMN)?, column(SLOT_COLUMN)?, column(VALUE_COLUMN)?);

        let mut table = Self::new();
        for (idx, cells) in raw.rows().iter().enumerate() {
            let row = idx + 1;
            let invalid = |column: &str, value: &str| GradeError::InvalidReferenceValue {
                table: TABLE_NAME,
                column: column.to_string(),
                row,
                value: value.to_string(),
            };

            let round = cells[round_col]
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.fract() == 0.0 && (0.0..=255.0).contains(v))
                .ok_or_else(|| invalid(ROUND_COLUMN, &cells[round_col]))?;
            let slot = cells[slot_col]
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.fract() == 0.0 && (0.0..=65535.0).contains(v))
                .ok_or_else(|| invalid(SLOT_COLUMN, &cells[slot_col]))?;
            let value = cells[value_col]
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| invalid(VALUE_COLUMN, &cells[value_col]))?;

            let key = (DraftRound::new(round as u8), PickSlot::new(slot as u16));
            if table.entries.contains_key(&key) {
                warn!(
                    "EstimatedFV row {}: duplicate entry for round {} pick {}, keeping the first",
                    row, key.0, key.1
                );
                continue;
            }
            table.entries.insert(key, value.trunc() as i64);
        }
        Ok(table)
    }

    pub fn insert(&mut self, round: DraftRound, slot: PickSlot, value: i64) {
        self.entries.insert((round, slot), value);
    }

    pub fn get(&self, round: DraftRound, slot: PickSlot) -> Option<i64> {
        self.entries.get(&(round, slot)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
