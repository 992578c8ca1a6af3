//! Static reference data consulted by the metric computation.
//!
//! - `expected_value`: expected future-overall per (round, pick slot)
//! - `positional`: average future-overall per (round, position)

pub mod expected_value;
pub mod positional;


pub use expected_value::ExpectedValueTable;
pub use positional::PositionalAverages;

use crate::error::Result;
use log::info;
use std::path::Path;

/// Both reference tables for one grading run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTables {
    pub expected: ExpectedValueTable,
    pub positional: PositionalAverages,
}

impl ReferenceTables {
    pub fn new(expected: ExpectedValueTable, positional: PositionalAverages) -> Self {
        Self {
            expected,
            positional,
        }
    }

    /// Load the EstimatedFV table from `fv_path`, with positional averages
    /// from `positional_path` or the built-in table.
    pub fn load(fv_path: &Path, positional_path: Option<&Path>) -> Result<Self> {
        let expected = ExpectedValueTable::from_path(fv_path)?;
        info!(
            "loaded {} expected value entries from {}",
            expected.len(),
            fv_path.display()
        );

        let positional = match positional_path {
            Some(path) => {
                info!("loading positional averages from {}", path.display());
                PositionalAverages::from_path(path)?
            }
            None => PositionalAverages::default(),
        };

        Ok(Self::new(expected, positional))
    }
}
