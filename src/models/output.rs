//! Result tables produced by the aggregation step.
//!
//! Field names serialize to the same column names used in the exported
//! workbook.

use super::pick::PickRecord;
use crate::cli::types::DraftRound;
use crate::pipeline::verdict::{BpaVerdict, WeightedVerdict};
use serde::{Serialize, Serializer};
use std::fmt;

/// Mean BPA deviation per drafting team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BpaAggregate {
    #[serde(rename = "Drafted_By")]
    pub team: Option<String>,
    pub bpa: Option<f64>,
    pub bpa_rank: Option<u32>,
    pub verdict: BpaVerdict,
}

/// Mean weighted value per drafting team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedAggregate {
    pub weighted_rank: Option<u32>,
    #[serde(rename = "Drafted_By")]
    pub team: Option<String>,
    pub weighted_value: Option<f64>,
    pub verdict: WeightedVerdict,
}

/// Weighted aggregate with the team's BPA rank alongside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedRankRow {
    pub bpa_rank: Option<u32>,
    pub weighted_rank: Option<u32>,
    #[serde(rename = "Drafted_By")]
    pub team: Option<String>,
    pub weighted_value: Option<f64>,
    pub verdict: WeightedVerdict,
}

/// Scope of a draft quality row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityScope {
    Round(DraftRound),
    Overall,
}

impl fmt::Display for QualityScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityScope::Round(round) => write!(f, "{}", round),
            QualityScope::Overall => write!(f, "overall"),
        }
    }
}

impl Serialize for QualityScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QualityScope::Round(round) => serializer.serialize_u8(round.as_u8()),
            QualityScope::Overall => serializer.serialize_str("overall"),
        }
    }
}

/// Mean BPA deviation for one round, or across the whole draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftQualityRow {
    #[serde(rename = "Draft_Round")]
    pub scope: QualityScope,
    #[serde(rename = "average value")]
    pub average_value: Option<f64>,
}

/// The four tables handed to the exporter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultTables {
    pub bpa_df: Vec<BpaAggregate>,
    pub weighted_rank: Vec<WeightedRankRow>,
    pub top_20: Vec<PickRecord>,
    pub draft_quality: Vec<DraftQualityRow>,
}
