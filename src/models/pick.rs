//! Pick-level records flowing through the pipeline.

use crate::cli::types::{DraftRound, DraftYear, PickSlot, PlayerId, PositionCode};
use serde::Serialize;

/// One drafted player after reconciliation: filtered to the target year,
/// team resolved to a display name, projection attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciledPick {
    #[serde(rename = "Player_ID")]
    pub player_id: PlayerId,
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Last_Name")]
    pub last_name: String,
    #[serde(rename = "Position")]
    pub position: Option<PositionCode>,
    /// Home city of the drafting team; `None` when the code is unmapped.
    #[serde(rename = "Drafted_By")]
    pub team: Option<String>,
    #[serde(rename = "Draft_Round")]
    pub round: Option<DraftRound>,
    #[serde(rename = "Drafted_Position")]
    pub slot: Option<PickSlot>,
    #[serde(rename = "Draft_Year")]
    pub draft_year: DraftYear,
    #[serde(rename = "Future_Overall")]
    pub future_overall: Option<i64>,
}

/// Values derived for a pick from the reference tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickMetrics {
    #[serde(rename = "expected_FV")]
    pub expected_fv: i64,
    /// Future overall minus expected value.
    #[serde(rename = "difference_BPA")]
    pub bpa: Option<i64>,
    pub pos_avg: f64,
    /// `None` when the projection is missing or the positional average is
    /// zero.
    pub weighted_value: Option<i64>,
}

/// A fully enriched pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickRecord {
    #[serde(flatten)]
    pub pick: ReconciledPick,
    #[serde(flatten)]
    pub metrics: PickMetrics,
}
