//! Join the typed input tables into one pick table for the target year.

use super::PipelineDiagnostics;
use crate::cli::types::{DraftYear, PlayerId, TeamCode};
use crate::input::DraftTables;
use crate::models::ReconciledPick;
use log::warn;
use std::collections::HashMap;

/// Team code → home city. Later rows override earlier ones.
pub fn team_mapping(tables: &DraftTables) -> HashMap<TeamCode, String> {
    tables
        .teams
        .iter()
        .map(|row| (row.team.clone(), row.home_city.clone()))
        .collect()
}

/// Player id → future overall. The first row for a player wins.
fn projection_index(
    tables: &DraftTables,
    diagnostics: &mut PipelineDiagnostics,
) -> HashMap<PlayerId, Option<i64>> {
    let mut index = HashMap::with_capacity(tables.personal.len());
    for row in &tables.personal {
        if index.contains_key(&row.player_id) {
            diagnostics.duplicate_projections += 1;
            continue;
        }
        index.insert(row.player_id, row.future_overall);
    }
    if diagnostics.duplicate_projections > 0 {
        warn!(
            "ignored {} duplicate players_personal rows",
            diagnostics.duplicate_projections
        );
    }
    index
}

/// Picks drafted in `year`, excluding punters and kickers, with the drafting
/// team resolved to its home city and the future-overall projection joined.
pub fn reconcile(
    tables: &DraftTables,
    year: DraftYear,
    diagnostics: &mut PipelineDiagnostics,
) -> Vec<ReconciledPick> {
    let teams = team_mapping(tables);
    let projections = projection_index(tables, diagnostics);

    tables
        .players
        .iter()
        .filter(|row| row.draft_year == Some(year))
        .filter(|row| !row.position.as_ref().is_some_and(|p| p.is_special_teams()))
        .map(|row| {
            let team = row.drafted_by.as_ref().and_then(|code| {
                let city = teams.get(code).cloned();
                if city.is_none() && diagnostics.unmapped_teams.insert(code.clone()) {
                    warn!("team code {} is not in team_information", code);
                }
                city
            });

            ReconciledPick {
                player_id: row.player_id,
                first_name: row.first_name.clone(),
                last_name: row.last_name.clone(),
                position: row.position.clone(),
                team,
                round: row.draft_round,
                slot: row.drafted_position,
                draft_year: year,
                future_overall: projections.get(&row.player_id).copied().flatten(),
            }
        })
        .collect()
}
