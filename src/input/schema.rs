//! Typed rows parsed from the raw tables.

use super::{FileRole, RawTable, ValidatedInputs};
use crate::cli::types::{DraftRound, DraftYear, PickSlot, PlayerId, PositionCode, TeamCode};
use crate::error::{GradeError, Result};
use log::warn;

/// One `player_information` row, narrowed to the draft columns.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerInfoRow {
    pub player_id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<PositionCode>,
    pub drafted_by: Option<TeamCode>,
    pub draft_round: Option<DraftRound>,
    pub drafted_position: Option<PickSlot>,
    pub draft_year: Option<DraftYear>,
}

/// One `players_personal` row.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalRow {
    pub player_id: PlayerId,
    pub future_overall: Option<i64>,
}

/// One `team_information` row.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
    pub team: TeamCode,
    pub home_city: String,
}

/// Typed contents of a validated input set.
#[derive(Debug, Clone, Default)]
pub struct DraftTables {
    pub players: Vec<PlayerInfoRow>,
    pub personal: Vec<PersonalRow>,
    pub teams: Vec<TeamRow>,
    /// Row count of `player_record`; the table is otherwise unused.
    pub player_record_rows: usize,
    /// Rows dropped from `player_information` while reading or typing.
    pub skipped_rows: usize,
    /// `players_personal` rows dropped for a blank `Player_ID`.
    pub skipped_projections: usize,
}

impl ValidatedInputs {
    /// Check column schemas and parse every table into typed rows.
    pub fn into_tables(self) -> Result<DraftTables> {
        self.player_record.require_columns(FileRole::PlayerRecord)?;
        let (personal, skipped_projections) = parse_personal(&self.players_personal)?;
        let teams = parse_teams(&self.team_information)?;
        let (players, dropped) = parse_player_information(&self.player_information)?;

        Ok(DraftTables {
            players,
            personal,
            teams,
            player_record_rows: self.player_record.len(),
            skipped_rows: self.player_information.skipped_rows() + dropped,
            skipped_projections,
        })
    }
}

/// Blank → `None`; integers and integral floats (`"3.0"`) → `Some`.
fn parse_whole_number(raw: &str) -> std::result::Result<Option<i64>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    if let Ok(v) = trimmed.parse::<i64>() {
        return Ok(Some(v));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(Some(v as i64)),
        _ => Err(()),
    }
}

fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn strict_number(
    role: FileRole,
    column: &str,
    row: usize,
    raw: &str,
) -> Result<Option<i64>> {
    parse_whole_number(raw).map_err(|_| GradeError::InvalidValue {
        role,
        column: column.to_string(),
        row,
        value: raw.to_string(),
    })
}

/// Returns the typed rows and the number of rows dropped for a blank
/// `Player_ID`. Any other unparseable cell is an error.
fn parse_personal(table: &RawTable) -> Result<(Vec<PersonalRow>, usize)> {
    let role = FileRole::PlayersPersonal;
    let cols = table.require_columns(role)?;
    let (id_col, fo_col) = (cols[0], cols[1]);

    let mut rows = Vec::with_capacity(table.len());
    let mut dropped = 0;
    for (idx, cells) in table.rows().iter().enumerate() {
        let row = idx + 1;
        let Some(id) = strict_number(role, "Player_ID", row, &cells[id_col])? else {
            warn!("skipping players_personal row {}: blank Player_ID", row);
            dropped += 1;
            continue;
        };
        let player_id = u64::try_from(id).map_err(|_| GradeError::InvalidValue {
            role,
            column: "Player_ID".to_string(),
            row,
            value: cells[id_col].clone(),
        })?;
        let future_overall = strict_number(role, "Future_Overall", row, &cells[fo_col])?;
        rows.push(PersonalRow {
            player_id: PlayerId::new(player_id),
            future_overall,
        });
    }
    Ok((rows, dropped))
}

fn parse_teams(table: &RawTable) -> Result<Vec<TeamRow>> {
    let cols = table.require_columns(FileRole::TeamInformation)?;
    let (team_col, city_col) = (cols[0], cols[1]);

    Ok(table
        .rows()
        .iter()
        .filter_map(|cells| {
            let team = non_blank(&cells[team_col])?;
            Some(TeamRow {
                team: TeamCode::new(team),
                home_city: cells[city_col].trim().to_string(),
            })
        })
        .collect())
}

/// Returns the typed rows and the number of rows dropped for an unusable
/// `Player_ID`. Other unparseable cells read as blank.
fn parse_player_information(table: &RawTable) -> Result<(Vec<PlayerInfoRow>, usize)> {
    let cols = table.require_columns(FileRole::PlayerInformation)?;
    let lenient = |raw: &str| parse_whole_number(raw).ok().flatten();

    let mut rows = Vec::with_capacity(table.len());
    let mut dropped = 0;
    for (idx, cells) in table.rows().iter().enumerate() {
        let Some(player_id) = lenient(&cells[cols[0]]).and_then(|v| u64::try_from(v).ok()) else {
            warn!(
                "skipping player_information row {}: invalid Player_ID {:?}",
                idx + 1,
                cells[cols[0]]
            );
            dropped += 1;
            continue;
        };

        rows.push(PlayerInfoRow {
            player_id: PlayerId::new(player_id),
            first_name: cells[cols[1]].trim().to_string(),
            last_name: cells[cols[2]].trim().to_string(),
            position: non_blank(&cells[cols[3]]).map(PositionCode::new),
            drafted_by: non_blank(&cells[cols[4]]).map(TeamCode::new),
            draft_round: lenient(&cells[cols[5]])
                .and_then(|v| u8::try_from(v).ok())
                .map(DraftRound::new),
            drafted_position: lenient(&cells[cols[6]])
                .and_then(|v| u16::try_from(v).ok())
                .map(PickSlot::new),
            draft_year: lenient(&cells[cols[7]])
                .and_then(|v| u16::try_from(v).ok())
                .map(DraftYear::new),
        });
    }
    Ok((rows, dropped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_number() {
        assert_eq!(parse_whole_number("42"), Ok(Some(42)));
        assert_eq!(parse_whole_number(" 42 "), Ok(Some(42)));
        assert_eq!(parse_whole_number("42.0"), Ok(Some(42)));
        assert_eq!(parse_whole_number("-3"), Ok(Some(-3)));
        assert_eq!(parse_whole_number(""), Ok(None));
        assert_eq!(parse_whole_number("NaN"), Ok(None));
        assert_eq!(parse_whole_number("42.5"), Err(()));
        assert_eq!(parse_whole_number("abc"), Err(()));
    }

    #[test]
    fn test_personal_rejects_bad_projection() {
        let table = RawTable::from_rows(
            &["Player_ID", "Future_Overall"],
            vec![vec!["1", "50"], vec!["2", "fifty"]],
        );
        match parse_personal(&table).unwrap_err() {
            GradeError::InvalidValue { column, row, .. } => {
                assert_eq!(column, "Future_Overall");
                assert_eq!(row, 2);
            }
            e => panic!("Expected InvalidValue, got {e:?}"),
        }
    }

    #[test]
    fn test_personal_blank_projection_is_none() {
        let table = RawTable::from_rows(&["Player_ID", "Future_Overall"], vec![vec!["9", ""]]);
        let (rows, dropped) = parse_personal(&table).unwrap();
        assert_eq!(dropped, 0);
        assert_eq!(rows[0].player_id, PlayerId::new(9));
        assert_eq!(rows[0].future_overall, None);
    }

    #[test]
    fn test_personal_blank_id_is_dropped() {
        let table = RawTable::from_rows(
            &["Player_ID", "Future_Overall"],
            vec![vec!["1", "60"], vec!["", "50"], vec!["NaN", "45"]],
        );
        let (rows, dropped) = parse_personal(&table).unwrap();
        assert_eq!(dropped, 2);
        assert_eq!(rows, vec![PersonalRow { player_id: PlayerId::new(1), future_overall: Some(60) }]);
    }

    #[test]
    fn test_personal_rejects_negative_id() {
        let table = RawTable::from_rows(&["Player_ID", "Future_Overall"], vec![vec!["-4", "50"]]);
        assert!(matches!(
            parse_personal(&table),
            Err(GradeError::InvalidValue { row: 1, .. })
        ));
    }

    #[test]
    fn test_teams_skip_blank_codes() {
        let table = RawTable::from_rows(
            &["Team", "Home_City", "Nickname"],
            vec![vec!["1", "Boston", "Bolts"], vec!["", "Nowhere", "Ghosts"]],
        );
        let rows = parse_teams(&table).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].team, TeamCode::new("1"));
        assert_eq!(rows[0].home_city, "Boston");
    }

    #[test]
    fn test_player_information_lenient_cells() {
        let table = RawTable::from_rows(
            FileRole::PlayerInformation.required_columns(),
            vec![
                vec!["10", "Ada", "Lane", "QB", "3.0", "1", "4", "2024"],
                vec!["x", "Bad", "Id", "RB", "3", "1", "5", "2024"],
                vec!["11", "Bo", "Reed", "", "", "two", "", "2024.0"],
            ],
        );
        let (rows, dropped) = parse_player_information(&table).unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].drafted_by, Some(TeamCode::new("3")));
        assert_eq!(rows[0].draft_round, Some(DraftRound::new(1)));
        assert_eq!(rows[0].drafted_position, Some(PickSlot::new(4)));

        assert_eq!(rows[1].position, None);
        assert_eq!(rows[1].drafted_by, None);
        assert_eq!(rows[1].draft_round, None);
        assert_eq!(rows[1].draft_year, Some(DraftYear::new(2024)));
    }
}
