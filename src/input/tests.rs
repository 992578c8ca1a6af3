//! Unit tests for raw table loading and role detection

use super::*;
use std::io::Write;
use tempfile::TempDir;

fn small_table() -> RawTable {
    RawTable::from_rows(&["a"], vec![vec!["1"]])
}

#[cfg(test)]
mod role_tests {
    use super::*;

    #[test]
    fn test_role_detection_by_file_name() {
        assert_eq!(
            FileRole::from_file_name("TFL_player_record.csv"),
            Some(FileRole::PlayerRecord)
        );
        assert_eq!(
            FileRole::from_file_name("players_personal.csv"),
            Some(FileRole::PlayersPersonal)
        );
        assert_eq!(
            FileRole::from_file_name("team_information (1).csv"),
            Some(FileRole::TeamInformation)
        );
        assert_eq!(
            FileRole::from_file_name("player_information.csv"),
            Some(FileRole::PlayerInformation)
        );
        assert_eq!(FileRole::from_file_name("PLAYER_RECORD.csv"), None);
        assert_eq!(FileRole::from_file_name("draft.csv"), None);
    }

    #[test]
    fn test_role_detection_uses_first_matching_key() {
        // A name containing two keys resolves to the earlier role.
        assert_eq!(
            FileRole::from_file_name("player_record_and_player_information.csv"),
            Some(FileRole::PlayerRecord)
        );
    }

    #[test]
    fn test_role_display_names() {
        let names: Vec<String> = FileRole::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "Player record file",
                "Player personal file",
                "Team information file",
                "Player information file",
            ]
        );
    }

    #[test]
    fn test_read_modes() {
        assert_eq!(FileRole::PlayerInformation.read_mode(), ReadMode::Permissive);
        assert_eq!(FileRole::PlayersPersonal.read_mode(), ReadMode::Strict);
        assert_eq!(FileRole::TeamInformation.read_mode(), ReadMode::Strict);
        assert_eq!(FileRole::PlayerRecord.read_mode(), ReadMode::Strict);
    }
}

#[cfg(test)]
mod raw_table_tests {
    use super::*;

    #[test]
    fn test_strict_read() {
        let data = "Team,Home_City\n1,Boston\n2,Denver\n";
        let table = RawTable::from_reader(data.as_bytes(), ReadMode::Strict).unwrap();
        assert_eq!(table.headers(), &["Team".to_string(), "Home_City".to_string()]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1][1], "Denver");
        assert_eq!(table.skipped_rows(), 0);
    }

    #[test]
    fn test_strict_read_rejects_ragged_rows() {
        let data = "Team,Home_City\n1,Boston,extra\n";
        let result = RawTable::from_reader(data.as_bytes(), ReadMode::Strict);
        assert!(matches!(result, Err(GradeError::Csv(_))));
    }

    #[test]
    fn test_strict_read_strips_bom_and_whitespace_in_headers() {
        let data = "\u{feff}Team , Home_City\n1,Boston\n";
        let table = RawTable::from_reader(data.as_bytes(), ReadMode::Strict).unwrap();
        assert_eq!(table.column_index("Team"), Some(0));
        assert_eq!(table.column_index("Home_City"), Some(1));
    }

    #[test]
    fn test_permissive_read_skips_long_rows_and_pads_short_rows() {
        let data = "a,b,c\n1,2,3\n4,5,6,7\n8,9\n";
        let table = RawTable::from_reader(data.as_bytes(), ReadMode::Permissive).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.skipped_rows(), 1);
        assert_eq!(table.rows()[1], vec!["8", "9", ""]);
    }

    #[test]
    fn test_permissive_read_falls_back_to_latin1() {
        // "Jos\xe9" is not valid UTF-8
        let mut data = b"First_Name,Last_Name\n".to_vec();
        data.extend_from_slice(b"Jos\xe9,Ni\xf1o\n");
        let table = RawTable::from_reader(data.as_slice(), ReadMode::Permissive).unwrap();
        assert_eq!(table.rows()[0][0], "José");
        assert_eq!(table.rows()[0][1], "Niño");
    }

    #[test]
    fn test_permissive_read_keeps_valid_utf8() {
        let data = "First_Name\nZoë\n";
        let table = RawTable::from_reader(data.as_bytes(), ReadMode::Permissive).unwrap();
        assert_eq!(table.rows()[0][0], "Zoë");
    }

    #[test]
    fn test_from_rows_matches_header_width() {
        let table = RawTable::from_rows(
            &["a", "b", "c"],
            vec![vec!["1"], vec!["1", "2", "3", "4"]],
        );
        assert_eq!(table.rows()[0], vec!["1", "", ""]);
        assert_eq!(table.rows()[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_require_columns_reports_all_missing() {
        let table = RawTable::from_rows(&["Player_ID", "Position"], vec![]);
        match table.require_columns(FileRole::PlayerInformation).unwrap_err() {
            GradeError::MissingColumns { role, columns } => {
                assert_eq!(role, FileRole::PlayerInformation);
                assert_eq!(columns.len(), 6);
                assert!(columns.contains(&"Draft_Year".to_string()));
                assert!(!columns.contains(&"Position".to_string()));
            }
            e => panic!("Expected MissingColumns, got {e:?}"),
        }
    }

    #[test]
    fn test_player_record_requires_no_columns() {
        let table = RawTable::from_rows(&[], vec![]);
        assert_eq!(table.require_columns(FileRole::PlayerRecord).unwrap(), Vec::<usize>::new());
        assert!(table.is_empty());
    }
}

#[cfg(test)]
mod input_set_tests {
    use super::*;

    #[test]
    fn test_missing_roles_in_canonical_order() {
        let inputs = InputSet::new()
            .with(FileRole::TeamInformation, small_table())
            .with(FileRole::PlayersPersonal, small_table());
        assert_eq!(
            inputs.missing_roles(),
            vec![FileRole::PlayerRecord, FileRole::PlayerInformation]
        );
    }

    #[test]
    fn test_validate_reports_missing_files() {
        let inputs = InputSet::new().with(FileRole::PlayerInformation, small_table());
        match inputs.validate().unwrap_err() {
            GradeError::MissingFiles { roles } => {
                assert_eq!(
                    roles,
                    vec![
                        FileRole::PlayerRecord,
                        FileRole::PlayersPersonal,
                        FileRole::TeamInformation,
                    ]
                );
            }
            e => panic!("Expected MissingFiles, got {e:?}"),
        }
    }

    #[test]
    fn test_validate_complete_set() {
        let inputs = FileRole::ALL
            .into_iter()
            .fold(InputSet::new(), |set, role| set.with(role, small_table()));
        assert!(inputs.missing_roles().is_empty());
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_insert_returns_replaced_table() {
        let mut inputs = InputSet::new();
        assert!(inputs.insert(FileRole::PlayerRecord, small_table()).is_none());
        assert!(inputs.insert(FileRole::PlayerRecord, small_table()).is_some());
    }
}

#[cfg(test)]
mod loading_tests {
    use super::*;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_detect_files_reports_roles_and_sizes() {
        let dir = TempDir::new().unwrap();
        let known = write_file(&dir, "TFL_team_information.csv", "Team,Home_City\n1,Boston\n");
        let unknown = write_file(&dir, "notes.csv", "x\n");

        let detected = detect_files(&[known, unknown]).unwrap();
        assert_eq!(detected[0].role, Some(FileRole::TeamInformation));
        assert_eq!(detected[0].file_name(), "TFL_team_information.csv");
        assert_eq!(detected[0].size_bytes, 24);
        assert_eq!(detected[1].role, None);
    }

    #[test]
    fn test_detect_files_missing_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("player_record.csv");
        assert!(matches!(detect_files(&[missing]), Err(GradeError::Io(_))));
    }

    #[test]
    fn test_load_input_set_explicit_overrides_detected() {
        let dir = TempDir::new().unwrap();
        let detected_path = write_file(&dir, "team_information.csv", "Team,Home_City\n1,Boston\n");
        let explicit_path = write_file(
            &dir,
            "teams_override.csv",
            "Team,Home_City\n1,Boston\n2,Denver\n",
        );

        let detected = detect_files(&[detected_path]).unwrap();
        let inputs = load_input_set(
            &detected,
            &[(FileRole::TeamInformation, explicit_path)],
        )
        .unwrap();

        assert_eq!(inputs.get(FileRole::TeamInformation).unwrap().len(), 2);
        assert_eq!(
            inputs.missing_roles(),
            vec![
                FileRole::PlayerRecord,
                FileRole::PlayersPersonal,
                FileRole::PlayerInformation,
            ]
        );
    }

    #[test]
    fn test_load_input_set_ignores_unknown_files() {
        let dir = TempDir::new().unwrap();
        let unknown = write_file(&dir, "readme.csv", "x\n1\n");
        let detected = detect_files(&[unknown]).unwrap();
        let inputs = load_input_set(&detected, &[]).unwrap();
        assert_eq!(inputs.missing_roles().len(), 4);
    }
}
