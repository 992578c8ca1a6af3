//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const PLAYER_INFORMATION_HEADER: &str =
    "Player_ID,First_Name,Last_Name,Position,Drafted_By,Draft_Round,Drafted_Position,Draft_Year";

pub fn bundled_fv() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/EstimatedFV.csv")
}

/// Write one export per role into `dir`, with `player_information` body
/// given as raw bytes.
pub fn write_exports(dir: &Path, player_information: &[u8]) -> Vec<PathBuf> {
    let text_files = [
        ("SHL_player_record.csv", "Player_ID,Games\n1,16\n"),
        (
            "SHL_players_personal.csv",
            "Player_ID,Future_Overall\n1,70\n2,45\n3,52\n4,60\n5,\n",
        ),
        (
            "SHL_team_information.csv",
            "Team,Home_City\n1,Boston\n2,Denver\n",
        ),
    ];

    let mut paths: Vec<PathBuf> = text_files
        .iter()
        .map(|(name, body)| {
            let path = dir.join(name);
            fs::write(&path, body).unwrap();
            path
        })
        .collect();

    let info = dir.join("SHL_player_information.csv");
    fs::write(&info, player_information).unwrap();
    paths.push(info);
    paths
}

pub fn standard_player_information() -> Vec<u8> {
    format!(
        "{PLAYER_INFORMATION_HEADER}\n\
         1,Ada,Lane,QB,1,1,1,2024\n\
         2,Bo,Reed,WR,2,1,2,2024\n\
         3,Cy,Moss,P,2,7,30,2024\n\
         4,Di,Park,RB,9,2,5,2024\n\
         5,Ed,Cole,TE,1,3,1,2024\n\
         6,Fa,Voss,QB,1,1,3,2023\n"
    )
    .into_bytes()
}
