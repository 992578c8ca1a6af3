//! Argument parsing tests

use super::*;

fn parse(args: &[&str]) -> Result<DraftGrades, clap::Error> {
    DraftGrades::try_parse_from(std::iter::once("draft-grades").chain(args.iter().copied()))
}

#[cfg(test)]
mod grade_args_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = parse(&["grade", "--league", "SHL", "a_player_record.csv"]).unwrap();
        let Commands::Grade {
            league,
            year,
            files,
            inputs,
            estimated_fv,
            output_dir,
            top,
            json,
            verbose,
            ..
        } = cli.command;

        assert_eq!(league.as_str(), "SHL");
        assert_eq!(year, DraftYear::new(2024));
        assert_eq!(files, vec![PathBuf::from("a_player_record.csv")]);
        assert!(inputs.explicit().is_empty());
        assert_eq!(estimated_fv, None);
        assert_eq!(output_dir, None);
        assert_eq!(top, DEFAULT_TOP_N);
        assert!(!json);
        assert!(!verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "grade",
            "-l",
            "SHL",
            "-y",
            "2026",
            "--team-information",
            "teams.csv",
            "--player-information",
            "players.csv",
            "--estimated-fv",
            "fv.csv",
            "--positional-averages",
            "pos.csv",
            "-o",
            "out",
            "--top",
            "5",
            "--json",
            "-v",
        ])
        .unwrap();
        let Commands::Grade {
            year,
            inputs,
            estimated_fv,
            positional_averages,
            output_dir,
            top,
            json,
            verbose,
            ..
        } = cli.command;

        assert_eq!(year, DraftYear::new(2026));
        assert_eq!(
            inputs.explicit(),
            vec![
                (FileRole::TeamInformation, PathBuf::from("teams.csv")),
                (FileRole::PlayerInformation, PathBuf::from("players.csv")),
            ]
        );
        assert_eq!(estimated_fv, Some(PathBuf::from("fv.csv")));
        assert_eq!(positional_averages, Some(PathBuf::from("pos.csv")));
        assert_eq!(output_dir, Some(PathBuf::from("out")));
        assert_eq!(top, 5);
        assert!(json);
        assert!(verbose);
    }

    #[test]
    fn test_league_is_required() {
        assert!(parse(&["grade"]).is_err());
    }

    #[test]
    fn test_invalid_league_rejected() {
        assert!(parse(&["grade", "--league", "../etc"]).is_err());
        assert!(parse(&["grade", "--league", ""]).is_err());
    }

    #[test]
    fn test_top_must_be_positive() {
        assert!(parse(&["grade", "--league", "SHL", "--top", "0"]).is_err());
        assert!(parse(&["grade", "--league", "SHL", "--top", "1"]).is_ok());
    }

    #[test]
    fn test_invalid_year_rejected() {
        assert!(parse(&["grade", "--league", "SHL", "--year", "next"]).is_err());
    }
}
