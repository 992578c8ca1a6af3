//! The `grade` command: load exports, run the pipeline, write the workbook.
//!
//! The entry point is [`handle_grade`], configured through [`GradeParams`].

use crate::{
    cli::types::{DraftYear, LeagueName},
    config::{output_path, resolve_estimated_fv_path, resolve_output_dir},
    export::export_workbook,
    input::{detect_files, load_input_set, DetectedFile, FileRole},
    pipeline::{grade, GradeOptions, GradeReport, PipelineDiagnostics},
    reference::ReferenceTables,
    Result,
};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Configuration for one grading run.
///
/// # Examples
///
/// ```rust
/// use draft_grades::{commands::grade::GradeParams, DraftYear};
///
/// let params = GradeParams {
///     league: "SHL".parse().unwrap(),
///     year: DraftYear::new(2024),
///     files: vec!["exports/SHL_player_information.csv".into()],
///     explicit: Vec::new(),
///     estimated_fv: None,
///     positional_averages: None,
///     output_dir: None,
///     top_n: 20,
///     as_json: false,
///     verbose: false,
/// };
/// assert_eq!(params.league.as_str(), "SHL");
/// ```
#[derive(Debug, Clone)]
pub struct GradeParams {
    pub league: LeagueName,
    pub year: DraftYear,
    /// Files whose roles are detected by name.
    pub files: Vec<PathBuf>,
    /// Files with an explicit role; these win over detected files.
    pub explicit: Vec<(FileRole, PathBuf)>,
    pub estimated_fv: Option<PathBuf>,
    pub positional_averages: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub top_n: usize,
    pub as_json: bool,
    pub verbose: bool,
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct GradeOutcome {
    pub workbook_path: PathBuf,
    pub report: GradeReport,
}

/// Handle the grade command
pub fn handle_grade(params: GradeParams) -> Result<GradeOutcome> {
    let detected = detect_files(&params.files)?;
    if params.verbose {
        print_detected_files(&detected);
    }

    let inputs = load_input_set(&detected, &params.explicit)?;

    let fv_path = resolve_estimated_fv_path(params.estimated_fv)?;
    let refs = ReferenceTables::load(&fv_path, params.positional_averages.as_deref())?;

    let options = GradeOptions::new(params.year).with_top_n(params.top_n);
    let report = grade(inputs, &refs, options)?;

    let workbook = export_workbook(&report.tables, &params.league, params.year)?;
    let dir = resolve_output_dir(params.output_dir);
    fs::create_dir_all(&dir)?;
    let workbook_path = output_path(&dir, &workbook.filename);
    fs::write(&workbook_path, &workbook.bytes)?;
    info!(
        "wrote {} bytes to {}",
        workbook.bytes.len(),
        workbook_path.display()
    );

    println!(
        "✓ Graded {} picks from the {} {} draft",
        report.picks.len(),
        params.league,
        params.year
    );
    println!("Workbook written to: {}", workbook_path.display());

    if params.verbose {
        print_diagnostics(&report.diagnostics); // tarpaulin::skip
    }

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&report.tables)?); // tarpaulin::skip
    } else {
        print_team_summary(&report); // tarpaulin::skip
    }

    Ok(GradeOutcome {
        workbook_path,
        report,
    })
}

fn print_detected_files(detected: &[DetectedFile]) {
    println!("{:<40} {:<28} {:>10}", "File", "Role", "Size (KB)");
    for file in detected {
        let role = file
            .role
            .map_or_else(|| "unrecognised".to_string(), |r| r.to_string());
        println!(
            "{:<40} {:<28} {:>10.1}",
            file.file_name(),
            role,
            file.size_kb()
        );
    }
}

fn print_diagnostics(diagnostics: &PipelineDiagnostics) {
    if diagnostics.is_clean() {
        println!("No data issues found");
        return;
    }
    println!("Data issues:");
    println!("  skipped player_information rows: {}", diagnostics.skipped_rows);
    println!(
        "  skipped players_personal rows: {}",
        diagnostics.skipped_projections
    );
    println!(
        "  duplicate players_personal rows: {}",
        diagnostics.duplicate_projections
    );
    if !diagnostics.unmapped_teams.is_empty() {
        let codes: Vec<&str> = diagnostics.unmapped_teams.iter().map(|c| c.as_str()).collect();
        println!("  unmapped team codes: {}", codes.join(", "));
    }
    println!(
        "  picks without an expected value: {}",
        diagnostics.missing_expected_value
    );
    println!(
        "  picks without a positional average: {}",
        diagnostics.missing_positional_average
    );
    println!(
        "  picks with an undefined weighted value: {}",
        diagnostics.undefined_weighted_value
    );
}

fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn print_team_summary(report: &GradeReport) {
    println!();
    println!(
        "{:>4} {:>4}  {:<24} {:>8}  Verdict",
        "WR", "BPA", "Team", "Weighted"
    );
    for row in &report.tables.weighted_rank {
        println!(
            "{:>4} {:>4}  {:<24} {:>8}  {}",
            fmt_opt(row.weighted_rank),
            fmt_opt(row.bpa_rank),
            row.team.as_deref().unwrap_or("(unmapped)"),
            fmt_opt(row.weighted_value.map(|v| format!("{:.2}", v))),
            row.verdict
        );
    }
}
