//! Entry point: parse CLI, set up logging and dispatch to the command handler.

use anyhow::Context;
use clap::Parser;
use draft_grades::{
    cli::{Commands, DraftGrades},
    commands::grade::{handle_grade, GradeParams},
};
use log::LevelFilter;

fn init_logging(verbose: bool) {
    let crate_level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("draft_grades", crate_level)
        .parse_default_env()
        .init();
}

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = DraftGrades::parse();

    match app.command {
        Commands::Grade {
            league,
            year,
            files,
            inputs,
            estimated_fv,
            positional_averages,
            output_dir,
            top,
            json,
            verbose,
        } => {
            init_logging(verbose);
            let context = format!("grading the {} {} draft", league, year);
            handle_grade(GradeParams {
                league,
                year,
                files,
                explicit: inputs.explicit(),
                estimated_fv,
                positional_averages,
                output_dir,
                top_n: top,
                as_json: json,
                verbose,
            })
            .context(context)?;
        }
    }

    Ok(())
}
