#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # docgrade
//! ## Introduction
//!
//! Grades a folder of PDF and Word reports against a writing rubric and
//! writes the scores to a spreadsheet.
//!
//! Spelling and grammar are checked by a LanguageTool server, by default at
//! `http://localhost:8081`. Settings can also come from `DOCGRADE_*`
//! variables, read from a `.env` file when present.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bpaf::*;
use colored::Colorize;
use docgrade::{
    GraderConfig, GradingSession, LanguageToolClient, ReportExporter, Roster, RowLayout,
    ScoringPreset,
};
use dotenvy::dotenv;
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Arguments of the `grade` subcommand.
#[derive(Debug, Clone)]
struct GradeArgs {
    /// Roster JSON override.
    roster:     Option<PathBuf>,
    /// One row per file instead of per student.
    per_file:   bool,
    /// Scoring preset override.
    preset:     Option<ScoringPreset>,
    /// Spreadsheet directory override.
    output_dir: Option<PathBuf>,
    /// Also dump rows as JSON here.
    json:       Option<PathBuf>,
    /// Folder of reports.
    folder:     PathBuf,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade a folder
    Grade(GradeArgs),
    /// Check that the grammar service answers
    CheckService,
}

/// Parsed command line.
#[derive(Debug, Clone)]
struct Opts {
    /// Log at debug level.
    verbose: bool,
    /// Subcommand.
    cmd:     Cmd,
}

/// Parse the command line arguments and return the options
fn options() -> Opts {
    /// parses the roster path
    fn roster() -> impl Parser<Option<PathBuf>> {
        long("roster")
            .help("Roster JSON mapping group ids to topic and students")
            .argument::<PathBuf>("PATH")
            .optional()
    }

    /// parses the per-file switch
    fn per_file() -> impl Parser<bool> {
        long("per-file")
            .help("One row per file instead of one per roster student")
            .switch()
    }

    /// parses the scoring preset
    fn preset() -> impl Parser<Option<ScoringPreset>> {
        long("preset")
            .help("Scoring preset: classic or relaxed")
            .argument::<String>("NAME")
            .parse(|s| s.parse::<ScoringPreset>())
            .optional()
    }

    /// parses the output directory
    fn output_dir() -> impl Parser<Option<PathBuf>> {
        long("output-dir")
            .help("Directory for the spreadsheet (default: next to FOLDER)")
            .argument::<PathBuf>("DIR")
            .optional()
    }

    /// parses the JSON dump path
    fn json() -> impl Parser<Option<PathBuf>> {
        long("json")
            .help("Also write the rows as JSON to this file")
            .argument::<PathBuf>("PATH")
            .optional()
    }

    /// parses the input folder
    fn folder() -> impl Parser<PathBuf> {
        positional::<PathBuf>("FOLDER").help("Folder of PDF and Word reports")
    }

    let (roster, per_file, preset, output_dir, json, folder) =
        (roster(), per_file(), preset(), output_dir(), json(), folder());
    let grade = construct!(GradeArgs {
        roster,
        per_file,
        preset,
        output_dir,
        json,
        folder
    })
    .to_options()
    .command("grade")
    .help("Grade every report in a folder")
    .map(Cmd::Grade);

    let check_service = pure(Cmd::CheckService)
        .to_options()
        .command("check-service")
        .help("Check that the grammar service is reachable");

    let cmd = construct!([grade, check_service]);
    let verbose = short('v').long("verbose").help("Log debug output").switch();

    construct!(Opts { verbose, cmd })
        .to_options()
        .descr("Rubric grader for written reports")
        .run()
}

/// Applies command line overrides on top of the environment configuration.
fn configure(args: &GradeArgs) -> GraderConfig {
    let mut config = GraderConfig::from_env();
    if args.per_file {
        config = config.with_layout(RowLayout::PerFile);
    }
    if let Some(preset) = args.preset {
        config = config.with_preset(preset);
    }
    if let Some(roster) = &args.roster {
        config = config.with_roster_path(roster);
    }
    if let Some(dir) = &args.output_dir {
        config = config.with_output_dir(dir);
    }
    config
}

/// Runs the `grade` subcommand.
async fn grade(args: GradeArgs) -> Result<()> {
    let config = configure(&args);
    let roster = Roster::for_config(&config).context("Could not load the roster")?;
    let checker = LanguageToolClient::new(config.languagetool_endpoint(), config.language())?;

    if !args.folder.is_dir() {
        tracing::error!("input folder {} does not exist", args.folder.display());
        return Ok(());
    }

    let layout = config.layout();
    let session = GradingSession::new(config, roster, checker);
    let report = docgrade::grade(&args.folder, session).await?;

    let exporter = ReportExporter::new(layout);
    exporter.print_summary(&report.rows, std::io::stdout().lock())?;
    if let Some(json) = &args.json {
        exporter.write_json(&report.rows, json)?;
    }

    eprintln!(
        "{} {} rows written to {}",
        "Grading complete:".green().bold(),
        report.rows.len(),
        report.spreadsheet.display()
    );
    Ok(())
}

/// Runs the `check-service` subcommand.
async fn check_service() -> Result<()> {
    let config = GraderConfig::from_env();
    let client = LanguageToolClient::new(config.languagetool_endpoint(), config.language())?;
    match client.languages().await {
        Ok(langs) => {
            let supported = langs.iter().any(|l| l == client.language());
            eprintln!(
                "{} {} ({} languages, {} {})",
                "Grammar service up:".green().bold(),
                client.endpoint(),
                langs.len(),
                client.language(),
                if supported { "supported" } else { "not supported" }
            );
        }
        Err(e) => eprintln!("{} {}: {e}", "Grammar service down:".red().bold(), client.endpoint()),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let opts = options();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let level = if opts.verbose { Level::DEBUG } else { Level::INFO };
    let filter_layer = LevelFilter::from_level(level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match opts.cmd {
        Cmd::Grade(args) => grade(args).await?,
        Cmd::CheckService => check_service().await?,
    };

    Ok(())
}
