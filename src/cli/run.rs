//! Command dispatch.
//!
//! Each command loads config, runs the pipeline, prints its report, and maps
//! the outcome to an [`ExitStatus`]. A run with collisions or skipped files
//! exits with `Failure` so CI can catch them; internal errors bubble up as
//! anyhow errors and become `Error` in main.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::args::{
    Arguments, Command, CommonArgs, CoverageCommand, ExtractCommand, IntlCommand, TemplateCommand,
};
use super::exit_status::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json, load_config};
use crate::coverage::analyze_coverage;
use crate::export::{csv, json};
use crate::pipeline::{ExtractionOutcome, run_extraction, run_intl_extraction};
use crate::report;

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Intl(cmd)) => intl(cmd),
        Some(Command::Coverage(cmd)) => coverage(cmd),
        Some(Command::Template(cmd)) => template(cmd),
        Some(Command::Init) => init(),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn load_effective_config(common: &CommonArgs) -> Result<Config> {
    let mut config = load_config(&common.project_root)?.config;
    if let Some(policy) = common.collision_policy {
        config.collision_policy = policy;
    }
    Ok(config)
}

fn outcome_status(outcome: &ExtractionOutcome) -> ExitStatus {
    if outcome.merged.collisions.is_empty() && outcome.warnings.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    }
}

fn export_outcome(
    outcome: &ExtractionOutcome,
    csv_path: Option<&Path>,
    json_path: Option<&Path>,
) -> Result<()> {
    if let Some(path) = csv_path {
        csv::write_csv(&outcome.merged.table, &outcome.export_languages(), path)?;
        println!("Exported CSV: {}", path.display());
    }
    if let Some(path) = json_path {
        json::write_json(outcome, path)?;
        println!("Exported JSON: {}", path.display());
    }
    Ok(())
}

fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let config = load_effective_config(&cmd.common)?;
    let outcome = run_extraction(&cmd.common.project_root, &config);

    report::print_summary(&outcome, cmd.common.verbose);
    report::print_preview(&outcome);
    export_outcome(&outcome, cmd.csv.as_deref(), cmd.json.as_deref())?;

    Ok(outcome_status(&outcome))
}

fn intl(cmd: IntlCommand) -> Result<ExitStatus> {
    let config = load_effective_config(&cmd.common)?;
    let outcome = run_intl_extraction(&cmd.common.project_root, &config)
        .context("intl extraction failed")?;

    report::print_summary(&outcome, cmd.common.verbose);
    report::print_preview(&outcome);
    export_outcome(&outcome, cmd.csv.as_deref(), cmd.json.as_deref())?;

    Ok(outcome_status(&outcome))
}

fn coverage(cmd: CoverageCommand) -> Result<ExitStatus> {
    let config = load_effective_config(&cmd.common)?;
    let outcome = run_extraction(&cmd.common.project_root, &config);

    let report_data = analyze_coverage(&outcome.merged, &cmd.lang)?;
    report::print_coverage(&report_data);

    if report_data.missing.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}

fn template(cmd: TemplateCommand) -> Result<ExitStatus> {
    let config = load_effective_config(&cmd.common)?;
    let outcome = run_extraction(&cmd.common.project_root, &config);

    csv::write_template_csv(
        &outcome.merged.table,
        &outcome.export_languages(),
        &cmd.lang,
        &cmd.output,
    )?;
    println!(
        "Created template: {} (fill the {}_NEW column)",
        cmd.output.display(),
        cmd.lang.to_uppercase()
    );

    Ok(outcome_status(&outcome))
}

fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    println!("Created {}", CONFIG_FILE_NAME);
    Ok(ExitStatus::Success)
}
