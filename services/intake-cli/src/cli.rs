use crate::commands::{list_forms, transform_file, FormsArgs, TransformArgs};
use clap::{Parser, Subcommand};
use divorce_intake::config::AppConfig;
use divorce_intake::error::AppError;
use divorce_intake::telemetry;
use divorce_intake::workflows::bulk_scan::{registry, PipelineRegistry, RequiredFieldsValidator};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "divorce-intake",
    about = "Transform scanned paper divorce and dissolution forms into case data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transform one form's OCR fields and print the case field map
    Transform(TransformArgs),
    /// List the form types this installation accepts
    Forms(FormsArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let registry = registry::install(PipelineRegistry::from_config(
        &config.intake,
        Arc::new(RequiredFieldsValidator),
    ))?;
    info!(
        ?config.environment,
        warning_ids = config.intake.warning_ids.as_str(),
        "bulk scan intake ready"
    );

    let rendered = match cli.command {
        Command::Transform(args) => transform_file(&args, registry)?,
        Command::Forms(args) => list_forms(&args, registry)?,
    };
    println!("{rendered}");
    Ok(())
}
