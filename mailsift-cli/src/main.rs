use anyhow::{Context, Result};
use clap::Parser;
use mailsift_cli::{process_file, process_folder, AppConfig, ProcessOptions, RunPlan};
use shared_types::FileStatus;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(
    name = "mailsift",
    author,
    version,
    about = "Extract email addresses and names from CSV and VCF files",
    long_about = None
)]
struct Args {
    /// CSV or VCF file, or a folder containing them
    input: PathBuf,

    /// Output file; an existing directory here is used as the output folder
    output: Option<PathBuf>,

    /// Treat INPUT as a folder and process every CSV and VCF file in it
    #[arg(short, long)]
    folder: bool,

    /// Folder for the generated files
    #[arg(short, long, value_name = "DIR")]
    output_folder: Option<PathBuf>,

    /// Keep suspicious addresses in the main output
    #[arg(long)]
    no_filter: bool,

    /// Print the per-file reports as JSON
    #[arg(long)]
    json: bool,

    /// Config file to use instead of the per-user one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long)]
    log_file_path: Option<String>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let (config, config_path) =
        AppConfig::load(args.config.as_deref()).context("Failed to load mailsift config")?;

    let _log_guard = init_tracing(&config.logging.level, args.log_file_path.as_deref());
    tracing::debug!("Loaded config from {:?}", config_path);

    let filter_suspicious = config.output.filter_suspicious && !args.no_filter;

    let plan = RunPlan::resolve(
        &args.input,
        args.output.as_deref(),
        args.output_folder.as_deref(),
        args.folder,
        Path::new(&config.output.folder),
    )?;

    let reports = match plan {
        RunPlan::Folder {
            folder,
            output_folder,
        } => process_folder(&folder, &output_folder, filter_suspicious)?,
        RunPlan::SingleFile {
            input,
            output_file,
            output_folder,
        } => {
            let options = ProcessOptions {
                output_file,
                output_folder,
                filter_suspicious,
            };
            vec![process_file(&input, &options)]
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if reports.iter().any(|report| report.status == FileStatus::Failed) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Console logging on stderr (stdout is reserved for `--json`), plus an
/// optional plain-text log file.
fn init_tracing(level: &str, log_file_path: Option<&str>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if let Some(log_path) = log_file_path {
        let log_path = Path::new(log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("mailsift.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();

        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();

        None
    }
}
