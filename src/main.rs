// ModSieve - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (config.toml + flag overrides)
// 3. Logging initialisation (debug mode support)
// 4. Running the pipeline for each requested log file
//
// Exit codes: 0 = all requested logs parsed, 2 = some parsed, 1 = none.

use clap::{Parser, ValueEnum};
use modsieve::app::pipeline::{self, PipelineConfig};
use modsieve::core::model::Level;
use modsieve::platform::config::{self, PlatformPaths};
use modsieve::util::{constants, logging};
use std::path::PathBuf;
use std::process::ExitCode;

/// Which of the launcher's standard log files to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogType {
    /// Only latest.log.
    Latest,
    /// Only debug.log.
    Debug,
    /// Both latest.log and debug.log.
    Both,
}

/// ModSieve - Minecraft mod log triage.
///
/// Segments a launcher log into classified WARN/ERROR/FATAL entries (with
/// their stack-trace continuations), flags mod-specific lines via a tag
/// filter, and writes Markdown and JSON reports for each parsed log.
#[derive(Parser, Debug)]
#[command(name = "modsieve", version, about)]
struct Cli {
    /// Explicit log files to parse. When given, --instance-dir and
    /// --log-type are ignored.
    files: Vec<PathBuf>,

    /// Minecraft instance directory (the one containing logs/).
    #[arg(short = 'i', long = "instance-dir")]
    instance_dir: Option<PathBuf>,

    /// Which standard log files to parse from the instance.
    #[arg(short = 'l', long = "log-type", value_enum, default_value_t = LogType::Both)]
    log_type: LogType,

    /// Directory to write report artifacts into.
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Case-insensitive substring used to tag mod-specific lines
    /// (e.g. the mod id).
    #[arg(short = 't', long = "tag")]
    tag: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load config before logging init so [logging] level can take effect.
    let platform_paths = PlatformPaths::resolve();
    let (app_config, config_warnings) = config::load_config(&platform_paths.config_dir);

    logging::init(cli.debug, app_config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "ModSieve starting"
    );

    // CLI flags override config.toml.
    let pipeline_config = PipelineConfig {
        tag_filter: cli.tag.clone().or(app_config.tag_filter.clone()),
        output_dir: cli
            .output_dir
            .clone()
            .unwrap_or_else(|| app_config.output_dir.clone()),
    };

    let log_paths = match resolve_log_paths(&cli, &app_config) {
        Ok(paths) => paths,
        Err(message) => {
            eprintln!("Error: {message}");
            return ExitCode::from(1);
        }
    };

    let mut parsed = 0usize;
    for log_path in &log_paths {
        match pipeline::process_log(log_path, &pipeline_config) {
            Ok(artifacts) => {
                parsed += 1;
                let breakdown: Vec<String> = Level::all()
                    .iter()
                    .map(|level| format!("{level}: {}", artifacts.summary.by_level.get(*level)))
                    .collect();
                println!(
                    "Parsed {}: {} entries ({}), {} tagged lines",
                    log_path.display(),
                    artifacts.summary.total_entries,
                    breakdown.join(", "),
                    artifacts.summary.tagged_lines,
                );
                println!("  -> {}", artifacts.entries_report.display());
                if let Some(ref tagged) = artifacts.tagged_report {
                    println!("  -> {}", tagged.display());
                }
                println!("  -> {}", artifacts.json_export.display());
            }
            Err(e) if e.is_source_not_found() => {
                tracing::warn!(path = %log_path.display(), "Log file not found; skipping");
                eprintln!("Warning: {e}");
            }
            Err(e) => {
                tracing::error!(path = %log_path.display(), error = %e, "Failed to process log");
                eprintln!("Error: {e}");
            }
        }
    }

    match parsed {
        0 => {
            eprintln!("Error: no log files could be parsed");
            ExitCode::from(1)
        }
        n if n < log_paths.len() => {
            eprintln!(
                "Warning: parsed {n}/{} log files; output in '{}'",
                log_paths.len(),
                pipeline_config.output_dir.display()
            );
            ExitCode::from(2)
        }
        _ => {
            println!(
                "Parsed {parsed}/{} log files; output in '{}'",
                log_paths.len(),
                pipeline_config.output_dir.display()
            );
            ExitCode::SUCCESS
        }
    }
}

/// Determine which log files to process from the CLI and config.
///
/// Explicit file arguments win outright; otherwise the instance directory
/// (CLI flag or config.toml) supplies `logs/<name>.log` for each selected
/// standard log name.
fn resolve_log_paths(cli: &Cli, app_config: &config::AppConfig) -> Result<Vec<PathBuf>, String> {
    if !cli.files.is_empty() {
        return Ok(cli.files.clone());
    }

    let instance_dir = cli
        .instance_dir
        .clone()
        .or_else(|| app_config.instance_dir.clone())
        .ok_or_else(|| {
            "no log files given and no instance directory configured \
             (pass files, use --instance-dir, or set [instance] dir in config.toml)"
                .to_string()
        })?;

    let logs_dir = instance_dir.join(constants::LOGS_SUBDIR);

    let selected: Vec<&str> = match cli.log_type {
        LogType::Latest => vec!["latest"],
        LogType::Debug => vec!["debug"],
        LogType::Both => app_config.log_names.iter().map(String::as_str).collect(),
    };

    Ok(selected
        .into_iter()
        .map(|name| logs_dir.join(format!("{name}.{}", constants::LOG_FILE_EXTENSION)))
        .collect())
}
