//! hhconvert - Hand history converter
//!
//! Command line entry point.
//!
//! # Overview
//!
//! Unpacks ZIP exports of hand histories from the input folder, rewrites each `.txt`
//! file into PokerStars format and saves the result into a date-stamped output folder
//! (`<input>/YY.MM.DD` unless `--output-folder` is given) for import into a hand tracker.
//!
//! # Execution Flow
//!
//! 1. Parse arguments (`-if`/`-of` are accepted as aliases of the long forms)
//! 2. Load `hhconvert.yaml` (or `--config <PATH>`) settings, defaults if absent
//! 3. Initialize logging → console, plus `<Log Dir>/hhconvert.<date>` when configured
//! 4. Extract archives, convert text files, write / preview / clean up
//!
//! Any unexpected I/O error ends the run with a non-zero exit code.

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use hhconvert::{APP_NAME, ConfigManager, RunConfig, VERSION};
use std::ffi::OsString;

/// Convert poker room hand history exports into PokerStars format for Hand2Note
#[derive(Parser, Debug)]
#[command(name = "hhconvert", version, about)]
struct Cli {
    /// Folder containing the ZIP exports; extracted hand histories land here too
    #[arg(long, visible_alias = "input_folder", default_value = ".")]
    input_folder: Utf8PathBuf,

    /// Output folder; defaults to a YY.MM.DD subfolder of the input folder
    #[arg(long, visible_alias = "output_folder")]
    output_folder: Option<Utf8PathBuf>,

    /// Delete the original .txt files after conversion
    #[arg(long)]
    cleanup: bool,

    /// Log a preview of each converted file without writing or deleting anything
    #[arg(long)]
    dry_run: bool,

    /// Settings file to use instead of ./hhconvert.yaml
    #[arg(long, value_name = "PATH")]
    config: Option<Utf8PathBuf>,

    /// Write the effective settings to the settings file and exit
    #[arg(long)]
    write_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Rewrites the two-letter short flags clap cannot declare into their long forms.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    const SHORT_FLAGS: [(&str, &str); 2] =
        [("-if", "--input-folder"), ("-of", "--output-folder")];

    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            for (short, long) in SHORT_FLAGS {
                if text == short {
                    return OsString::from(long);
                }
                if let Some(value) = text.strip_prefix(short).and_then(|v| v.strip_prefix('=')) {
                    return OsString::from(format!("{}={}", long, value));
                }
            }
            arg
        })
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    let config_manager = cli
        .config
        .as_deref()
        .map(ConfigManager::new)
        .unwrap_or_default();
    let settings_found = config_manager.settings_path().exists();
    let settings = config_manager.load_settings()?;

    let _guard = hhconvert::logging::setup_logging(
        settings.log_dir.as_deref(),
        APP_NAME,
        cli.verbose || settings.debug_mode,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);
    if settings_found {
        tracing::info!("Using settings from {}", config_manager.settings_path());
    } else {
        tracing::warn!(
            "Settings file not found at {}, using defaults",
            config_manager.settings_path()
        );
    }

    if cli.write_config {
        return config_manager.save_settings(&settings);
    }

    let run_config = RunConfig::resolve(
        &cli.input_folder,
        cli.output_folder.as_deref(),
        cli.cleanup,
        cli.dry_run,
        settings,
        chrono::Local::now().date_naive(),
    )?;

    hhconvert::run(&run_config).map(|_| ()).map_err(|e| {
        tracing::error!("Conversion failed: {:#}", e);
        e
    })
}
