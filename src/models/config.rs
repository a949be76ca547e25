use anyhow::{Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Converter settings from hhconvert.yaml
///
/// Every key is optional; missing keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterSettings {
    #[serde(rename = "Preview Chars", default = "default_preview_chars")]
    pub preview_chars: usize,

    #[serde(rename = "Archive Extension", default = "default_archive_extension")]
    pub archive_extension: String,

    #[serde(rename = "Text Extension", default = "default_text_extension")]
    pub text_extension: String,

    /// strftime pattern for the default output folder name
    #[serde(rename = "Date Format", default = "default_date_format")]
    pub date_format: String,

    #[serde(rename = "Debug Mode", default)]
    pub debug_mode: bool,

    /// Directory for rotating log files; console only when unset
    #[serde(rename = "Log Dir", default)]
    pub log_dir: Option<String>,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            preview_chars: default_preview_chars(),
            archive_extension: default_archive_extension(),
            text_extension: default_text_extension(),
            date_format: default_date_format(),
            debug_mode: false,
            log_dir: None,
        }
    }
}

fn default_preview_chars() -> usize {
    500
}

fn default_archive_extension() -> String {
    "zip".to_string()
}

fn default_text_extension() -> String {
    "txt".to_string()
}

fn default_date_format() -> String {
    "%y.%m.%d".to_string()
}

/// Returns true when `file_name` ends in `.{extension}` (case-sensitive).
pub fn has_extension(file_name: &str, extension: &str) -> bool {
    file_name
        .strip_suffix(extension)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Configuration for a single conversion run.
///
/// Built once from the command line and settings file, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_folder: Utf8PathBuf,
    pub output_folder: Utf8PathBuf,
    pub cleanup: bool,
    pub dry_run: bool,
    pub settings: ConverterSettings,
}

impl RunConfig {
    /// Resolve the run configuration.
    ///
    /// When no output folder is given, results go to a date-stamped subfolder of the
    /// input folder, e.g. `<input>/26.10.18`.
    pub fn resolve(
        input_folder: &Utf8Path,
        output_folder: Option<&Utf8Path>,
        cleanup: bool,
        dry_run: bool,
        settings: ConverterSettings,
        today: NaiveDate,
    ) -> Result<Self> {
        let output_folder = match output_folder {
            Some(folder) => folder.to_path_buf(),
            None => {
                let mut folder_name = String::new();
                write!(folder_name, "{}", today.format(&settings.date_format))
                    .map_err(|_| anyhow!("Invalid date format: {:?}", settings.date_format))?;
                input_folder.join(folder_name)
            }
        };

        Ok(Self {
            input_folder: input_folder.to_path_buf(),
            output_folder,
            cleanup,
            dry_run,
            settings,
        })
    }
}
