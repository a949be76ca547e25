use crate::models::RunConfig;
use crate::services::archive::list_files_with_extension;
use crate::services::transform::HandHistoryTransformer;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::borrow::Cow;
use std::fs;

/// Outcome of processing the text files of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub extracted: usize,
    pub converted: usize,
    pub previewed: usize,
    pub deleted: usize,
    pub output_files: Vec<Utf8PathBuf>,
}

impl RunReport {
    /// Get a summary string of what the run did
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.extracted > 0 {
            parts.push(format!("{} extracted", self.extracted));
        }
        if self.converted > 0 {
            parts.push(format!("{} converted", self.converted));
        }
        if self.previewed > 0 {
            parts.push(format!("{} previewed", self.previewed));
        }
        if self.deleted > 0 {
            parts.push(format!("{} originals deleted", self.deleted));
        }

        if parts.is_empty() {
            "Nothing to convert".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Lists the hand history files directly inside `dir`.
pub fn find_text_files(dir: &Utf8Path, text_extension: &str) -> Result<Vec<Utf8PathBuf>> {
    list_files_with_extension(dir, text_extension)
}

/// Converts CRLF and lone CR line endings to LF.
///
/// Exports from Windows clients use CRLF; the rewrite rules only match `\n`.
pub fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

/// First `max_chars` characters of `content`, never splitting a character.
pub fn preview(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((end, _)) => &content[..end],
        None => content,
    }
}

/// Converts every text file in the input folder.
///
/// Line endings are normalized to LF before conversion and the output is written
/// with LF endings.
///
/// In dry-run mode the converted text is only logged and nothing on disk changes.
/// Otherwise each result is written under the same name into the output folder,
/// which is created on first write. With cleanup enabled the source file is deleted
/// once its output is saved. Earlier files stay written if a later one fails.
pub fn process_text_files(
    config: &RunConfig,
    transformer: &HandHistoryTransformer,
) -> Result<RunReport> {
    let mut report = RunReport::default();
    let settings = &config.settings;

    let text_files = find_text_files(&config.input_folder, &settings.text_extension)?;
    if text_files.is_empty() {
        tracing::warn!(
            "No .{} files to process in {}",
            settings.text_extension,
            config.input_folder
        );
        return Ok(report);
    }

    for input_path in &text_files {
        let file_name = input_path
            .file_name()
            .with_context(|| format!("Text file has no name: {}", input_path))?;

        let content = fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read: {}", input_path))?;
        let converted = transformer.transform(&normalize_line_endings(&content));

        if config.dry_run {
            tracing::info!(
                "[Dry run] Preview of {}:\n{}\n...",
                file_name,
                preview(&converted, settings.preview_chars)
            );
            report.previewed += 1;

            if config.cleanup {
                tracing::info!("[Dry run] Would delete original: {}", input_path);
            }
            continue;
        }

        if !config.output_folder.exists() {
            fs::create_dir_all(&config.output_folder).with_context(|| {
                format!("Failed to create output folder: {}", config.output_folder)
            })?;
            tracing::info!("Created output folder: {}", config.output_folder);
        }

        let output_path = config.output_folder.join(file_name);
        fs::write(&output_path, &converted)
            .with_context(|| format!("Failed to write: {}", output_path))?;
        tracing::info!("Saved: {}", output_path);
        report.converted += 1;
        report.output_files.push(output_path);

        if config.cleanup {
            fs::remove_file(input_path)
                .with_context(|| format!("Failed to delete original: {}", input_path))?;
            tracing::info!("Deleted original: {}", input_path);
            report.deleted += 1;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\r\n"), "a\nb\n");
        assert_eq!(normalize_line_endings("a\rb"), "a\nb");
        assert_eq!(normalize_line_endings("a\r\n\r\nb"), "a\n\nb");
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_preview_truncates_on_chars() {
        assert_eq!(preview("hello", 3), "hel");
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("♠♥♦♣", 2), "♠♥");
        assert_eq!(preview("", 5), "");
    }

    #[test]
    fn test_report_summary() {
        assert_eq!(RunReport::default().summary(), "Nothing to convert");

        let report = RunReport {
            extracted: 2,
            converted: 2,
            deleted: 1,
            ..RunReport::default()
        };
        assert_eq!(report.summary(), "2 extracted, 2 converted, 1 originals deleted");
    }
}
