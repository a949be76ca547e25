use crate::error::ConvertError;
use crate::models::RunConfig;
use crate::services::{HandHistoryTransformer, RunReport, extract_all, process_text_files};
use anyhow::Result;

/// Run one conversion: unpack archives in the input folder, then convert every text file.
///
/// # Errors
///
/// Fails if the input folder is missing, an archive is corrupt, or any read, write or
/// delete fails. Files already written before the failure are left in place.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    if !config.input_folder.is_dir() {
        return Err(ConvertError::InputFolderMissing(config.input_folder.clone()).into());
    }

    tracing::info!(
        "Converting hand histories in {} -> {} (cleanup={}, dry_run={})",
        config.input_folder,
        config.output_folder,
        config.cleanup,
        config.dry_run
    );

    let settings = &config.settings;
    let extracted = extract_all(
        &config.input_folder,
        &settings.archive_extension,
        &settings.text_extension,
    )?;

    let transformer = HandHistoryTransformer::new();
    for rule in transformer.rules() {
        tracing::debug!("Rule {}: {:?}", rule.name(), rule.pattern());
    }

    let mut report = process_text_files(config, &transformer)?;
    report.extracted = extracted;

    tracing::info!("Run complete: {}", report.summary());
    Ok(report)
}
