//! Archive scanning and extraction.
//!
//! Hand histories arrive as ZIP exports. Every archive directly inside the input
//! folder is opened and its text entries are unpacked next to it, keeping the
//! relative paths stored in the archive.

use crate::error::ConvertError;
use crate::models::has_extension;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs::{self, File};
use std::io;

/// Lists the files directly inside `dir` whose names end in `.{extension}`.
///
/// Sorted by name so runs are reproducible.
pub fn list_files_with_extension(dir: &Utf8Path, extension: &str) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();

    for entry in dir
        .read_dir_utf8()
        .with_context(|| format!("Failed to read directory: {}", dir))?
    {
        let entry = entry.with_context(|| format!("Failed to read entry in: {}", dir))?;
        if !has_extension(entry.file_name(), extension) {
            continue;
        }
        // Follows symlinks, unlike the entry's own file type
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Finds every archive directly inside `dir`.
pub fn find_archives(dir: &Utf8Path, archive_extension: &str) -> Result<Vec<Utf8PathBuf>> {
    list_files_with_extension(dir, archive_extension)
}

/// Extracts every `.{text_extension}` entry of `archive` into `target`.
///
/// Relative paths inside the archive are preserved. Entries that would land outside
/// `target` are rejected; a corrupt archive fails the whole call.
///
/// # Returns
///
/// The paths written, in archive order
pub fn extract_text_entries(
    archive: &Utf8Path,
    target: &Utf8Path,
    text_extension: &str,
) -> Result<Vec<Utf8PathBuf>> {
    let file = File::open(archive).with_context(|| format!("Failed to open archive: {}", archive))?;
    let mut zip = zip::ZipArchive::new(file).map_err(|source| ConvertError::Archive {
        path: archive.to_path_buf(),
        source,
    })?;

    let mut extracted = Vec::new();

    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(|source| ConvertError::Archive {
            path: archive.to_path_buf(),
            source,
        })?;

        if entry.is_dir() || !has_extension(entry.name(), text_extension) {
            continue;
        }

        let relative = entry
            .enclosed_name()
            .ok_or_else(|| ConvertError::UnsafeEntryPath {
                archive: archive.to_path_buf(),
                entry: entry.name().to_string(),
            })?;
        let relative =
            Utf8PathBuf::try_from(relative).map_err(|e| ConvertError::NonUtf8Path(e.into_path_buf()))?;
        let destination = target.join(&relative);

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent))?;
        }

        let mut out = File::create(&destination)
            .with_context(|| format!("Failed to create file: {}", destination))?;
        io::copy(&mut entry, &mut out)
            .with_context(|| format!("Failed to extract {} from {}", relative, archive))?;

        tracing::info!("Extracted: {}", relative);
        extracted.push(destination);
    }

    Ok(extracted)
}

/// Extracts the text entries of every archive found in `dir` back into `dir`.
///
/// Finding no archives is not an error; the run continues with whatever text files
/// are already present.
///
/// # Returns
///
/// Number of text files extracted across all archives
pub fn extract_all(dir: &Utf8Path, archive_extension: &str, text_extension: &str) -> Result<usize> {
    let archives = find_archives(dir, archive_extension)?;
    if archives.is_empty() {
        tracing::warn!("No .{} archives found in {}", archive_extension, dir);
        return Ok(0);
    }

    let mut total = 0;
    for archive in &archives {
        tracing::debug!("Opening archive: {}", archive);
        total += extract_text_entries(archive, dir, text_extension)?.len();
    }

    tracing::info!(
        "Extracted {} text file(s) from {} archive(s)",
        total,
        archives.len()
    );
    Ok(total)
}
