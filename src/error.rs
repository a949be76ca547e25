use camino::Utf8PathBuf;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can end a conversion run
///
/// "Nothing to do" situations (no archives, no text files) are not errors; they are
/// logged as warnings and the run carries on.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input folder not found: {0}")]
    InputFolderMissing(Utf8PathBuf),

    #[error("Failed to read archive {path}: {source}")]
    Archive {
        path: Utf8PathBuf,
        source: zip::result::ZipError,
    },

    #[error("Archive {archive} contains an entry that escapes the target folder: {entry}")]
    UnsafeEntryPath { archive: Utf8PathBuf, entry: String },

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}
