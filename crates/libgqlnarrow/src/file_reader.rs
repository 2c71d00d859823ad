//! Reads GraphQL source text (schemas and executable documents) from disk.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

pub fn read_content(file_path: impl AsRef<Path>) -> Result<String> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|err| ReadContentError::Io {
        file_path: file_path.to_path_buf(),
        kind: err.kind(),
        message: err.to_string(),
    })?;
    log::trace!("read {} byte(s) from `{}`", bytes.len(), file_path.display());

    String::from_utf8(bytes).map_err(|err| ReadContentError::NotUtf8 {
        file_path: file_path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}

/// The underlying [`std::io::Error`] is flattened to its kind and message so
/// this error stays `Clone` and comparable.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ReadContentError {
    #[error("Failed to read `{}`: {message}", file_path.display())]
    Io {
        file_path: PathBuf,
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error(
        "`{}` is not valid UTF-8 (first invalid byte at offset {valid_up_to})",
        file_path.display(),
    )]
    NotUtf8 {
        file_path: PathBuf,
        valid_up_to: usize,
    },

    #[error("`{}` is not a file", .0.display())]
    PathIsNotAFile(PathBuf),
}
