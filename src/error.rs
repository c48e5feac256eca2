use crate::output::TextEncoding;
use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ListcatError {
    #[error("Cannot read root directory {path}: {source}")]
    Root {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Root is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Cannot open output file {path}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not valid {encoding} text")]
    Decode {
        path: PathBuf,
        encoding: TextEncoding,
    },
    #[error("Entry for {path} cannot be encoded as {encoding}")]
    Encode {
        path: PathBuf,
        encoding: TextEncoding,
    },
}
impl ListcatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ListcatError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ListcatError::Output {
            path: path.into(),
            source,
        }
    }
    /// Whether the error only concerns a single source file.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            ListcatError::Io { .. } | ListcatError::Decode { .. } | ListcatError::Encode { .. }
        )
    }
}
