use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed `seqinfo.ini`
    #[error("invalid sequence configuration {}: {message}", .path.display())]
    Configuration { path: PathBuf, message: String },

    /// Missing or malformed ground-truth file
    #[error("failed to read ground truth {}{}: {message}", .path.display(), line_suffix(.line))]
    DataRead {
        path: PathBuf,
        line: Option<usize>,
        message: String,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" (line {})", l)).unwrap_or_default()
}

impl Error {
    pub(crate) fn configuration(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Configuration {
            path: path.into(),
            message: message.into(),
        }
    }

    pub(crate) fn data_read(
        path: impl Into<PathBuf>,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Error::DataRead {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
