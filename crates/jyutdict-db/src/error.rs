use std::path::{Path, PathBuf};

use jyutdict_types::EnrichmentError;
use thiserror::Error;

pub type Result<T, E = ImportError> = std::result::Result<T, E>;

/// Every way an import run can fail. All variants abort the run.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: &'static str,
    },
    #[error(transparent)]
    Enrichment(#[from] EnrichmentError),
    #[error("constraint violated on {table}: {message}")]
    Constraint { table: &'static str, message: String },
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl ImportError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ImportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, line: usize, reason: &'static str) -> Self {
        ImportError::Parse {
            path: path.to_path_buf(),
            line,
            reason,
        }
    }

    /// Map a failed insert into `table`, surfacing uniqueness violations as
    /// [`ImportError::Constraint`].
    pub(crate) fn from_insert(table: &'static str, err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                ImportError::Constraint {
                    table,
                    message: message.unwrap_or_else(|| code.to_string()),
                }
            }
            other => ImportError::Sqlite(other),
        }
    }
}
