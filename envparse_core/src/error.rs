use thiserror::Error;

use crate::item::RecordKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'show environment' is not implemented for {0}")]
    UnsupportedDialect(String),

    /// A line matched structurally but a numeric capture did not parse.
    #[error("malformed {field} capture {value:?} in line {line:?}")]
    MalformedCapture {
        field: &'static str,
        value: String,
        line: String,
    },

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{kind} pattern needs {expected} capture groups, found {found}")]
    CaptureCount {
        kind: RecordKind,
        expected: usize,
        found: usize,
    },
}
