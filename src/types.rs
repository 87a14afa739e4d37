use thiserror::Error;

pub(crate) const CR: char = '\r';
pub(crate) const LF: char = '\n';
pub(crate) const DEFAULT_SEPARATOR: char = ',';
pub(crate) const DEFAULT_QUOTE: char = '"';

/// Generic Result type for crate operations.
pub type Result<T> = std::result::Result<T, CsvError>;

/// Errors raised while parsing, serializing, or accessing documents.
///
/// Malformed input has exactly one shape, [`CsvError::UnterminatedQuote`].
/// [`CsvError::RowIndexOutOfRange`] reports API misuse rather than bad
/// data; the remaining variants come from the file and stream adapters.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CsvError {
    /// An opening quote was never closed before the input ended.
    #[error("missing closing quote ('{0}')")]
    UnterminatedQuote(char),

    /// A row was requested at an index at or past the end of the document.
    #[error("{}", row_index_bounds(.index, .count))]
    RowIndexOutOfRange { index: usize, count: usize },

    /// The byte source did not decode as UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Encoding(String),

    /// A file could not be opened or created.
    #[error("error accessing `{path}`: {reason}")]
    FileAccess { path: String, reason: String },

    /// Reading from the underlying source failed.
    #[error("error reading from source: {0}")]
    Read(String),

    /// Writing to the underlying sink failed.
    #[error("error writing to sink: {0}")]
    Write(String),
}

fn row_index_bounds(index: &usize, count: &usize) -> String {
    match *count {
        0 => format!("row index ({index}) is invalid: the document has no rows"),
        1 => format!("row index ({index}) must be equal to 0"),
        n => format!("row index ({index}) must be between 0 and {}", n - 1),
    }
}

impl From<std::io::Error> for CsvError {
    fn from(e: std::io::Error) -> Self {
        CsvError::Read(e.to_string())
    }
}

impl From<std::fmt::Error> for CsvError {
    fn from(_: std::fmt::Error) -> Self {
        CsvError::Write("formatter refused further output".into())
    }
}
