//! Serialization of rows and documents back into delimiter separated
//! text.
//!
//! The escaping core writes to any character sink ([`std::fmt::Write`])
//! and reports how many characters it emitted; [`Writer`] adapts files
//! and other byte sinks.
//!
//!  # Example (Writer):
//! ``` rs
//! fn main() {
//!     // Write to file
//!     let mut writer = dsvlib::Writer::from_path("./test.txt").unwrap();
//!
//!     let header = dsvlib::row!["Header1", "Header 2", "Header,3"];
//!     writer.write(&header).unwrap();
//!     writer
//!         .write_all(&[
//!             dsvlib::row!["entry", "entry", "entry"],
//!             dsvlib::row!["entry", "entry", "entry"],
//!         ])
//!         .unwrap();
//! }
//! ```

use std::fmt::Write as FmtWrite;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::types::LF;
use crate::{CsvError, CsvFormat, Document, Result, Row};

/// Write a single row to a character sink, returning the number of
/// characters written. No line break is appended.
///
/// A cell is quoted when it contains the separator or a line feed; inside
/// a quoted cell every occurrence of the quote character is preceded by a
/// backslash. Cells that need no quoting are emitted verbatim, so a bare
/// quote character or carriage return passes through unescaped. The
/// parser does not decode the backslash escape, which means cells
/// containing the quote character do not round-trip.
pub fn write_row<W: FmtWrite>(sink: &mut W, row: &Row, format: &CsvFormat) -> Result<usize> {
    let separator = format.cell_separator();
    let quote = format.quote();
    let mut written = 0;

    for (index, cell) in row.cells().enumerate() {
        if index > 0 {
            sink.write_char(separator)?;
            written += 1;
        }

        let needs_quotes = cell.chars().any(|c| c == separator || c == LF);
        if needs_quotes {
            sink.write_char(quote)?;
            written += 1;
            for c in cell.chars() {
                if c == quote {
                    sink.write_char('\\')?;
                    written += 1;
                }
                sink.write_char(c)?;
                written += 1;
            }
            sink.write_char(quote)?;
            written += 1;
        } else if !cell.is_empty() {
            sink.write_str(cell)?;
            written += cell.chars().count();
        }
    }

    Ok(written)
}

/// Write a whole document to a character sink, terminating every row,
/// including the last, with a line feed. Returns the number of
/// characters written.
pub fn write_document<W: FmtWrite>(
    sink: &mut W,
    document: &Document,
    format: &CsvFormat,
) -> Result<usize> {
    let mut written = 0;
    for row in document.rows() {
        written += write_row(sink, row, format)?;
        sink.write_char(LF)?;
        written += 1;
    }
    Ok(written)
}

/// Render a single row as a `String` under the given format.
pub fn row_text(row: &Row, format: &CsvFormat) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = write_row(&mut text, row, format);
    text
}

/// Render a whole document as a `String` under the given format.
pub fn document_text(document: &Document, format: &CsvFormat) -> String {
    let mut text = String::new();
    let _ = write_document(&mut text, document, format);
    text
}

/// A row writer over files and other byte sinks.
pub struct Writer<W: Write> {
    writer: BufWriter<W>,
    format: CsvFormat,
}

impl Writer<std::fs::File> {
    /// Creates a writer for the file at the given path.
    ///
    /// The comma separated format is assumed. If an alternative format is
    /// desired, please see `dsvlib::Writer::from_path(...).with_format(...)`.
    ///
    /// # Errors
    /// If the underlying file behind path is not accessible for any reason.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file_name = path.as_ref().display().to_string();
        let file = std::fs::File::create(path).map_err(|e| CsvError::FileAccess {
            path: file_name,
            reason: e.to_string(),
        })?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> Writer<W> {
    /// Initialize a writer from a `std::io::Write` implementation.
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            format: CsvFormat::COMMA_SEPARATED,
        }
    }

    /// Set the format used for every subsequently written row.
    pub fn with_format(mut self, format: CsvFormat) -> Self {
        self.format = format;
        self
    }

    /// Writes a single [`Row`], terminated by a line feed.
    pub fn write(&mut self, row: &Row) -> Result<()> {
        let mut line = row_text(row, &self.format);
        line.push(LF);
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| CsvError::Write(e.to_string()))
    }

    /// Convenient method to write several [`Row`]s at once.
    pub fn write_all(&mut self, rows: &[Row]) -> Result<()> {
        for row in rows {
            self.write(row)?;
        }
        Ok(())
    }

    /// Flush buffered output to the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| CsvError::Write(e.to_string()))
    }
}
