//! Parsing of delimiter separated text into a [`Document`].
//!
//! The core entry point is [`parse`], which consumes any forward-only
//! source of characters exactly once. [`Reader`] adapts files and byte
//! streams by decoding them as UTF-8 before handing off.
//!
//! # Example (Reader):
//! ``` rs
//! fn main() {
//!    // Read a whole file into a document
//!    let document = dsvlib::Reader::from_path("./AAPL.csv")
//!        .unwrap()
//!        .document()
//!        .unwrap();
//!
//!    for row in document.rows() {
//!        println!("{}", row);
//!    }
//! }
//! ```

use std::io::{BufReader, Read};
use std::mem;
use std::path::Path;

use crate::types::{CR, LF};
use crate::{CsvError, CsvFormat, Document, Result, Row};

/// Parse a sequence of characters into a [`Document`].
///
/// The input is consumed in a single left-to-right pass with no lookahead
/// beyond the current character. Rows are terminated by `\n` or `\r\n`.
/// A cell whose first character is the quote character suspends separator
/// and newline handling until a later quote character switches quoting
/// off again; quote characters themselves are never part of the cell.
///
/// A `\r` directly before a `\n` is part of the row terminator and is not
/// retained; one inside quotes, before another `\r`, or ending the input
/// is kept as cell data.
///
/// # Errors
/// [`CsvError::UnterminatedQuote`] when an opening quote is never closed.
/// Every other input parses, possibly to an empty document.
///
/// # Example
/// ```
/// use dsvlib::{parse, CsvFormat, Document, Row};
///
/// let document = parse("a,b\nc".chars(), &CsvFormat::COMMA_SEPARATED).unwrap();
/// assert_eq!(
///     document,
///     Document::from_rows([Row::from_cells(["a", "b"]), Row::from_cells(["c"])])
/// );
/// ```
pub fn parse<I>(characters: I, format: &CsvFormat) -> Result<Document>
where
    I: IntoIterator<Item = char>,
{
    let separator = format.cell_separator();
    let quote = format.quote();

    let mut document = Document::new();
    let mut current_row = Row::new();
    let mut current_cell = String::new();
    let mut quoted = false;
    let mut pending_cr = false;

    for current_char in characters {
        if current_char == quote {
            // Only a quote at the very start of a cell opens quoted mode;
            // after any content it switches the mode off again.
            quoted = current_cell.is_empty();
            pending_cr = false;
        } else if current_char == CR {
            if quoted || pending_cr {
                current_cell.push(CR);
            }
            pending_cr = true;
        } else if current_char == LF {
            if quoted {
                current_cell.push(LF);
            } else {
                current_row.add_cell(mem::take(&mut current_cell));
                document.add_row(mem::take(&mut current_row));
            }
            pending_cr = false;
        } else if current_char == separator {
            if quoted {
                current_cell.push(current_char);
            } else {
                current_row.add_cell(mem::take(&mut current_cell));
            }
            pending_cr = false;
        } else {
            current_cell.push(current_char);
            pending_cr = false;
        }
    }

    if quoted {
        return Err(CsvError::UnterminatedQuote(quote));
    }
    if pending_cr {
        // The input ended on an unresolved carriage return; keep it.
        current_cell.push(CR);
    }
    if !current_cell.is_empty() || current_row.cell_count() > 0 {
        current_row.add_cell(current_cell);
    }
    if current_row.cell_count() > 0 {
        document.add_row(current_row);
    }

    Ok(document)
}

/// Reads a whole [`Document`] from files and other byte streams.
#[derive(Debug)]
pub struct Reader<R> {
    reader: BufReader<R>,
    format: CsvFormat,
}

impl Reader<std::fs::File> {
    /// Create a reader from a file path.
    ///
    /// The comma separated format is assumed. For an alternative format
    /// please see
    /// `
    /// dsvlib::Reader::builder().with_format(CsvFormat::TAB_SEPARATED);
    /// `
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file_name = path.as_ref().display().to_string();
        let file = std::fs::File::open(path).map_err(|e| CsvError::FileAccess {
            path: file_name,
            reason: e.to_string(),
        })?;

        Ok(Reader {
            reader: BufReader::new(file),
            format: CsvFormat::COMMA_SEPARATED,
        })
    }
}

impl<R> Reader<R>
where
    R: Read,
{
    /// Creates a [`ReaderBuilder`] to construct a reader.
    pub fn builder() -> ReaderBuilder<R> {
        ReaderBuilder::new()
    }

    /// Consume the entire source and parse it into a [`Document`].
    ///
    /// # Errors
    /// [`CsvError::Read`] if the source cannot be read,
    /// [`CsvError::Encoding`] if its bytes are not valid UTF-8, and any
    /// error surfaced by [`parse`].
    pub fn document(mut self) -> Result<Document> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes).map_err(|e| CsvError::Encoding(e.to_string()))?;
        parse(text.chars(), &self.format)
    }
}

/// A builder for readers over arbitrary byte streams.
pub struct ReaderBuilder<R> {
    reader: Option<R>,
    format: CsvFormat,
}

impl<R> ReaderBuilder<R> {
    /// Create a new empty ReaderBuilder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R> Default for ReaderBuilder<R> {
    fn default() -> Self {
        Self {
            reader: None,
            format: CsvFormat::COMMA_SEPARATED,
        }
    }
}

impl<R> ReaderBuilder<R>
where
    R: Read,
{
    /// Constructs a [`Reader`] from the builder.
    ///
    /// # Errors
    /// [`CsvError::Read`] if no byte source was supplied.
    ///
    /// # Examples:
    /// ```
    /// use dsvlib::{CsvFormat, Reader};
    ///
    /// let document = Reader::builder()
    ///     .with_format(CsvFormat::TAB_SEPARATED)
    ///     .with_reader(std::io::Cursor::new("a\tb\nc"))
    ///     .build()
    ///     .unwrap()
    ///     .document()
    ///     .unwrap();
    /// assert_eq!(document.row_count(), 2);
    /// ```
    pub fn build(self) -> Result<Reader<R>> {
        match self.reader {
            Some(reader) => Ok(Reader {
                reader: BufReader::new(reader),
                format: self.format,
            }),
            _ => Err(CsvError::Read(
                "cannot build a reader without a source".into(),
            )),
        }
    }

    /// Build the reader with a custom format. If not given, defaults to
    /// the comma separated format.
    pub fn with_format(mut self, format: CsvFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the byte source for this reader.
    pub fn with_reader(mut self, reader: R) -> Self {
        self.reader = Some(reader);
        self
    }
}
