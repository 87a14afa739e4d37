//! A simple reader/writer library for delimiter separated tabular text.
//!
//! Documents are parsed by a single-pass, character-level state machine
//! driven by a [`CsvFormat`] (cell separator plus quote character) and
//! held fully in memory as rows of cell strings.
//!
//! # Example (Writer):
//! ```no_run
//! fn main() {
//!     // Write to file
//!     let mut writer = dsvlib::Writer::from_path("./test.txt").unwrap();
//!
//!     // Create custom rows
//!     let header = dsvlib::row!["Header1", "Header 2", "Header,3"];
//!     writer.write(&header).unwrap();
//!     writer
//!         .write_all(&[
//!             dsvlib::row!["entry", "entry", "entry"],
//!             dsvlib::row!["entry", "entry", "entry"],
//!             dsvlib::row!["entry", "entry", "entry"],
//!         ])
//!         .unwrap();
//! }
//! ```
//! # Example (Reader):
//! ```no_run
//! fn main() {
//!     // Read from files
//!     let document = dsvlib::Reader::from_path("./TSLA.csv")
//!         .unwrap()
//!         .document()
//!         .unwrap();
//!
//!     // Iterate through rows
//!     for row in document.rows() {
//!         println!("{}", row);
//!     }
//! }
//! ```
//! # Example (in-memory text):
//! ```
//! use std::str::FromStr;
//!
//! let document = dsvlib::Document::from_str("a,b\n\"c,d\",e\n").unwrap();
//! assert_eq!(document.row_count(), 2);
//! assert_eq!(document.get_row(1).unwrap().get_cell(0), Some("c,d"));
//! ```

pub mod doc;
pub mod format;
pub mod reader;
pub mod writer;

mod types;

pub use doc::{Document, Row};
pub use format::CsvFormat;
pub use reader::{parse, Reader, ReaderBuilder};
pub use types::{CsvError, Result};
pub use writer::{document_text, row_text, write_document, write_row, Writer};

/// Create a [`Row`] from several cell values.
///
/// # Examples:
/// ```
/// let header = dsvlib::row!["Header 1", "Header 2", "Header 3"];
/// let entry = dsvlib::row!["This is text", 1.2, 5];
///
/// assert_eq!(header.cell_count(), 3);
/// assert_eq!(entry.get_cell(1), Some("1.2"));
/// ```
#[macro_export]
macro_rules! row {
    ($($e:expr),* $(,)?) => {
        {
            let mut row = $crate::Row::new();
            $(row.add_cell(format!("{}", $e));)*
            row
        }
    };
}
