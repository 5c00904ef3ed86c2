//! rowcast - Struct-to-CSV encoding with derive-based column discovery.
//!
//! rowcast turns ordered collections of uniform records into delimited text:
//! a header row derived from the record type's public fields, then one row
//! per record, written incrementally to any [`std::io::Write`] destination.
//!
//! # Quick Start
//!
//! ```
//! use rowcast::{Encoder, Record};
//!
//! #[derive(Record)]
//! struct Person {
//!     #[csv(header = "Name")]
//!     pub name: String,
//!     #[csv(header = "Age")]
//!     pub age: u32,
//! }
//!
//! let people = vec![
//!     Person { name: "Bob".into(), age: 42 },
//!     Person { name: "Joe".into(), age: 17 },
//! ];
//!
//! let mut encoder = Encoder::new(Vec::new());
//! encoder.encode(&people).unwrap();
//! let out = String::from_utf8(encoder.into_inner().unwrap()).unwrap();
//! assert_eq!(out, "Name,Age\nBob,42\nJoe,17\n");
//! ```
//!
//! # Column Rules
//!
//! `#[derive(Record)]` walks the struct's fields in declaration order and
//! keeps those declared `pub`; everything else is silently omitted from
//! both header and data rows. Each column's header label is the
//! `#[csv(header = "...")]` override if present and non-empty, otherwise
//! the field's own name. The field list is computed once, at compile time,
//! and the same list backs the header row and every data row of a batch.
//!
//! # Cell Conversion
//!
//! Each field converts to its cell through a fixed-priority ladder:
//!
//! 1. A [`ToCell`] implementation on the field's type (the custom text
//!    representation hook) - its output is used verbatim, and its error
//!    aborts the encode.
//! 2. `Option<T>` - empty cell for `None`, `Display` of the value for
//!    `Some`.
//! 3. `()` - always the empty cell.
//! 4. `Display` - the default rendering for scalars, strings and the rest.
//!
//! A field type matching no branch is a compile error.
//!
//! # Wrapped Records
//!
//! Collections of `&T`, `Box<T>`, `Rc<T>`, `Arc<T>` or `Box<dyn Record>`
//! encode like collections of `T`; wrappers nest freely.
//!
//! # Runtime-Shaped Data
//!
//! Data whose shape is not known at compile time goes through
//! [`Encoder::encode_value`] (a [`serde_json::Value`] array of objects) or
//! [`Encoder::encode_serialize`] (any `Serialize` collection, bridged
//! through a JSON value). Columns come from the first element's keys in
//! insertion order.
//!
//! # Configuration
//!
//! [`EncoderBuilder`] configures the delimiter (default `,`), the line
//! ending (`\n`, or `\r\n` via [`EncoderBuilder::crlf`]) and header
//! suppression. Quoting follows standard CSV rules and is handled by the
//! underlying [`csv`] writer: cells containing the delimiter, a quote or a
//! line ending are quoted, embedded quotes doubled. For full control over
//! quoting, build a [`csv::Writer`] yourself and use
//! [`Encoder::from_csv_writer`].

pub mod cell;
mod encoder;
mod error;
mod record;
mod value;

pub use cell::ToCell;
pub use encoder::{Encoder, EncoderBuilder};
pub use error::{EncodeError, Result};
pub use record::{Field, Record};
pub use rowcast_macros::Record;
