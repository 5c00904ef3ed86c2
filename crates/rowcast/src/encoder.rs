//! The [`Encoder`] facade and its configuration builder.

use std::io::Write;

use csv::Terminator;

use crate::error::Result;
use crate::record::Record;

/// Encodes collections of records as delimited text.
///
/// The encoder writes a header row derived from the first record's field
/// list (unless suppressed), then one row per record, and flushes the
/// destination when done. It holds no state between calls besides its
/// configuration, so one encoder can serve many batches.
///
/// # Example
///
/// ```
/// use rowcast::{Encoder, Record};
///
/// #[derive(Record)]
/// struct Person {
///     #[csv(header = "Name")]
///     pub name: String,
///     #[csv(header = "Age")]
///     pub age: u32,
/// }
///
/// let people = vec![
///     Person { name: "Bob".into(), age: 42 },
///     Person { name: "Joe".into(), age: 17 },
/// ];
///
/// let mut encoder = Encoder::new(Vec::new());
/// encoder.encode(&people).unwrap();
/// let out = encoder.into_inner().unwrap();
/// assert_eq!(out, b"Name,Age\nBob,42\nJoe,17\n");
/// ```
pub struct Encoder<W: Write> {
    pub(crate) writer: csv::Writer<W>,
    pub(crate) skip_header: bool,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder with default configuration: comma delimiter,
    /// `\n` line endings, header row enabled.
    pub fn new(dest: W) -> Self {
        EncoderBuilder::new().from_writer(dest)
    }

    /// Creates an encoder around a pre-configured [`csv::Writer`].
    ///
    /// Delimiter, line terminator and quoting rules are whatever the given
    /// writer was built with.
    pub fn from_csv_writer(writer: csv::Writer<W>) -> Self {
        Encoder {
            writer,
            skip_header: false,
        }
    }

    /// Suppresses or re-enables the header row for subsequent calls.
    pub fn set_skip_header(&mut self, skip: bool) {
        self.skip_header = skip;
    }

    /// Encodes a collection of records, writing a header row followed by
    /// one row per record, then flushes the destination.
    ///
    /// The field list is read once, from the first record, and reused for
    /// the whole batch. An empty collection writes nothing, not even the
    /// header. Write and flush errors propagate immediately; output already
    /// at the destination stays.
    pub fn encode<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Record,
    {
        let mut records = records.into_iter();
        let first = match records.next() {
            Some(first) => first,
            None => {
                self.writer.flush()?;
                return Ok(());
            }
        };

        if !self.skip_header {
            let fields = first.fields();
            self.writer.write_record(fields.iter().map(|f| f.header))?;
        }

        self.writer.write_record(&first.cells()?)?;
        for record in records {
            self.writer.write_record(&record.cells()?)?;
        }

        self.writer.flush()?;
        Ok(())
    }

    /// Flushes any buffered output to the destination.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the destination stream.
    ///
    /// The encoder never closes the stream; its lifecycle stays with the
    /// caller.
    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|err| {
            crate::error::EncodeError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                err.to_string(),
            ))
        })
    }
}

/// Builder for [`Encoder`] configuration.
///
/// # Example
///
/// ```
/// use rowcast::EncoderBuilder;
///
/// let encoder = EncoderBuilder::new()
///     .delimiter(b';')
///     .crlf(true)
///     .skip_header(true)
///     .from_writer(Vec::new());
/// # let _ = encoder;
/// ```
#[derive(Debug, Clone)]
pub struct EncoderBuilder {
    delimiter: u8,
    crlf: bool,
    skip_header: bool,
}

impl EncoderBuilder {
    /// Creates a builder with default settings: comma delimiter, `\n`
    /// line endings, header row enabled.
    pub fn new() -> Self {
        EncoderBuilder {
            delimiter: b',',
            crlf: false,
            skip_header: false,
        }
    }

    /// Sets the cell delimiter (default: `,`).
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Uses `\r\n` line endings instead of `\n`.
    pub fn crlf(mut self, crlf: bool) -> Self {
        self.crlf = crlf;
        self
    }

    /// Suppresses the header row.
    pub fn skip_header(mut self, skip: bool) -> Self {
        self.skip_header = skip;
        self
    }

    /// Builds an [`Encoder`] writing to the given destination.
    pub fn from_writer<W: Write>(self, dest: W) -> Encoder<W> {
        let terminator = if self.crlf {
            Terminator::CRLF
        } else {
            Terminator::Any(b'\n')
        };
        let writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(terminator)
            .from_writer(dest);
        Encoder {
            writer,
            skip_header: self.skip_header,
        }
    }
}

impl Default for EncoderBuilder {
    fn default() -> Self {
        EncoderBuilder::new()
    }
}
