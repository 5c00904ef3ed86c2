//! The [`Record`] trait and field metadata.
//!
//! This module provides the [`Record`] trait which is implemented by the
//! `#[derive(Record)]` macro to describe a struct's encodable columns.

use crate::error::Result;

/// Metadata for one encodable field of a record type.
///
/// Column position is the field's index in the slice returned by
/// [`Record::fields`], which follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// The field's declared name.
    pub name: &'static str,
    /// The column header label: the `#[csv(header = "...")]` override if
    /// present and non-empty, otherwise the declared name.
    pub header: &'static str,
}

/// Trait for types that can be encoded as one CSV row.
///
/// This trait is typically derived using `#[derive(Record)]`, but can also
/// be implemented manually.
///
/// # Derive Usage
///
/// ```
/// use rowcast::Record;
///
/// #[derive(Record)]
/// struct Task {
///     pub title: String,
///     #[csv(header = "Done?")]
///     pub done: bool,
///     internal: u64, // not pub: omitted from output
/// }
/// ```
///
/// Only `pub` fields are encodable; fields with any other visibility are
/// silently omitted from both the header and the data rows.
///
/// # Manual Implementation
///
/// ```
/// use rowcast::{Field, Record};
///
/// struct Task {
///     title: String,
///     done: bool,
/// }
///
/// impl Record for Task {
///     fn fields(&self) -> &'static [Field] {
///         &[
///             Field { name: "title", header: "title" },
///             Field { name: "done", header: "Done?" },
///         ]
///     }
///
///     fn cells(&self) -> rowcast::Result<Vec<String>> {
///         Ok(vec![self.title.clone(), self.done.to_string()])
///     }
/// }
/// ```
pub trait Record {
    /// Returns the encodable fields of this type, in declaration order.
    ///
    /// The same slice backs the header row and every data row of a batch.
    fn fields(&self) -> &'static [Field];

    /// Converts this record to one row of cells, in field order.
    ///
    /// On success the vector has exactly `fields().len()` entries. The only
    /// failure mode is an error from a field's [`ToCell`](crate::ToCell)
    /// hook.
    fn cells(&self) -> Result<Vec<String>>;
}

// Wrapper types forward to the wrapped record, so collections of `&T`,
// `Box<T>`, `Rc<T>`, `Arc<T>` and `Box<dyn Record>` encode like collections
// of `T`. Nested wrappers compose, one impl per layer.

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> &'static [Field] {
        (**self).fields()
    }

    fn cells(&self) -> Result<Vec<String>> {
        (**self).cells()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&self) -> &'static [Field] {
        (**self).fields()
    }

    fn cells(&self) -> Result<Vec<String>> {
        (**self).cells()
    }
}

impl<R: Record + ?Sized> Record for std::rc::Rc<R> {
    fn fields(&self) -> &'static [Field] {
        (**self).fields()
    }

    fn cells(&self) -> Result<Vec<String>> {
        (**self).cells()
    }
}

impl<R: Record + ?Sized> Record for std::sync::Arc<R> {
    fn fields(&self) -> &'static [Field] {
        (**self).fields()
    }

    fn cells(&self) -> Result<Vec<String>> {
        (**self).cells()
    }
}
