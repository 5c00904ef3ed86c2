//! Cell conversion: the [`ToCell`] hook and the fallback ladder.
//!
//! Generated `Record::cells` implementations convert each field through a
//! fixed-priority ladder, resolved per concrete field type at compile time:
//!
//! 1. [`ToCell`] — a custom text representation supplied by the field's type.
//! 2. `Option<T>` — empty cell when `None`, `Display` of the value otherwise.
//! 3. `()` — always the empty cell.
//! 4. `Display` — the default rendering for everything else.
//!
//! A field type matching none of these branches is a compile error.
//!
//! Priority between branch 1 and branch 4 uses autoref method resolution:
//! the [`CellText`] impl applies to the field type itself while the other
//! impls apply one reference deeper, so a type implementing both `ToCell`
//! and `Display` converts through its hook.

use std::fmt::Display;

/// The result of converting one field value to its cell text.
pub type CellResult = std::result::Result<String, Box<dyn std::error::Error + Send + Sync>>;

/// Custom text representation for a field type.
///
/// When a field's type implements `ToCell`, its output is used verbatim as
/// the cell content, taking priority over the `Display` fallback. A returned
/// error aborts the encode as [`EncodeError::Cell`](crate::EncodeError::Cell)
/// naming the column.
///
/// # Example
///
/// ```
/// use rowcast::ToCell;
///
/// struct Euros {
///     cents: i64,
/// }
///
/// impl ToCell for Euros {
///     fn to_cell(&self) -> rowcast::cell::CellResult {
///         Ok(format!("{}.{:02} EUR", self.cents / 100, self.cents % 100))
///     }
/// }
/// ```
pub trait ToCell {
    /// Converts this value to its cell text.
    fn to_cell(&self) -> CellResult;
}

/// Ladder branch for types with a [`ToCell`] hook.
pub trait CellText {
    fn to_cell_text(&self) -> CellResult;
}

impl<T: ToCell> CellText for T {
    fn to_cell_text(&self) -> CellResult {
        self.to_cell()
    }
}

/// Ladder branch for `Option` fields: `None` renders as the empty cell.
pub trait CellOption {
    fn to_cell_text(&self) -> CellResult;
}

impl<T: Display> CellOption for &Option<T> {
    fn to_cell_text(&self) -> CellResult {
        Ok(match self {
            Some(value) => value.to_string(),
            None => String::new(),
        })
    }
}

/// Ladder branch for unit fields, which carry no data.
pub trait CellUnit {
    fn to_cell_text(&self) -> CellResult;
}

impl CellUnit for &() {
    fn to_cell_text(&self) -> CellResult {
        Ok(String::new())
    }
}

/// Ladder branch for everything with a `Display` rendering.
pub trait CellDisplay {
    fn to_cell_text(&self) -> CellResult;
}

impl<T: Display> CellDisplay for &T {
    fn to_cell_text(&self) -> CellResult {
        Ok(self.to_string())
    }
}
