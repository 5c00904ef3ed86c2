//! Proc macros for rowcast.
//!
//! This crate provides the `#[derive(Record)]` macro, which computes a
//! struct's encodable columns at compile time. Users normally depend on
//! the `rowcast` crate, which re-exports the derive.

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Record` trait for a struct with named fields.
///
/// The derive walks the struct's fields in declaration order, keeps those
/// declared `pub`, and generates:
///
/// - `fields()` - the column metadata, with each header label taken from a
///   `#[csv(header = "...")]` attribute when present and non-empty,
///   otherwise from the field's own name.
/// - `cells()` - conversion of each field to its cell text through the
///   rowcast cell ladder (`ToCell` hook, `Option`, `()`, then `Display`).
///
/// Non-`pub` fields are omitted silently; a `#[csv]` attribute on them is
/// inert.
///
/// # Example
///
/// ```ignore
/// use rowcast::Record;
///
/// #[derive(Record)]
/// struct Task {
///     pub title: String,
///     #[csv(header = "Done?")]
///     pub done: bool,
///     revision: u64, // not pub: omitted
/// }
/// ```
///
/// # Compile-Time Errors
///
/// The macro will fail to compile if:
/// - The target is not a struct with named fields
/// - A `#[csv(...)]` attribute on an encodable field has an unknown key
/// - A `header` value is not a string literal
#[proc_macro_derive(Record, attributes(csv))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
