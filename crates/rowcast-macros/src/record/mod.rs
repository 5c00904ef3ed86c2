//! Implementation of the `#[derive(Record)]` macro.
//!
//! This module turns a struct definition into its `Record` implementation,
//! resolving column membership and header labels at compile time.

mod attrs;
mod derive;

pub use derive::record_derive_impl;
