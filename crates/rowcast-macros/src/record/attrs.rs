//! Attribute parsing for the Record derive macro.
//!
//! This module provides the parser for the `#[csv(...)]` field attributes
//! used by the `Record` derive macro.

use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Lit, Meta, Result, Token,
};

/// Field-level attributes from `#[csv(...)]`.
#[derive(Debug, Clone, Default)]
pub struct CsvAttr {
    /// Header label override for the column (default: field name).
    pub header: Option<String>,
}

impl Parse for CsvAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = CsvAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // header = "Custom Label"
                Meta::NameValue(nv) if nv.path.is_ident("header") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        attr.header = Some(s.value());
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "header must be a string literal",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown csv attribute. Expected: header = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Parses all `#[csv(...)]` attributes on a field into one `CsvAttr`.
///
/// Later attributes override earlier ones key by key.
pub fn parse_csv_attrs(attrs: &[Attribute]) -> Result<CsvAttr> {
    let mut result = CsvAttr::default();

    for attr in attrs {
        if !attr.path().is_ident("csv") {
            continue;
        }
        let parsed: CsvAttr = attr.parse_args()?;
        if parsed.header.is_some() {
            result.header = parsed.header;
        }
    }

    Ok(result)
}
