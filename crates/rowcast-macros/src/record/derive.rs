//! Code generation for the Record derive macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result, Visibility};

use super::attrs::parse_csv_attrs;

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut field_tokens: Vec<TokenStream> = Vec::new();
    let mut cell_tokens: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        // Only plain `pub` fields are encodable. Anything else is omitted
        // silently, and its #[csv] attributes are left unparsed (inert).
        if !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }

        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;
        let field_name_str = field_name.to_string();

        let csv_attrs = parse_csv_attrs(&field.attrs)?;

        // Header label: the attribute value if non-empty, else the field name
        let header = match csv_attrs.header {
            Some(h) if !h.is_empty() => h,
            _ => field_name_str.clone(),
        };

        field_tokens.push(quote! {
            ::rowcast::Field { name: #field_name_str, header: #header }
        });

        cell_tokens.push(quote! {
            (&self.#field_name)
                .to_cell_text()
                .map_err(|source| ::rowcast::EncodeError::Cell {
                    column: #field_name_str,
                    source,
                })?
        });
    }

    // Generate the impl block
    let expanded = quote! {
        impl ::rowcast::Record for #struct_name {
            fn fields(&self) -> &'static [::rowcast::Field] {
                &[
                    #(#field_tokens),*
                ]
            }

            fn cells(&self) -> ::rowcast::Result<::std::vec::Vec<::std::string::String>> {
                use ::rowcast::cell::{CellDisplay, CellOption, CellText, CellUnit};
                ::std::result::Result::Ok(::std::vec![
                    #(#cell_tokens),*
                ])
            }
        }
    };

    Ok(expanded)
}
