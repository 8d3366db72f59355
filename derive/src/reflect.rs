//! Expansion of `#[derive(Reflect)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result, parse_quote};

use crate::fields::{bounded_generics, named_fields};

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream> {
    let fields = named_fields(input)?;
    let ident = &input.ident;

    let generics = bounded_generics(&input.generics, parse_quote!(automap::Reflect));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body = if fields.is_empty() {
        quote! {
            automap::Value::Aggregate(automap::__macro_exports::Vec::new())
        }
    } else {
        let entries = fields.iter().map(|field| {
            let field_ident = field.ident.as_ref().expect("named field");
            let label = field_ident.to_string();
            quote! {
                (
                    automap::__macro_exports::Cow::Borrowed(#label),
                    automap::Reflect::to_value(&self.#field_ident),
                )
            }
        });
        quote! {
            automap::Value::Aggregate(
                <automap::__macro_exports::Vec<_>>::from([#(#entries),*]),
            )
        }
    };

    Ok(quote! {
        impl #impl_generics automap::Reflect for #ident #ty_generics #where_clause {
            fn to_value(&self) -> automap::Value {
                #body
            }
        }
    })
}
