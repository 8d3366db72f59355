//! Expansion of `#[derive(FromReflect)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result, parse_quote};

use crate::fields::{bounded_generics, named_fields};

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream> {
    let fields = named_fields(input)?;
    let ident = &input.ident;

    let generics = bounded_generics(&input.generics, parse_quote!(automap::FromReflect));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body = if fields.is_empty() {
        quote! {
            let _ = ctx;
            ::core::result::Result::Ok(Self {})
        }
    } else {
        let bindings = fields.iter().map(|field| {
            let field_ident = field.ident.as_ref().expect("named field");
            let label = field_ident.to_string();
            quote! { #field_ident: keyed.decode(#label)? }
        });
        quote! {
            let keyed = ctx.keyed();
            ::core::result::Result::Ok(Self { #(#bindings),* })
        }
    };

    Ok(quote! {
        impl #impl_generics automap::FromReflect for #ident #ty_generics #where_clause {
            fn from_reflect(
                ctx: &automap::de::DecodeContext<'_>,
            ) -> ::core::result::Result<Self, automap::MapError> {
                #body
            }
        }
    })
}
