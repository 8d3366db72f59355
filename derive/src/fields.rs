//! Shared shape validation for both derives.

use syn::{Data, DeriveInput, Field, Fields, Result};

/// Returns the named fields of the deriving struct.
///
/// Unit structs yield an empty list; every other shape is rejected with a
/// spanned error explaining why it cannot participate in structural mapping.
pub(crate) fn named_fields(input: &DeriveInput) -> Result<Vec<&Field>> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "enums cannot be mapped structurally; only structs with named fields are supported",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "unions cannot be mapped structurally; only structs with named fields are supported",
            ));
        }
    };

    match &data.fields {
        Fields::Named(fields) => Ok(fields.named.iter().collect()),
        Fields::Unit => Ok(Vec::new()),
        Fields::Unnamed(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "tuple structs have no field labels to match on; \
             only structs with named fields are supported",
        )),
    }
}

/// Clones `generics` and adds `bound` to every type parameter.
pub(crate) fn bounded_generics(
    generics: &syn::Generics,
    bound: syn::TypeParamBound,
) -> syn::Generics {
    let mut generics = generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(bound.clone());
    }
    generics
}
