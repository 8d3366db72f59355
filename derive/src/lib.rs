//! Derive macros for the `automap` structural mapper.
//!
//! See:
//!
//! - [`Reflect`]: lowers a struct into the tagged value representation.
//! - [`FromReflect`]: builds a struct back out of a decoding context.
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

// -----------------------------------------------------------------------------
// Modules

mod fields;
mod from_reflect;
mod reflect;

// -----------------------------------------------------------------------------
// Macros

/// Implements `automap::Reflect` for a struct with named fields (or a unit
/// struct), lowering it to an aggregate whose labels are the field names in
/// declaration order.
///
/// Tuple structs and enums are rejected: structural mapping matches fields
/// by label, and those shapes have none.
///
/// # Example
///
/// ```rust, ignore
/// use automap::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Account {
///     id: u64,
///     owner: String,
/// }
/// ```
///
/// Every field type must implement `automap::Reflect` itself; generic type
/// parameters receive that bound automatically.
#[proc_macro_derive(Reflect)]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    reflect::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implements `automap::FromReflect` for a struct with named fields (or a
/// unit struct).
///
/// The generated implementation requests a keyed container and decodes each
/// field by its own name. Absent source fields go through
/// `FromReflect::from_absent`, so `Option<T>` fields of the target absorb
/// missing source fields as `None` while all other field types report a
/// missing-field error.
///
/// # Example
///
/// ```rust, ignore
/// use automap::derive::FromReflect;
///
/// #[derive(FromReflect)]
/// struct AccountView {
///     id: u64,
///     owner: Option<String>,
/// }
/// ```
#[proc_macro_derive(FromReflect)]
pub fn derive_from_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    from_reflect::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
