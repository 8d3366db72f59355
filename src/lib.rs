#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macros emit paths starting with `automap::`, so the crate needs
// to be reachable under that name from its own tests and doc examples.
extern crate self as automap;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod impls;
mod reflection;

pub mod access;
pub mod de;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use automap_derive as derive;

pub use de::map;
pub use error::{MapError, MapErrorKind};
pub use reflection::{FromReflect, Reflect};
pub use value::{Atom, Value};
