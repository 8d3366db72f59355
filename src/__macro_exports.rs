//! Re-exports used by the code generated in [`automap_derive`].
//!
//! Generated code needs stable paths to `alloc` types without assuming
//! anything about the user crate's own `extern crate` setup. Nothing in
//! here is public API.
//!
//! [`automap_derive`]: crate::derive

pub use alloc::borrow::Cow;
pub use alloc::vec::Vec;
