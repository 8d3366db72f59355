//! The two halves of the mapping contract.
//!
//! [`Reflect`] is the source half: lower a value into the tagged
//! representation. [`FromReflect`] is the target half: build a value back
//! out of a decoding context. The driver in [`crate::de`] is the only
//! place the two meet.

mod from_reflect;
mod reflect;

pub use from_reflect::FromReflect;
pub use reflect::Reflect;
