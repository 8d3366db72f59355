//! The tagged value representation shared between sources and targets.
//!
//! Sources are lowered into a [`Value`] exactly once (see
//! [`Reflect`](crate::Reflect)); targets are built back out of it through
//! decoding contexts (see [`FromReflect`](crate::FromReflect)). Keeping the
//! representation in the middle means neither side ever inspects the other
//! directly.

mod atom;
mod value;

pub use atom::{Atom, AtomKind};
pub use value::{Value, ValueKind};
