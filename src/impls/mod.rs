//! [`Reflect`](crate::Reflect) and [`FromReflect`](crate::FromReflect)
//! implementations for primitives and the common collection types.

mod alloc;
mod core;
#[cfg(feature = "std")]
mod std;
