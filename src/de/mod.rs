//! Decoding contexts, the container trio, and the mapping driver.
//!
//! A [`DecodeContext`] pairs a reflected source value with the coding path
//! of the target position being built. Target types ask the context for
//! one of three container shapes:
//!
//! - [`KeyedDecoder`]: named access, backed by an aggregate's field labels
//!   or a map's string keys.
//! - [`UnkeyedDecoder`]: positional access with a monotonic cursor.
//! - [`SingleValueDecoder`]: a leaf atom.
//!
//! [`map`] is the sole entry point tying everything together.

mod context;
mod driver;
mod keyed;
mod single_value;
mod unkeyed;

pub use context::DecodeContext;
pub use driver::map;
pub use keyed::KeyedDecoder;
pub use single_value::SingleValueDecoder;
pub use unkeyed::UnkeyedDecoder;
