//! Coding paths: where inside the target schema a decode currently is.

mod path;

pub use path::{CodingPath, PathSegment};
