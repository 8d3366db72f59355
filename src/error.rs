use alloc::borrow::{Cow, ToOwned};
use core::fmt;
use core::panic::Location;

use crate::access::CodingPath;
use crate::value::{AtomKind, ValueKind};

// -----------------------------------------------------------------------------
// Error kind

/// An enumeration of all failure outcomes of a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapErrorKind {
    /// A required key was requested but the source has no such label.
    MissingField { key: Cow<'static, str> },
    /// The source shape disagrees with the shape the target requested.
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },
    /// An unkeyed container was read past its element count.
    IndexOutOfRange { index: usize, count: usize },
    /// The container variant does not support the requested operation.
    UnsupportedOperation { op: &'static str },
    /// A leaf atom is not representation-compatible with the requested
    /// primitive type.
    InvalidCast {
        from: AtomKind,
        to: &'static str,
    },
}

impl fmt::Display for MapErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { key } => {
                write!(f, "missing field `{key}`")
            }
            Self::TypeMismatch { expected, actual } => {
                write!(f, "expected {expected}-shaped value, found {actual}")
            }
            Self::IndexOutOfRange { index, count } => {
                write!(f, "index {index} out of range for a container of {count} elements")
            }
            Self::UnsupportedOperation { op } => {
                write!(f, "`{op}` is not supported by this container")
            }
            Self::InvalidCast { from, to } => {
                write!(f, "cannot cast a {from} atom to `{to}`")
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Error

/// The error returned by a failed [`map`](crate::map) call.
///
/// Carries the failure [kind](MapErrorKind), the full [`CodingPath`] down to
/// the failure site, and the `file:line` location where the error was
/// raised. The location is diagnostic only and excluded from equality.
///
/// All errors abort the current mapping; no local recovery is attempted and
/// no partial target value is produced.
///
/// # Examples
///
/// ```
/// use automap::{map, MapErrorKind};
/// use automap::derive::{FromReflect, Reflect};
///
/// #[derive(Reflect)]
/// struct Source { id: i64 }
///
/// #[derive(Debug, FromReflect)]
/// struct Target { id: i64, name: String }
///
/// let error = map::<_, Target>(&Source { id: 1 }).unwrap_err();
/// assert!(matches!(error.kind(), MapErrorKind::MissingField { .. }));
/// assert_eq!(error.path().to_string(), ".name");
/// ```
#[derive(Debug, Clone)]
pub struct MapError {
    kind: MapErrorKind,
    path: CodingPath,
    location: &'static Location<'static>,
}

impl MapError {
    #[inline]
    #[track_caller]
    pub fn new(kind: MapErrorKind, path: CodingPath) -> Self {
        Self {
            kind,
            path,
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub fn missing_field(path: CodingPath, key: &str) -> Self {
        Self::new(
            MapErrorKind::MissingField {
                key: Cow::Owned(key.to_owned()),
            },
            path,
        )
    }

    #[track_caller]
    pub fn type_mismatch(path: CodingPath, expected: ValueKind, actual: ValueKind) -> Self {
        Self::new(MapErrorKind::TypeMismatch { expected, actual }, path)
    }

    #[track_caller]
    pub fn index_out_of_range(path: CodingPath, index: usize, count: usize) -> Self {
        Self::new(MapErrorKind::IndexOutOfRange { index, count }, path)
    }

    #[track_caller]
    pub fn unsupported(path: CodingPath, op: &'static str) -> Self {
        Self::new(MapErrorKind::UnsupportedOperation { op }, path)
    }

    #[track_caller]
    pub fn invalid_cast(path: CodingPath, from: AtomKind, to: &'static str) -> Self {
        Self::new(MapErrorKind::InvalidCast { from, to }, path)
    }

    /// The failure taxonomy entry.
    #[inline]
    pub fn kind(&self) -> &MapErrorKind {
        &self.kind
    }

    /// The coding path from the schema root down to the failure site.
    #[inline]
    pub fn path(&self) -> &CodingPath {
        &self.path
    }

    /// Where the error was raised. Diagnostic only; not part of equality.
    #[inline]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl PartialEq for MapError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.path == other.path
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.path)
    }
}

impl core::error::Error for MapError {}
