use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

// -----------------------------------------------------------------------------
// Path segment

/// A single step within a [`CodingPath`].
///
/// # Examples
///
/// ```
/// use automap::access::PathSegment;
///
/// assert_eq!(PathSegment::key("inner").to_string(), ".inner");
/// assert_eq!(PathSegment::index(3).to_string(), "[3]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A name-based step through a keyed container: an aggregate field
    /// label or a map key.
    Key(Cow<'static, str>),
    /// A position-based step through an unkeyed container.
    Index(usize),
}

impl PathSegment {
    /// Creates a key segment.
    #[inline]
    pub fn key(key: impl Into<Cow<'static, str>>) -> Self {
        Self::Key(key.into())
    }

    /// Creates an index segment.
    #[inline]
    pub fn index(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, ".{key}"),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

// -----------------------------------------------------------------------------
// Coding path

/// An ordered sequence of segments identifying a position within the
/// target's structural schema.
///
/// A path is immutable once built: [`child`](CodingPath::child) returns a
/// new path with one segment appended, which is exactly how decoding
/// contexts derive the paths of their children. Errors carry the full path
/// up to the failure site.
///
/// # Examples
///
/// ```
/// use automap::access::{CodingPath, PathSegment};
///
/// let root = CodingPath::root();
/// let path = root
///     .child(PathSegment::key("items"))
///     .child(PathSegment::index(2));
///
/// assert_eq!(path.to_string(), ".items[2]");
/// assert_eq!(root.to_string(), "<root>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodingPath(Vec<PathSegment>);

impl CodingPath {
    /// The empty path, pointing at the root of the schema.
    #[inline]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns a new path with `segment` appended; `self` is unchanged.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend(self.0.iter().cloned());
        segments.push(segment);
        Self(segments)
    }

    /// The segments from the root down to the current position.
    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        for segment in &self.0 {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromIterator<PathSegment> for CodingPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
