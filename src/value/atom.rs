use alloc::string::String;
use core::fmt;

// -----------------------------------------------------------------------------
// Atom

/// A primitive leaf value.
///
/// Integer widths are erased on lowering: every signed integer widens
/// losslessly into [`Int`](Atom::Int) and every unsigned integer into
/// [`UInt`](Atom::UInt). Decoding narrows back with a checked conversion.
///
/// [`Null`](Atom::Null) is a *present* null, lowered from `Option::None`.
/// It is distinct from an absent field, which never materializes as an
/// atom at all (see [`Value::child_by_label`](super::Value::child_by_label)).
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// The null atom.
    Null,
    Bool(bool),
    /// Any signed integer, widened to 64 bits.
    Int(i64),
    /// Any unsigned integer, widened to 64 bits.
    UInt(u64),
    /// Any floating-point number, widened to 64 bits.
    Float(f64),
    Char(char),
    Str(String),
}

impl Atom {
    /// The classification of this atom, for diagnostics.
    pub fn kind(&self) -> AtomKind {
        match self {
            Atom::Null => AtomKind::Null,
            Atom::Bool(_) => AtomKind::Bool,
            Atom::Int(_) => AtomKind::Int,
            Atom::UInt(_) => AtomKind::UInt,
            Atom::Float(_) => AtomKind::Float,
            Atom::Char(_) => AtomKind::Char,
            Atom::Str(_) => AtomKind::Str,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Atom::Null)
    }

    /// The value as `bool`, when it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Atom::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The value as `i64`, when representation-compatible.
    ///
    /// Unsigned atoms convert when their value fits; conversions are always
    /// value-preserving, never lossy.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Atom::Int(value) => Some(*value),
            Atom::UInt(value) => i64::try_from(*value).ok(),
            _ => None,
        }
    }

    /// The value as `u64`, when representation-compatible.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Atom::UInt(value) => Some(*value),
            Atom::Int(value) => u64::try_from(*value).ok(),
            _ => None,
        }
    }

    /// The value as `f64`, when it is a float.
    ///
    /// Integer atoms do not convert; crossing primitive kinds is value
    /// coercion, which structural mapping does not perform.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Atom::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The value as `char`, when it is one.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Atom::Char(value) => Some(*value),
            _ => None,
        }
    }

    /// The value as a string slice, when it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Atom::Str(value) => Some(value),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Atom kind

/// A pure classification of [`Atom`], used in cast diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomKind {
    Null,
    Bool,
    Int,
    UInt,
    Float,
    Char,
    Str,
}

impl fmt::Display for AtomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AtomKind::Null => "null",
            AtomKind::Bool => "bool",
            AtomKind::Int => "int",
            AtomKind::UInt => "uint",
            AtomKind::Float => "float",
            AtomKind::Char => "char",
            AtomKind::Str => "str",
        })
    }
}
