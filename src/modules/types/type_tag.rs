//! Parameter type tags as reported by the host framework

use std::fmt;
use std::str::FromStr;

/// Type tags that get a dedicated completion rule
///
/// Any other tag reported by the host is carried verbatim and completed as a
/// plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Boolean values
    Bool,
    /// One of a fixed set of strings
    Choice,
    /// A file, opened by the host
    File,
    /// A filesystem path
    Path,
    /// An integer, optionally bounded
    IntRange,
    /// A float, optionally bounded
    FloatRange,
    /// A fixed sequence of nested types
    Tuple,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => write!(f, "Bool"),
            TypeTag::Choice => write!(f, "Choice"),
            TypeTag::File => write!(f, "File"),
            TypeTag::Path => write!(f, "Path"),
            TypeTag::IntRange => write!(f, "IntRange"),
            TypeTag::FloatRange => write!(f, "FloatRange"),
            TypeTag::Tuple => write!(f, "Tuple"),
        }
    }
}

impl FromStr for TypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bool" | "boolean" => Ok(TypeTag::Bool),
            "choice" => Ok(TypeTag::Choice),
            "file" => Ok(TypeTag::File),
            "path" => Ok(TypeTag::Path),
            "intrange" => Ok(TypeTag::IntRange),
            "floatrange" => Ok(TypeTag::FloatRange),
            "tuple" => Ok(TypeTag::Tuple),
            _ => Err(format!("Unknown type tag: {}", s)),
        }
    }
}
