//! Parameter type descriptors

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};
use zcomp_types::TypeTag;

/// Accepted value shape of one parameter
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    /// Identifying name of the type in the host framework (`text`, `choice`, ...)
    pub name: String,

    /// Shape of the accepted values
    pub kind: TypeKind,
}

/// Closed set of value shapes with a completion rule each
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Bool,
    Choice(Vec<String>),
    File,
    Path { file_okay: bool, dir_okay: bool },
    IntRange(Bounds),
    FloatRange(Bounds),
    Tuple(Vec<TypeDescriptor>),
    /// Any tag without a dedicated rule, kept verbatim
    Other(String),
}

/// Optional numeric bounds of a range type
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bounds {
    pub min: Option<Number>,
    pub min_open: bool,
    pub max: Option<Number>,
    pub max_open: bool,
}

impl Bounds {
    /// Create closed bounds
    pub fn new(min: Option<Number>, max: Option<Number>) -> Self {
        Self {
            min,
            min_open: false,
            max,
            max_open: false,
        }
    }

    /// Exclude the minimum from the range
    pub fn open_min(mut self) -> Self {
        self.min_open = true;
        self
    }

    /// Exclude the maximum from the range
    pub fn open_max(mut self) -> Self {
        self.max_open = true;
        self
    }
}

impl TypeKind {
    /// Dedicated tag of this kind, `None` for [`TypeKind::Other`]
    pub fn tag(&self) -> Option<TypeTag> {
        match self {
            TypeKind::Bool => Some(TypeTag::Bool),
            TypeKind::Choice(_) => Some(TypeTag::Choice),
            TypeKind::File => Some(TypeTag::File),
            TypeKind::Path { .. } => Some(TypeTag::Path),
            TypeKind::IntRange(_) => Some(TypeTag::IntRange),
            TypeKind::FloatRange(_) => Some(TypeTag::FloatRange),
            TypeKind::Tuple(_) => Some(TypeTag::Tuple),
            TypeKind::Other(_) => None,
        }
    }

    /// Tag as written in introspection dumps
    pub fn param_type(&self) -> String {
        match self {
            TypeKind::Other(tag) => tag.clone(),
            kind => kind.tag().map(|t| t.to_string()).unwrap_or_default(),
        }
    }
}

impl TypeDescriptor {
    /// Create a descriptor from its parts
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Free-form text
    pub fn string() -> Self {
        Self::new("text", TypeKind::Other("String".to_string()))
    }

    /// Boolean values
    pub fn boolean() -> Self {
        Self::new("boolean", TypeKind::Bool)
    }

    /// One of the given strings
    pub fn choice<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            "choice",
            TypeKind::Choice(choices.into_iter().map(Into::into).collect()),
        )
    }

    /// A file opened by the host
    pub fn file() -> Self {
        Self::new("filename", TypeKind::File)
    }

    /// A filesystem path
    pub fn path(file_okay: bool, dir_okay: bool) -> Self {
        Self::new(
            "path",
            TypeKind::Path {
                file_okay,
                dir_okay,
            },
        )
    }

    /// A bounded integer
    pub fn int_range(bounds: Bounds) -> Self {
        Self::new("integer range", TypeKind::IntRange(bounds))
    }

    /// A bounded float
    pub fn float_range(bounds: Bounds) -> Self {
        Self::new("float range", TypeKind::FloatRange(bounds))
    }

    /// A fixed sequence of types; the name lists the element names
    pub fn tuple(types: Vec<TypeDescriptor>) -> Self {
        let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();
        let name = format!("<{}>", names.join(" "));
        Self::new(name, TypeKind::Tuple(types))
    }

    /// Returns true for tuple types
    pub fn is_tuple(&self) -> bool {
        matches!(self.kind, TypeKind::Tuple(_))
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("param_type", &self.kind.param_type())?;
        map.serialize_entry("name", &self.name)?;
        match &self.kind {
            TypeKind::Choice(choices) => map.serialize_entry("choices", choices)?,
            TypeKind::Path {
                file_okay,
                dir_okay,
            } => {
                map.serialize_entry("file_okay", file_okay)?;
                map.serialize_entry("dir_okay", dir_okay)?;
            }
            TypeKind::IntRange(bounds) | TypeKind::FloatRange(bounds) => {
                map.serialize_entry("min", &bounds.min)?;
                map.serialize_entry("min_open", &bounds.min_open)?;
                map.serialize_entry("max", &bounds.max)?;
                map.serialize_entry("max_open", &bounds.max_open)?;
            }
            TypeKind::Tuple(types) => map.serialize_entry("types", types)?,
            TypeKind::Bool | TypeKind::File | TypeKind::Other(_) => {}
        }
        map.end()
    }
}

/// Render a default value the way completion messages show it
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Object(_) => value.to_string(),
    }
}
