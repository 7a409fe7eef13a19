//! Option and argument descriptors

use serde::{Serialize, Serializer};

use super::{Documented, TypeDescriptor};
use crate::error::ZcompError;

/// One option or positional argument of a command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Name of the parameter (the destination variable in the host)
    pub name: String,

    /// Option or argument specifics
    #[serde(flatten)]
    pub kind: ParamKind,

    /// Accepted value shape
    #[serde(rename = "type")]
    pub value_type: TypeDescriptor,

    /// Default value, if any
    pub default: Option<serde_json::Value>,

    /// Human-readable help text
    pub help: Option<String>,
}

/// Kind of parameter, tagged as `param_type_name` in dumps
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "param_type_name", rename_all = "lowercase")]
pub enum ParamKind {
    Option(OptionSpec),
    Argument(ArgumentSpec),
}

/// Invocation details of an option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    /// Primary invocation strings (`-v`, `--verbose`)
    pub opts: Vec<String>,

    /// Secondary invocation strings (`--no-shout`)
    pub secondary_opts: Vec<String>,

    /// Takes no value
    pub is_flag: bool,

    /// Takes no value and may repeat
    pub count: bool,

    /// May be given more than once
    pub multiple: bool,

    /// Values consumed per occurrence
    pub nargs: u32,
}

/// Arity of a positional argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentSpec {
    pub nargs: Arity,
}

/// Number of words a positional argument consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(u32),
    /// All remaining words
    Variadic,
}

impl Arity {
    /// Dump encoding of [`Arity::Variadic`]
    pub const VARIADIC: i64 = -1;

    pub fn is_variadic(&self) -> bool {
        matches!(self, Arity::Variadic)
    }

    /// Dump encoding of this arity
    pub fn as_i64(&self) -> i64 {
        match self {
            Arity::Fixed(n) => i64::from(*n),
            Arity::Variadic => Self::VARIADIC,
        }
    }
}

impl TryFrom<i64> for Arity {
    type Error = ZcompError;

    fn try_from(nargs: i64) -> Result<Self, Self::Error> {
        if nargs == Self::VARIADIC {
            return Ok(Arity::Variadic);
        }
        u32::try_from(nargs)
            .map(Arity::Fixed)
            .map_err(|_| ZcompError::Contract(format!("Invalid argument arity: {}", nargs)))
    }
}

impl Serialize for Arity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

impl OptionSpec {
    /// Primary then secondary invocation strings
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        self.opts
            .iter()
            .chain(self.secondary_opts.iter())
            .map(String::as_str)
    }

    /// Number of invocation strings
    pub fn name_count(&self) -> usize {
        self.opts.len() + self.secondary_opts.len()
    }

    /// Flags and counters take no value
    pub fn takes_value(&self) -> bool {
        !(self.is_flag || self.count)
    }

    /// May appear more than once on the command line
    pub fn repeatable(&self) -> bool {
        self.multiple || self.count
    }
}

impl Parameter {
    /// Create a single-valued text option
    pub fn option<I, S>(name: impl Into<String>, opts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: ParamKind::Option(OptionSpec {
                opts: opts.into_iter().map(Into::into).collect(),
                secondary_opts: Vec::new(),
                is_flag: false,
                count: false,
                multiple: false,
                nargs: 1,
            }),
            value_type: TypeDescriptor::string(),
            default: None,
            help: None,
        }
    }

    /// Create a required single-word text argument
    pub fn argument(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Argument(ArgumentSpec {
                nargs: Arity::Fixed(1),
            }),
            value_type: TypeDescriptor::string(),
            default: None,
            help: None,
        }
    }

    /// The conventional `--help` flag
    pub fn help_option() -> Self {
        Self::option("help", ["--help"])
            .flag()
            .with_help("Show this message and exit.")
    }

    /// Add secondary (negating) invocation strings; options only
    pub fn with_secondary_opts<I, S>(mut self, secondary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let ParamKind::Option(spec) = &mut self.kind {
            spec.secondary_opts
                .extend(secondary.into_iter().map(Into::into));
        }
        self
    }

    /// Make this option a boolean flag
    pub fn flag(mut self) -> Self {
        if let ParamKind::Option(spec) = &mut self.kind {
            spec.is_flag = true;
            self.value_type = TypeDescriptor::boolean();
        }
        self
    }

    /// Make this option a repeatable counter
    pub fn counter(mut self) -> Self {
        if let ParamKind::Option(spec) = &mut self.kind {
            spec.count = true;
        }
        self
    }

    /// Allow this option more than once
    pub fn multiple(mut self) -> Self {
        if let ParamKind::Option(spec) = &mut self.kind {
            spec.multiple = true;
        }
        self
    }

    /// Set the number of values per occurrence
    ///
    /// For arguments this sets a fixed arity.
    pub fn with_nargs(mut self, nargs: u32) -> Self {
        match &mut self.kind {
            ParamKind::Option(spec) => spec.nargs = nargs,
            ParamKind::Argument(spec) => spec.nargs = Arity::Fixed(nargs),
        }
        self
    }

    /// Make this argument consume all remaining words
    pub fn variadic(mut self) -> Self {
        if let ParamKind::Argument(spec) = &mut self.kind {
            spec.nargs = Arity::Variadic;
        }
        self
    }

    /// Set the value type
    pub fn with_type(mut self, value_type: TypeDescriptor) -> Self {
        self.value_type = value_type;
        self
    }

    /// Set the default value
    pub fn with_default(mut self, default: impl Into<serde_json::Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn as_option(&self) -> Option<&OptionSpec> {
        match &self.kind {
            ParamKind::Option(spec) => Some(spec),
            ParamKind::Argument(_) => None,
        }
    }

    pub fn as_argument(&self) -> Option<&ArgumentSpec> {
        match &self.kind {
            ParamKind::Argument(spec) => Some(spec),
            ParamKind::Option(_) => None,
        }
    }
}

impl Documented for Parameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}
