//! Introspection dump parser

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::str::FromStr;
use tracing::debug;
use zcomp_core::{
    ArgumentSpec, Arity, Bounds, CommandNode, Introspection, OptionSpec, ParamKind, Parameter,
    TypeDescriptor, TypeKind, ZcompError,
};
use zcomp_types::TypeTag;

/// Parser for introspection dumps (JSON or YAML)
pub struct DumpParser;

/// Dump as produced by the host: root command plus its context settings.
#[derive(Debug, Deserialize)]
struct RawInfo {
    command: RawCommand,

    #[serde(default = "default_true")]
    allow_interspersed_args: bool,
}

#[derive(Debug, Deserialize)]
struct RawCommand {
    name: String,

    #[serde(default)]
    help: Option<String>,

    #[serde(default)]
    short_help: Option<String>,

    #[serde(default)]
    params: Vec<RawParam>,

    /// Only present on command groups.
    #[serde(default)]
    commands: Option<IndexMap<String, RawCommand>>,
}

#[derive(Debug, Deserialize)]
struct RawParam {
    name: String,

    param_type_name: String,

    #[serde(default)]
    opts: Vec<String>,

    #[serde(default)]
    secondary_opts: Vec<String>,

    /// Missing type means plain text.
    #[serde(rename = "type", default)]
    value_type: Option<RawType>,

    /// Missing means one value.
    #[serde(default)]
    nargs: Option<serde_json::Value>,

    #[serde(default)]
    multiple: bool,

    #[serde(default)]
    default: Option<serde_json::Value>,

    #[serde(default)]
    help: Option<String>,

    #[serde(default)]
    is_flag: bool,

    #[serde(default)]
    count: bool,
}

#[derive(Debug, Deserialize)]
struct RawType {
    param_type: String,

    #[serde(default)]
    name: Option<String>,

    /// Hosts may declare non-string choices; they are completed by their text.
    #[serde(default)]
    choices: Vec<serde_json::Value>,

    #[serde(default = "default_true")]
    file_okay: bool,

    #[serde(default = "default_true")]
    dir_okay: bool,

    #[serde(default)]
    min: Option<serde_json::Number>,

    #[serde(default)]
    min_open: bool,

    #[serde(default)]
    max: Option<serde_json::Number>,

    #[serde(default)]
    max_open: bool,

    #[serde(default)]
    types: Vec<RawType>,
}

fn default_true() -> bool {
    true
}

impl DumpParser {
    /// Parse a dump into an introspection root
    ///
    /// A document with a top-level `command` key is the full
    /// `{"command": ..., "allow_interspersed_args": ...}` form; any other
    /// document is a bare root command.
    pub fn parse(content: &str) -> Result<Introspection, ZcompError> {
        let document: serde_json::Value = Self::deserialize(content)?;

        if document.get("command").is_some() {
            return info_to_introspection(Self::deserialize::<RawInfo>(content)?);
        }

        debug!("Dump has no context wrapper, reading it as a bare command");
        let command = Self::deserialize::<RawCommand>(content)?;
        Ok(Introspection::new(command_to_node(command)?))
    }

    fn deserialize<T: DeserializeOwned>(content: &str) -> Result<T, ZcompError> {
        if content.trim_start().starts_with('{') {
            serde_json::from_str(content)
                .map_err(|e| ZcompError::Config(format!("JSON parse error: {}", e)))
        } else {
            serde_yaml::from_str(content)
                .map_err(|e| ZcompError::Config(format!("YAML parse error: {}", e)))
        }
    }
}

fn info_to_introspection(info: RawInfo) -> Result<Introspection, ZcompError> {
    let command = command_to_node(info.command)?;
    Ok(Introspection::new(command).with_interspersed_args(info.allow_interspersed_args))
}

fn command_to_node(raw: RawCommand) -> Result<CommandNode, ZcompError> {
    let mut params: Vec<Parameter> = Vec::with_capacity(raw.params.len());
    for param in raw.params {
        params.push(param_to_parameter(param, &raw.name)?);
    }

    let commands = match raw.commands {
        None => None,
        Some(commands) => {
            let mut nodes = IndexMap::with_capacity(commands.len());
            for (name, command) in commands {
                nodes.insert(name, command_to_node(command)?);
            }
            Some(nodes)
        }
    };

    Ok(CommandNode {
        name: raw.name,
        help: raw.help,
        short_help: raw.short_help,
        params,
        commands,
    })
}

fn param_to_parameter(raw: RawParam, command: &str) -> Result<Parameter, ZcompError> {
    let nargs = match &raw.nargs {
        None => 1,
        Some(value) => value.as_i64().ok_or_else(|| {
            ZcompError::Contract(format!(
                "Parameter '{}' of '{}' has non-integer nargs {}",
                raw.name, command, value
            ))
        })?,
    };

    let kind = match raw.param_type_name.as_str() {
        "option" => {
            let nargs = u32::try_from(nargs).map_err(|_| {
                ZcompError::Contract(format!(
                    "Option '{}' of '{}' has invalid nargs {}",
                    raw.name, command, nargs
                ))
            })?;
            ParamKind::Option(OptionSpec {
                opts: raw.opts,
                secondary_opts: raw.secondary_opts,
                is_flag: raw.is_flag,
                count: raw.count,
                multiple: raw.multiple,
                nargs,
            })
        }
        "argument" => ParamKind::Argument(ArgumentSpec {
            nargs: Arity::try_from(nargs)?,
        }),
        other => {
            return Err(ZcompError::Contract(format!(
                "Unexpected param_type_name '{}' for '{}' in '{}'",
                other, raw.name, command
            )))
        }
    };

    let value_type = match raw.value_type {
        Some(value_type) => type_to_descriptor(value_type),
        None => TypeDescriptor::string(),
    };

    Ok(Parameter {
        name: raw.name,
        kind,
        value_type,
        default: raw.default.filter(is_present),
        help: raw.help,
    })
}

fn type_to_descriptor(raw: RawType) -> TypeDescriptor {
    let name = raw
        .name
        .unwrap_or_else(|| raw.param_type.to_lowercase());

    let kind = match TypeTag::from_str(&raw.param_type) {
        Ok(TypeTag::Bool) => TypeKind::Bool,
        Ok(TypeTag::Choice) => TypeKind::Choice(
            raw.choices.into_iter().filter_map(scalar_to_string).collect(),
        ),
        Ok(TypeTag::File) => TypeKind::File,
        Ok(TypeTag::Path) => TypeKind::Path {
            file_okay: raw.file_okay,
            dir_okay: raw.dir_okay,
        },
        Ok(TypeTag::IntRange) => TypeKind::IntRange(Bounds {
            min: raw.min,
            min_open: raw.min_open,
            max: raw.max,
            max_open: raw.max_open,
        }),
        Ok(TypeTag::FloatRange) => TypeKind::FloatRange(Bounds {
            min: raw.min,
            min_open: raw.min_open,
            max: raw.max,
            max_open: raw.max_open,
        }),
        Ok(TypeTag::Tuple) => {
            TypeKind::Tuple(raw.types.into_iter().map(type_to_descriptor).collect())
        }
        Err(_) => TypeKind::Other(raw.param_type),
    };

    TypeDescriptor { name, kind }
}

/// `null` and empty sequences mean "no default"
fn is_present(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

fn scalar_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::String(s) => Some(s),
        // For non-scalars (seq/map), just serialize them.
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse_value(dump: serde_json::Value) -> Result<Introspection, ZcompError> {
        DumpParser::parse(&dump.to_string())
    }

    #[test]
    fn test_parse_minimal_dump() {
        let dump = r#"{"command": {"name": "cli", "params": []}}"#;
        let info = DumpParser::parse(dump).unwrap();
        assert_eq!(info.name(), "cli");
        assert!(info.allow_interspersed_args);
        assert!(!info.command.is_group());
    }

    #[test]
    fn test_parse_full_dump() {
        let dump = r#"
{
  "command": {
    "name": "cli",
    "help": "Dummy command for testing.",
    "params": [
      {
        "name": "verbose",
        "param_type_name": "option",
        "opts": ["-v", "--verbose"],
        "secondary_opts": [],
        "type": {"param_type": "Int", "name": "integer"},
        "required": false,
        "nargs": 0,
        "multiple": false,
        "default": 0,
        "envvar": null,
        "help": "Increase verbosity.",
        "is_flag": false,
        "count": true
      },
      {
        "name": "help",
        "param_type_name": "option",
        "opts": ["--help"],
        "secondary_opts": [],
        "type": {"param_type": "Bool", "name": "boolean"},
        "nargs": 1,
        "multiple": false,
        "default": false,
        "help": "Show this message and exit.",
        "is_flag": true,
        "count": false
      }
    ],
    "commands": {
      "sync": {"name": "sync", "params": [
        {"name": "src", "param_type_name": "argument", "nargs": -1,
         "type": {"param_type": "Path", "name": "path", "file_okay": false, "dir_okay": true}}
      ]},
      "add": {"name": "add", "short_help": "Add things.", "params": []}
    }
  },
  "allow_interspersed_args": false
}
"#;
        let info = DumpParser::parse(dump).unwrap();
        assert!(!info.allow_interspersed_args);

        let root = &info.command;
        assert_eq!(root.params.len(), 2);
        let verbose = root.params[0].as_option().unwrap();
        assert!(verbose.count);
        assert_eq!(root.params[0].default, Some(json!(0)));
        assert_eq!(root.params[1].value_type, TypeDescriptor::boolean());

        let names: Vec<&str> = root.subcommands().map(|(name, _)| name).collect();
        assert_eq!(names, ["sync", "add"]);

        let sync = root.find_command("sync").unwrap();
        assert_eq!(
            sync.params[0].as_argument().unwrap().nargs,
            Arity::Variadic
        );
        assert_eq!(
            sync.params[0].value_type.kind,
            TypeKind::Path {
                file_okay: false,
                dir_okay: true
            }
        );
        assert_eq!(
            root.find_command("add").unwrap().short_help.as_deref(),
            Some("Add things.")
        );
    }

    #[test]
    fn test_parse_yaml_dump() {
        let yaml = r#"
command:
  name: cli
  params:
    - name: hour
      param_type_name: argument
      nargs: 1
      type:
        param_type: IntRange
        name: integer range
        min: 0
        max: 24
        max_open: true
    - name: item
      param_type_name: option
      opts: [--item]
      type:
        param_type: Tuple
        name: <text integer>
        types:
          - {param_type: String, name: text}
          - {param_type: Int, name: integer}
allow_interspersed_args: true
"#;
        let info = DumpParser::parse(yaml).unwrap();
        let hour = &info.command.params[0].value_type;
        assert_eq!(
            hour.kind,
            TypeKind::IntRange(Bounds::new(Some(0.into()), Some(24.into())).open_max())
        );

        let item = &info.command.params[1].value_type;
        match &item.kind {
            TypeKind::Tuple(types) => {
                assert_eq!(types.len(), 2);
                assert_eq!(types[1].kind, TypeKind::Other("Int".to_string()));
                assert_eq!(types[1].name, "integer");
            }
            other => panic!("expected tuple, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bare_command() {
        let yaml = "name: tool\nparams: []\n";
        let info = DumpParser::parse(yaml).unwrap();
        assert_eq!(info.name(), "tool");
        assert!(info.allow_interspersed_args);
    }

    #[test]
    fn test_choices_are_stringified() {
        let info = parse_value(json!({
            "command": {"name": "cli", "params": [{
                "name": "level", "param_type_name": "option", "opts": ["--level"],
                "type": {"param_type": "Choice", "name": "choice", "choices": ["low", 2, true]}
            }]}
        }))
        .unwrap();
        assert_eq!(
            info.command.params[0].value_type.kind,
            TypeKind::Choice(vec!["low".into(), "2".into(), "true".into()])
        );
    }

    #[test]
    fn test_null_and_empty_defaults_are_absent() {
        let info = parse_value(json!({
            "command": {"name": "cli", "params": [
                {"name": "a", "param_type_name": "argument", "default": null},
                {"name": "b", "param_type_name": "option", "opts": ["-b"], "multiple": true, "default": []},
                {"name": "c", "param_type_name": "option", "opts": ["-c"], "default": "x"}
            ]}
        }))
        .unwrap();
        let params = &info.command.params;
        assert_eq!(params[0].default, None);
        assert_eq!(params[1].default, None);
        assert_eq!(params[2].default, Some(json!("x")));
    }

    #[test]
    fn test_unknown_param_kind_is_contract_violation() {
        let result = parse_value(json!({
            "command": {"name": "cli", "params": [
                {"name": "x", "param_type_name": "flag"}
            ]}
        }));
        assert!(matches!(result, Err(ZcompError::Contract(_))));
    }

    #[test]
    fn test_variadic_option_is_contract_violation() {
        let result = parse_value(json!({
            "command": {"name": "cli", "params": [
                {"name": "x", "param_type_name": "option", "opts": ["-x"], "nargs": -1}
            ]}
        }));
        assert!(matches!(result, Err(ZcompError::Contract(_))));
    }

    #[test]
    fn test_bad_param_field_is_reported() {
        let dump = r#"{
  "command": {"name": "cli", "params": [
    {"name": "x", "param_type_name": "argument", "nargs": "two"}
  ]}
}"#;
        let err = DumpParser::parse(dump).unwrap_err();
        assert!(matches!(err, ZcompError::Contract(_)));
        let message = err.to_string();
        assert!(message.contains("nargs \"two\""), "{}", message);
        assert!(!message.contains("missing field"), "{}", message);
    }

    #[test]
    fn test_full_dump_errors_are_not_masked() {
        let dump = r#"{"command": {"name": "cli", "params": [{"name": "x"}]}}"#;
        let err = DumpParser::parse(dump).unwrap_err();
        assert!(matches!(err, ZcompError::Config(_)));
        assert!(err.to_string().contains("missing field `param_type_name`"), "{}", err);
    }

    #[test]
    fn test_parse_invalid_dump() {
        assert!(DumpParser::parse("invalid: yaml: content: [").is_err());
        assert!(DumpParser::parse("{\"command\": ").is_err());
    }
}
