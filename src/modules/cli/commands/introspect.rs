//! Introspect command and the `clap` to command tree adapter

use clap::builder::PossibleValue;
use clap::{Arg, ArgAction, Args, Command, CommandFactory, ValueHint};
use serde_json::Value;
use std::io::Write;
use tracing::debug;
use zcomp_core::{CommandNode, Introspection, Parameter, TypeDescriptor, ZcompError};

/// Introspect command arguments
#[derive(Args, Debug)]
pub struct IntrospectCommand {
    /// Print on a single line
    #[arg(long)]
    pub compact: bool,
}

impl IntrospectCommand {
    /// Execute the introspect command
    pub fn execute(&self) -> Result<(), ZcompError> {
        let info = introspect_command(crate::Cli::command());
        let json = if self.compact {
            serde_json::to_string(&info)?
        } else {
            serde_json::to_string_pretty(&info)?
        };
        writeln!(std::io::stdout(), "{}", json)?;
        Ok(())
    }
}

/// Convert a `clap` command into an introspected tree
///
/// Hidden arguments and subcommands are left out. `clap` accepts options
/// anywhere on the line, so interspersed arguments are allowed.
pub fn introspect_command(mut cmd: Command) -> Introspection {
    cmd.build();
    let root = convert_command(&cmd);
    debug!("Introspected '{}' ({} commands)", root.name, root.count_nodes());
    Introspection::new(root)
}

fn convert_command(cmd: &Command) -> CommandNode {
    let mut node = if cmd.has_subcommands() {
        CommandNode::group(cmd.get_name())
    } else {
        CommandNode::new(cmd.get_name())
    };
    if let Some(about) = cmd.get_about() {
        node = node.with_help(about.to_string());
    }

    for arg in cmd.get_arguments().filter(|arg| !arg.is_hide_set()) {
        node = node.with_param(convert_arg(arg));
    }
    for sub in cmd.get_subcommands().filter(|sub| !sub.is_hide_set()) {
        node = node.with_command(convert_command(sub));
    }
    node
}

fn convert_arg(arg: &Arg) -> Parameter {
    let name = arg.get_id().as_str();
    let (min, max) = arg
        .get_num_args()
        .map(|range| (range.min_values(), range.max_values()))
        .unwrap_or((1, 1));

    let param = if arg.is_positional() {
        let param = Parameter::argument(name);
        if matches!(arg.get_action(), ArgAction::Append) || max == usize::MAX {
            param.variadic()
        } else if min == max && min > 1 {
            param.with_nargs(min as u32)
        } else {
            param
        }
    } else {
        let mut opts: Vec<String> = Vec::new();
        if let Some(shorts) = arg.get_short_and_visible_aliases() {
            opts.extend(shorts.into_iter().map(|short| format!("-{}", short)));
        }
        if let Some(longs) = arg.get_long_and_visible_aliases() {
            opts.extend(longs.into_iter().map(|long| format!("--{}", long)));
        }

        let param = Parameter::option(name, opts);
        let param = match arg.get_action() {
            ArgAction::SetTrue
            | ArgAction::SetFalse
            | ArgAction::Help
            | ArgAction::HelpShort
            | ArgAction::HelpLong
            | ArgAction::Version => return with_help(param.flag(), arg),
            ArgAction::Count => return with_help(param.counter(), arg),
            ArgAction::Append => param.multiple(),
            _ => param,
        };
        if min == max && min > 1 {
            param.with_nargs(min as u32)
        } else {
            param
        }
    };

    let param = match value_type(arg) {
        Some(value_type) => param.with_type(value_type),
        None => param,
    };
    let param = match default_value(arg) {
        Some(default) => param.with_default(default),
        None => param,
    };
    with_help(param, arg)
}

fn with_help(param: Parameter, arg: &Arg) -> Parameter {
    match arg.get_help() {
        Some(help) => param.with_help(help.to_string()),
        None => param,
    }
}

/// Type of a valued argument, from its possible values or value hint
fn value_type(arg: &Arg) -> Option<TypeDescriptor> {
    let choices: Vec<String> = arg
        .get_possible_values()
        .iter()
        .filter(|value| !value.is_hide_set())
        .map(PossibleValue::get_name)
        .map(String::from)
        .collect();
    if !choices.is_empty() {
        return Some(TypeDescriptor::choice(choices));
    }

    match arg.get_value_hint() {
        ValueHint::FilePath | ValueHint::ExecutablePath => Some(TypeDescriptor::file()),
        ValueHint::DirPath => Some(TypeDescriptor::path(false, true)),
        ValueHint::AnyPath => Some(TypeDescriptor::path(true, true)),
        _ => None,
    }
}

fn default_value(arg: &Arg) -> Option<Value> {
    let defaults: Vec<Value> = arg
        .get_default_values()
        .iter()
        .map(|value| Value::String(value.to_string_lossy().into_owned()))
        .collect();
    match defaults.len() {
        0 => None,
        1 => defaults.into_iter().next(),
        _ => Some(Value::Array(defaults)),
    }
}
