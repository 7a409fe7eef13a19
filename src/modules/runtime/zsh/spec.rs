//! Value specs: the `:message:action` part of an `_arguments` clause

use serde_json::{Number, Value};
use zcomp_core::{display_value, Bounds, TypeDescriptor, TypeKind};
use zcomp_types::QuoteDialect;

use super::quote::{escape_char, quote};

/// Words the host accepts for boolean values
const BOOL_WORDS: &str = "0 1 false true f t no yes n y off on";

/// Build the value spec completing one value of `value_type`
///
/// The result is the grammar as `_arguments` reads it; wrapping it in a
/// single-quoted word is up to the caller.
pub fn complete_type(value_type: &TypeDescriptor, name: &str, default: Option<&Value>) -> String {
    // Strip trailing _ used to work around reserved words.
    let mut message = name.strip_suffix('_').unwrap_or(name).to_string();
    if let Some(default) = default {
        message.push_str(&format!(" [{}]", display_value(default)));
    }
    let message = escape_char(&message, ':');

    match &value_type.kind {
        TypeKind::Bool => format!(":{}:({})", message, BOOL_WORDS),
        TypeKind::Choice(choices) => {
            let choices: Vec<String> = choices
                .iter()
                .map(|choice| quote(choice, QuoteDialect::Double))
                .collect();
            format!(":{}:({})", message, choices.join(" "))
        }
        TypeKind::File => format!(":{}:_files", message),
        TypeKind::Path {
            file_okay,
            dir_okay,
        } => {
            let only_dirs = !file_okay && *dir_okay;
            format!(":{}:_files{}", message, if only_dirs { " -/" } else { "" })
        }
        TypeKind::IntRange(bounds) => numbers(bounds, false, name, default),
        TypeKind::FloatRange(bounds) => numbers(bounds, true, name, default),
        TypeKind::Tuple(types) => types
            .iter()
            .map(|element| complete_type(element, name, None))
            .collect::<Vec<_>>()
            .join(" "),
        TypeKind::Other(_) => format!(":{}:", message),
    }
}

/// `_numbers` action for a bounded integer or float
fn numbers(bounds: &Bounds, float: bool, name: &str, default: Option<&Value>) -> String {
    let mut action = String::from("_numbers");
    if float {
        action.push_str(" -f");
    }
    if let Some(default) = default {
        action.push_str(&format!(" -d {}", display_value(default)));
    }
    // _numbers bounds are inclusive
    if let Some(min) = &bounds.min {
        let min = if float {
            min.to_string()
        } else {
            int_bound(min, if bounds.min_open { 1 } else { 0 })
        };
        action.push_str(&format!(" -l {}", min));
    }
    if let Some(max) = &bounds.max {
        let max = if float {
            max.to_string()
        } else {
            int_bound(max, if bounds.max_open { -1 } else { 0 })
        };
        action.push_str(&format!(" -m {}", max));
    }
    action.push(' ');
    action.push_str(&quote(name, QuoteDialect::Double));
    format!(": :{}", action)
}

/// Integer bound moved by `delta`
///
/// Whole floats such as `0.0` count as integers; fractional bounds are kept
/// verbatim.
fn int_bound(bound: &Number, delta: i128) -> String {
    let whole = bound
        .as_i64()
        .map(i128::from)
        .or_else(|| bound.as_u64().map(i128::from))
        .or_else(|| bound.as_f64().filter(|v| v.fract() == 0.0).map(|v| v as i128));
    match whole {
        Some(value) => (value + delta).to_string(),
        None => bound.to_string(),
    }
}
