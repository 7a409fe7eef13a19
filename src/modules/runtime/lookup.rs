//! Dynamic completion: resolve a type by name and list its candidates

use tracing::debug;
use zcomp_core::{CommandNode, TypeDescriptor};
use zcomp_types::CompletionItem;

use crate::candidates::CandidateSource;

/// Record separator of the dynamic completion protocol
const SEPARATOR: &str = "\0";

/// Find the first parameter type called `type_name`
///
/// Searches depth-first: the node's own parameters, then its subcommands in
/// declaration order.
pub fn find_param_type<'a>(type_name: &str, command: &'a CommandNode) -> Option<&'a TypeDescriptor> {
    if let Some(param) = command
        .params
        .iter()
        .find(|param| param.value_type.name == type_name)
    {
        return Some(&param.value_type);
    }

    command
        .subcommands()
        .find_map(|(_, subcommand)| find_param_type(type_name, subcommand))
}

/// Candidates for the type called `type_name`, serialized for the shell
///
/// Returns the empty string when no parameter in the tree has that type.
pub fn complete(type_name: &str, command: &CommandNode, source: &dyn CandidateSource) -> String {
    let Some(value_type) = find_param_type(type_name, command) else {
        debug!("No parameter of type '{}' under '{}'", type_name, command.name);
        return String::new();
    };

    let items = source.candidates(value_type, "");
    debug!("Found {} candidates for type '{}'", items.len(), type_name);
    serialize_candidates(&items)
}

/// `value\0help` records joined by NUL, without a trailing separator
pub fn serialize_candidates(items: &[CompletionItem]) -> String {
    items
        .iter()
        .flat_map(|item| [item.value.as_str(), item.help_or_empty()])
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
