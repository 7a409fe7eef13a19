//! Zsh completion script generation
//!
//! Renders an introspected command tree into a `#compdef` script built from
//! nested `_arguments` calls.

mod command;
mod help;
mod quote;
mod spec;

pub use command::complete_command;
pub use help::{get_help, HELP_OPTION_TEXT};
pub use quote::{escape, quote, quote_with};
pub use spec::complete_type;

use tracing::debug;
use zcomp_core::Introspection;

/// Render the complete completion script for `info`
pub fn complete(info: &Introspection) -> String {
    let mut lines = vec![format!("#compdef {}", info.name()), String::new()];
    if info.command.is_group() {
        lines.push(r#"local curcontext="$curcontext" state state_descr line"#.to_string());
        lines.push("typeset -A opt_args".to_string());
        lines.push(String::new());
    }

    lines.extend(complete_command(
        &info.command,
        info.allow_interspersed_args,
    ));

    debug!(
        "Rendered zsh script for '{}' ({} lines)",
        info.name(),
        lines.len()
    );
    lines.iter().map(|line| format!("{}\n", line)).collect()
}
