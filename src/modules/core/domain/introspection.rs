//! Root of an introspected command line interface

use serde::Serialize;

use super::CommandNode;

/// Command tree plus the parsing settings of its root context
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Introspection {
    /// Root command
    pub command: CommandNode,

    /// Whether options may follow positional arguments
    pub allow_interspersed_args: bool,
}

impl Introspection {
    /// Wrap a root command, allowing interspersed arguments
    pub fn new(command: CommandNode) -> Self {
        Self {
            command,
            allow_interspersed_args: true,
        }
    }

    /// Set whether options may follow positional arguments
    pub fn with_interspersed_args(mut self, allow: bool) -> Self {
        self.allow_interspersed_args = allow;
        self
    }

    /// Name of the root command
    pub fn name(&self) -> &str {
        &self.command.name
    }

    /// Rename the root command, as when a program is invoked under another name
    pub fn with_prog_name(mut self, prog_name: impl Into<String>) -> Self {
        self.command.name = prog_name.into();
        self
    }
}
