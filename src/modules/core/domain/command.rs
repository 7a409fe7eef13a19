//! Command tree nodes

use indexmap::IndexMap;
use serde::Serialize;

use super::{Documented, Parameter};

/// One command of the introspected tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandNode {
    /// Name the command is invoked by
    pub name: String,

    /// Full help text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Short help text, preferred in completion menus
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_help: Option<String>,

    /// Options and arguments in declaration order
    pub params: Vec<Parameter>,

    /// Subcommands in declaration order; present only on command groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commands: Option<IndexMap<String, CommandNode>>,
}

impl CommandNode {
    /// Create a leaf command with no parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: None,
            short_help: None,
            params: Vec::new(),
            commands: None,
        }
    }

    /// Create a command group with no subcommands yet
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            commands: Some(IndexMap::new()),
            ..Self::new(name)
        }
    }

    /// Set the help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Set the short help text
    pub fn with_short_help(mut self, short_help: impl Into<String>) -> Self {
        self.short_help = Some(short_help.into());
        self
    }

    /// Append a parameter
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Append a subcommand under its own name, turning this node into a group
    pub fn with_command(mut self, command: CommandNode) -> Self {
        self.commands
            .get_or_insert_with(IndexMap::new)
            .insert(command.name.clone(), command);
        self
    }

    /// Returns true if this node dispatches to subcommands
    pub fn is_group(&self) -> bool {
        self.commands.is_some()
    }

    /// Subcommands in declaration order
    pub fn subcommands(&self) -> impl Iterator<Item = (&str, &CommandNode)> {
        self.commands
            .iter()
            .flat_map(|commands| commands.iter())
            .map(|(name, command)| (name.as_str(), command))
    }

    /// Find a direct subcommand by name
    pub fn find_command(&self, name: &str) -> Option<&CommandNode> {
        self.commands.as_ref().and_then(|c| c.get(name))
    }

    /// Find a parameter by name
    pub fn find_param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Number of nodes in this subtree, including this one
    pub fn count_nodes(&self) -> usize {
        1 + self
            .subcommands()
            .map(|(_, command)| command.count_nodes())
            .sum::<usize>()
    }
}

impl Documented for CommandNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn short_help(&self) -> Option<&str> {
        self.short_help.as_deref()
    }

    fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}
