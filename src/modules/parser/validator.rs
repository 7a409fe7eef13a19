//! Command tree validation

use std::collections::HashSet;
use tracing::warn;
use zcomp_core::{CommandNode, Introspection, ParamKind, ZcompError};

/// Command tree validator
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeValidator;

impl TreeValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validate the entire command tree
    pub fn validate(&self, info: &Introspection) -> Result<(), ZcompError> {
        self.validate_command(&info.command, &info.command.name)
    }

    fn validate_command(&self, command: &CommandNode, path: &str) -> Result<(), ZcompError> {
        if command.name.is_empty() {
            return Err(ZcompError::Validation(format!(
                "Command name cannot be empty (under '{}')",
                path
            )));
        }

        self.validate_params(command, path)?;

        for (name, subcommand) in command.subcommands() {
            if name.is_empty() {
                return Err(ZcompError::Validation(format!(
                    "Subcommand name cannot be empty in '{}'",
                    path
                )));
            }
            self.validate_command(subcommand, &format!("{} {}", path, name))?;
        }

        Ok(())
    }

    fn validate_params(&self, command: &CommandNode, path: &str) -> Result<(), ZcompError> {
        let mut invocations = HashSet::new();
        let mut variadic: Option<&str> = None;

        for param in &command.params {
            if param.name.is_empty() {
                return Err(ZcompError::Validation(format!(
                    "Parameter name cannot be empty in '{}'",
                    path
                )));
            }

            match &param.kind {
                ParamKind::Option(spec) => {
                    if spec.name_count() == 0 {
                        return Err(ZcompError::Validation(format!(
                            "Option '{}' in '{}' has no invocation strings",
                            param.name, path
                        )));
                    }

                    if spec.takes_value() && spec.nargs == 0 {
                        return Err(ZcompError::Validation(format!(
                            "Option '{}' in '{}' takes a value but declares nargs 0",
                            param.name, path
                        )));
                    }

                    for name in spec.all_names() {
                        if !invocations.insert(name) {
                            return Err(ZcompError::Validation(format!(
                                "Duplicate invocation string '{}' in '{}'",
                                name, path
                            )));
                        }
                    }
                }
                ParamKind::Argument(spec) => {
                    if let Some(first) = variadic {
                        warn!(
                            "Argument '{}' in '{}' follows variadic '{}' and will not be completed",
                            param.name, path, first
                        );
                    }

                    if spec.nargs.is_variadic() {
                        if command.is_group() {
                            warn!(
                                "Group '{}' takes variadic argument '{}'; subcommands may be unreachable",
                                path, param.name
                            );
                        }
                        variadic.get_or_insert(param.name.as_str());
                    }
                }
            }
        }

        Ok(())
    }
}
