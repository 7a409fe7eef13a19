//! Introspection dump parsing for zcomp
//!
//! This crate reads the command tree dumped by a host CLI framework (JSON or
//! YAML), converts it into the domain model, and validates it.

pub mod dump;
pub mod validator;

pub use dump::DumpParser;
pub use validator::TreeValidator;

use tracing::debug;
use zcomp_core::{Introspection, ZcompError};

/// Parse an introspection dump from a path
pub fn parse_file(path: &str) -> Result<Introspection, ZcompError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ZcompError::Config(format!("Failed to read file '{}': {}", path, e)))?;

    parse_string(&content)
}

/// Parse an introspection dump from a string
pub fn parse_string(content: &str) -> Result<Introspection, ZcompError> {
    let info = DumpParser::parse(content)?;

    let validator = TreeValidator::new();
    validator.validate(&info)?;

    debug!(
        "Parsed command tree '{}' with {} commands",
        info.name(),
        info.command.count_nodes()
    );
    Ok(info)
}
