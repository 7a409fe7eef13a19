//! zcomp CLI
//!
//! This crate provides the command-line interface for zcomp including:
//! - source: Render the completion script for a dumped CLI
//! - complete: List dynamic completion candidates for a parameter type
//! - completion: Generate completions for zcomp itself
//! - introspect: Dump zcomp's own command tree

pub mod commands;

pub use commands::{introspect_command, Cli, Commands};
