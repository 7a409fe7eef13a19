//! CLI commands

mod complete;
mod completion;
mod introspect;
mod source;

pub use complete::CompleteCommand;
pub use completion::{CompletionCommand, CompletionShell};
pub use introspect::{introspect_command, IntrospectCommand};
pub use source::SourceCommand;

use clap::{Parser, Subcommand, ValueHint};

/// zcomp - zsh completion scripts for introspected command line interfaces
#[derive(Parser, Debug)]
#[command(name = "zcomp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Introspection dump of the target CLI (JSON or YAML)
    ///
    /// This is a *global* option so it can be specified after subcommands,
    /// e.g. `zcomp source -f cli.json`.
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        default_value = "cli.json",
        value_hint = ValueHint::FilePath
    )]
    pub file: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the completion script for the dumped CLI
    Source(SourceCommand),

    /// List completion candidates for one parameter type
    Complete(CompleteCommand),

    /// Generate completions for zcomp itself
    #[command(hide = true)]
    Completion(CompletionCommand),

    /// Print the zcomp command tree as an introspection dump
    Introspect(IntrospectCommand),
}

impl Cli {
    /// Path of the introspection dump
    pub fn dump_path(&self) -> &str {
        &self.file
    }
}
