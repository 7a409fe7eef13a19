//! Source command implementation

use clap::{Args, ValueHint};
use std::fs;
use std::io::Write;
use tracing::{debug, info};
use zcomp_core::{Introspection, ZcompError};
use zcomp_parser::parse_file;
use zcomp_runtime::{get_backend, init, ZSH2};

/// Source command arguments
#[derive(Args, Debug)]
pub struct SourceCommand {
    /// Completion backend to render with
    #[arg(long, default_value = ZSH2)]
    pub shell: String,

    /// Program name to complete, overriding the dumped root name
    #[arg(long)]
    pub prog_name: Option<String>,

    /// Write the script to this file instead of stdout
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath)]
    pub output: Option<String>,
}

impl SourceCommand {
    /// Execute the source command
    pub fn execute(&self, dump_path: &str) -> Result<(), ZcompError> {
        info!("Rendering completion script from: {}", dump_path);

        let script = self.render(parse_file(dump_path)?)?;

        match &self.output {
            Some(path) => {
                fs::write(path, &script)?;
                debug!("Wrote completion script: {}", path);
            }
            None => std::io::stdout().write_all(script.as_bytes())?,
        }

        Ok(())
    }

    /// Render the script for an already parsed dump
    pub fn render(&self, info: Introspection) -> Result<String, ZcompError> {
        let info = match &self.prog_name {
            Some(name) => info.with_prog_name(name.as_str()),
            None => info,
        };

        init();
        let backend =
            get_backend(&self.shell).ok_or_else(|| ZcompError::UnknownBackend(self.shell.clone()))?;
        Ok(backend.source(&info))
    }
}
