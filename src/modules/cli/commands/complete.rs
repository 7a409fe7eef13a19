//! Dynamic completion command implementation

use clap::Args;
use std::io::Write;
use tracing::info;
use zcomp_core::{Introspection, ZcompError};
use zcomp_parser::parse_file;
use zcomp_runtime::{get_backend, init, CandidateRegistry, ZSH2};

/// Complete command arguments
#[derive(Args, Debug)]
pub struct CompleteCommand {
    /// Name of the parameter type to list candidates for
    #[arg(long = "type", env = "COMP_TYPE")]
    pub type_name: Option<String>,

    /// Completion backend answering the request
    #[arg(long, default_value = ZSH2)]
    pub shell: String,
}

impl CompleteCommand {
    /// Execute the complete command
    ///
    /// Candidates are printed as NUL-separated `value`/`help` pairs with no
    /// trailing newline.
    pub fn execute(&self, dump_path: &str) -> Result<(), ZcompError> {
        self.execute_with(dump_path, &CandidateRegistry::new())
    }

    /// Execute with candidate sources registered by an embedding program
    pub fn execute_with(
        &self,
        dump_path: &str,
        sources: &CandidateRegistry,
    ) -> Result<(), ZcompError> {
        let info = parse_file(dump_path)?;
        let output = self.render(&info, sources)?;
        std::io::stdout().write_all(output.as_bytes())?;
        Ok(())
    }

    /// Candidate records for an already parsed dump
    pub fn render(
        &self,
        info: &Introspection,
        sources: &CandidateRegistry,
    ) -> Result<String, ZcompError> {
        let type_name = self
            .type_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(ZcompError::MissingCompType)?;
        info!("Completing values of type '{}'", type_name);

        init();
        let backend =
            get_backend(&self.shell).ok_or_else(|| ZcompError::UnknownBackend(self.shell.clone()))?;
        Ok(backend.complete(type_name, info, sources))
    }
}
