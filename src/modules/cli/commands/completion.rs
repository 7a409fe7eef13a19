//! Hidden command to generate shell completions.

use clap::{Args, CommandFactory, ValueEnum};
use clap_complete::{generate, Shell};
use std::io::Write;
use zcomp_core::ZcompError;
use zcomp_runtime::{get_backend, init, ZSH2};

use super::introspect_command;

/// Shells zcomp can complete itself for
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Elvish,
    Powershell,
    /// zsh through zcomp's own `_arguments` renderer
    Zsh2,
}

impl CompletionShell {
    /// The `clap_complete` generator, `None` for zcomp's own backend
    fn generator(self) -> Option<Shell> {
        match self {
            CompletionShell::Bash => Some(Shell::Bash),
            CompletionShell::Zsh => Some(Shell::Zsh),
            CompletionShell::Fish => Some(Shell::Fish),
            CompletionShell::Elvish => Some(Shell::Elvish),
            CompletionShell::Powershell => Some(Shell::PowerShell),
            CompletionShell::Zsh2 => None,
        }
    }
}

/// Generate shell completion scripts.
///
/// This command is intentionally hidden from normal `--help` output because it
/// exists primarily for installers and packaging scripts.
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Shell to generate completions for (e.g. bash, zsh2)
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

impl CompletionCommand {
    pub fn execute(&self) -> Result<(), ZcompError> {
        let mut out = std::io::stdout();
        match self.shell.generator() {
            Some(shell) => {
                let mut cmd = crate::Cli::command();
                generate(shell, &mut cmd, "zcomp", &mut out);
            }
            None => out.write_all(Self::zsh2_script()?.as_bytes())?,
        }
        Ok(())
    }

    /// zcomp's own completion script rendered by the `zsh2` backend
    pub fn zsh2_script() -> Result<String, ZcompError> {
        init();
        let backend = get_backend(ZSH2).ok_or_else(|| ZcompError::UnknownBackend(ZSH2.into()))?;
        let info = introspect_command(crate::Cli::command());
        Ok(backend.source(&info))
    }
}
