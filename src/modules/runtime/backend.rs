//! Completion backends and the process-wide backend registry

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Once, PoisonError, RwLock};
use tracing::debug;
use zcomp_core::Introspection;

use crate::candidates::CandidateSource;
use crate::{lookup, zsh};

/// Identifier under which the zsh backend is registered
pub const ZSH2: &str = "zsh2";

/// A shell completion generator
pub trait CompletionBackend: Send + Sync {
    /// Registry identifier
    fn name(&self) -> &str;

    /// The completion script for the introspected program
    fn source(&self, info: &Introspection) -> String;

    /// Dynamic candidates for the type called `type_name`
    fn complete(&self, type_name: &str, info: &Introspection, source: &dyn CandidateSource)
        -> String;
}

/// Zsh backend built on nested `_arguments` calls
#[derive(Debug, Default, Clone, Copy)]
pub struct Zsh2Complete;

impl CompletionBackend for Zsh2Complete {
    fn name(&self) -> &str {
        ZSH2
    }

    fn source(&self, info: &Introspection) -> String {
        zsh::complete(info)
    }

    fn complete(
        &self,
        type_name: &str,
        info: &Introspection,
        source: &dyn CandidateSource,
    ) -> String {
        lookup::complete(type_name, &info.command, source)
    }
}

static BACKENDS: Lazy<RwLock<HashMap<String, Arc<dyn CompletionBackend>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

static INIT: Once = Once::new();

/// Register `backend` under its name, replacing any previous registration
pub fn add_backend(backend: Arc<dyn CompletionBackend>) {
    let name = backend.name().to_string();
    debug!("Registering completion backend '{}'", name);
    BACKENDS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name, backend);
}

/// Look up a registered backend
pub fn get_backend(name: &str) -> Option<Arc<dyn CompletionBackend>> {
    BACKENDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned()
}

/// Register the built-in backends; later calls do nothing
pub fn init() {
    INIT.call_once(|| add_backend(Arc::new(Zsh2Complete)));
}
