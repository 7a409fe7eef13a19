//! Completion rendering for zcomp
//!
//! This crate renders introspected command trees into zsh completion scripts,
//! answers dynamic type-completion requests, and keeps the registry of
//! completion backends.

pub mod backend;
pub mod candidates;
pub mod lookup;
pub mod zsh;

pub use backend::{add_backend, get_backend, init, CompletionBackend, Zsh2Complete, ZSH2};
pub use candidates::{BuiltinCandidates, CandidateRegistry, CandidateSource};
pub use lookup::{find_param_type, serialize_candidates};
