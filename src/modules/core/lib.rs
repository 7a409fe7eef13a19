//! Core domain logic for zcomp
//!
//! This crate contains the introspected command tree model and the error
//! type shared by the parser, the renderer and the CLI.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::{Result, ZcompError};
