//! Type definitions for zcomp
//!
//! This crate contains shared type definitions used across the zcomp codebase,
//! including parameter type tags, quoting dialects, and completion candidates.

pub mod candidate;
pub mod dialect;
pub mod type_tag;

pub use candidate::CompletionItem;
pub use dialect::QuoteDialect;
pub use type_tag::TypeTag;
