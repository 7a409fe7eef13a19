//! Candidate sources for dynamic type completion

use std::collections::HashMap;
use std::sync::Arc;

use zcomp_core::{TypeDescriptor, TypeKind};
use zcomp_types::CompletionItem;

/// Produces completion candidates for a value type
pub trait CandidateSource: Send + Sync {
    /// Candidates for `value_type` starting with `incomplete`
    fn candidates(&self, value_type: &TypeDescriptor, incomplete: &str) -> Vec<CompletionItem>;
}

impl<F> CandidateSource for F
where
    F: Fn(&TypeDescriptor, &str) -> Vec<CompletionItem> + Send + Sync,
{
    fn candidates(&self, value_type: &TypeDescriptor, incomplete: &str) -> Vec<CompletionItem> {
        self(value_type, incomplete)
    }
}

/// Candidates derivable from the type itself: the values of a choice
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCandidates;

impl CandidateSource for BuiltinCandidates {
    fn candidates(&self, value_type: &TypeDescriptor, incomplete: &str) -> Vec<CompletionItem> {
        match &value_type.kind {
            TypeKind::Choice(choices) => choices
                .iter()
                .filter(|choice| choice.starts_with(incomplete))
                .map(CompletionItem::new)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Sources registered per type name, falling back to [`BuiltinCandidates`]
#[derive(Default)]
pub struct CandidateRegistry {
    sources: HashMap<String, Arc<dyn CandidateSource>>,
    fallback: BuiltinCandidates,
}

impl CandidateRegistry {
    /// Create a registry with no custom sources
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `source` for the type called `type_name`, replacing any previous one
    pub fn register(&mut self, type_name: impl Into<String>, source: Arc<dyn CandidateSource>) {
        self.sources.insert(type_name.into(), source);
    }

    /// Builder form of [`CandidateRegistry::register`]
    pub fn with_source(
        mut self,
        type_name: impl Into<String>,
        source: impl CandidateSource + 'static,
    ) -> Self {
        self.register(type_name, Arc::new(source));
        self
    }

    /// Check if a custom source is registered for `type_name`
    pub fn has(&self, type_name: &str) -> bool {
        self.sources.contains_key(type_name)
    }
}

impl CandidateSource for CandidateRegistry {
    fn candidates(&self, value_type: &TypeDescriptor, incomplete: &str) -> Vec<CompletionItem> {
        match self.sources.get(&value_type.name) {
            Some(source) => source.candidates(value_type, incomplete),
            None => self.fallback.candidates(value_type, incomplete),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_choices() {
        let hash = TypeDescriptor::choice(["MD5", "SHA1", "SHA256"]);
        let values: Vec<String> = BuiltinCandidates
            .candidates(&hash, "SHA")
            .into_iter()
            .map(|item| item.value)
            .collect();
        assert_eq!(values, vec!["SHA1", "SHA256"]);

        assert_eq!(BuiltinCandidates.candidates(&hash, "").len(), 3);
        assert!(BuiltinCandidates
            .candidates(&TypeDescriptor::string(), "")
            .is_empty());
    }

    #[test]
    fn test_closure_source() {
        let source = |_: &TypeDescriptor, incomplete: &str| {
            vec![CompletionItem::new(format!("{}x", incomplete))]
        };
        let items = source.candidates(&TypeDescriptor::string(), "a");
        assert_eq!(items, vec![CompletionItem::new("ax")]);
    }

    #[test]
    fn test_registry_falls_back_to_builtin() {
        let registry = CandidateRegistry::new().with_source(
            "text",
            |_: &TypeDescriptor, _: &str| vec![CompletionItem::new("custom")],
        );
        assert!(registry.has("text"));
        assert!(!registry.has("choice"));

        assert_eq!(
            registry.candidates(&TypeDescriptor::string(), ""),
            vec![CompletionItem::new("custom")]
        );
        assert_eq!(
            registry.candidates(&TypeDescriptor::choice(["a", "b"]), ""),
            vec![CompletionItem::new("a"), CompletionItem::new("b")]
        );
    }
}
