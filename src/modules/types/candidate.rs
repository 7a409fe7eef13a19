//! Completion candidate types shared by the dynamic completion path

use serde::{Deserialize, Serialize};

/// One value offered to the shell, with optional help text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    /// The value inserted on the command line
    pub value: String,
    /// Description shown next to the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl CompletionItem {
    /// Create a candidate without help text
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            help: None,
        }
    }

    /// Set the help text for this candidate
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Help text, or the empty string when there is none
    pub fn help_or_empty(&self) -> &str {
        self.help.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_item_help() {
        let item = CompletionItem::new("foo");
        assert_eq!(item.help_or_empty(), "");

        let item = item.with_help("foo help");
        assert_eq!(item.help_or_empty(), "foo help");
    }

    #[test]
    fn test_completion_item_serde() {
        let json = serde_json::to_string(&CompletionItem::new("bar")).unwrap();
        assert_eq!(json, r#"{"value":"bar"}"#);

        let item: CompletionItem =
            serde_json::from_str(r#"{"value":"baz","help":"baz help"}"#).unwrap();
        assert_eq!(item, CompletionItem::new("baz").with_help("baz help"));
    }
}
