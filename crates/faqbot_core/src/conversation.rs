/// Label shown for a source when the backend names neither `source` nor `document_name`.
pub const SOURCE_PLACEHOLDER: &str = "Policy Document";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    pub label: String,
}

impl SourceRef {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Picks the first non-empty candidate label, falling back to the placeholder.
    pub fn from_candidates<'a, I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let label = candidates
            .into_iter()
            .flatten()
            .find(|label| !label.is_empty())
            .unwrap_or(SOURCE_PLACEHOLDER);
        Self::new(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    User {
        content: String,
    },
    Assistant {
        content: String,
        sources: Vec<SourceRef>,
    },
}

impl Message {
    pub fn content(&self) -> &str {
        match self {
            Message::User { content } | Message::Assistant { content, .. } => content,
        }
    }

    pub fn sources(&self) -> &[SourceRef] {
        match self {
            Message::User { .. } => &[],
            Message::Assistant { sources, .. } => sources,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Message::User { .. })
    }
}

/// Append-only transcript. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True before the first turn; drives the empty-state display.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_label_prefers_first_present_candidate() {
        let source = SourceRef::from_candidates([None, Some("aml.pdf"), Some("other")]);
        assert_eq!(source.label, "aml.pdf");
    }

    #[test]
    fn source_label_skips_empty_candidates() {
        let source = SourceRef::from_candidates([Some(""), None]);
        assert_eq!(source.label, SOURCE_PLACEHOLDER);
    }

    #[test]
    fn user_messages_have_no_sources() {
        let message = Message::User {
            content: "hi".to_string(),
        };
        assert!(message.sources().is_empty());
        assert!(message.is_user());
    }
}
