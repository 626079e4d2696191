//! Chat transcript model for the crisis chatbot widget.
//!
//! The transcript is an append-only ordered sequence kept only for the open
//! session; replies and widget suggestions come from the backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Append-only message sequence for the open chat session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(content));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Widget types that are plain conversation rather than a suggested activity
/// needing confirmation.
pub fn is_conversational_widget(widget: &str) -> bool {
    matches!(widget, "general_chat" | "off_topic")
}

/// Turns a `snake_case` widget name into a display title
/// (`"mood_tracker"` -> `"Mood Tracker"`).
pub fn widget_display_name(raw: &str) -> String {
    raw.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_preserves_append_order() {
        let mut transcript = ChatTranscript::default();
        transcript.push_user("hello");
        transcript.push_assistant("hi there");
        transcript.push_user("I feel anxious");

        let contents: Vec<_> = transcript
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, ["hello", "hi there", "I feel anxious"]);
        assert_eq!(transcript.messages()[0].role, ChatRole::User);
        assert_eq!(transcript.messages()[1].role, ChatRole::Assistant);
    }

    #[test]
    fn role_wire_format() {
        let json = serde_json::to_string(&ChatMessage::assistant("ok")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"ok"}"#);
    }

    #[test]
    fn widget_names_title_cased() {
        assert_eq!(widget_display_name("mood_tracker"), "Mood Tracker");
        assert_eq!(widget_display_name("breathing"), "Breathing");
        assert_eq!(widget_display_name("crisis_resource"), "Crisis Resource");
    }

    #[test]
    fn conversational_widgets_need_no_confirmation() {
        assert!(is_conversational_widget("general_chat"));
        assert!(is_conversational_widget("off_topic"));
        assert!(!is_conversational_widget("breathing"));
    }
}
