use serde::{Deserialize, Serialize};

use crate::types::ContentPart;

/// The speaker of a turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System role.
    System,

    /// User role.
    User,

    /// Assistant role.
    Assistant,
}

/// One message in the conversation, tagged with its speaker role.
///
/// Turns are replayed verbatim on every request because the Responses API is
/// stateless across calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    /// The role of the speaker.
    pub role: Role,

    /// The content parts of the turn.
    pub content: Vec<ContentPart>,
}

impl Turn {
    /// Create a new `Turn` with the given role and content parts.
    pub fn new(role: Role, content: Vec<ContentPart>) -> Self {
        Self { role, content }
    }

    /// Create a new system `Turn` carrying a single input text part.
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, vec![ContentPart::input_text(text)])
    }

    /// Create a new user `Turn` carrying a single input text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, vec![ContentPart::input_text(text)])
    }

    /// Create a new assistant `Turn` carrying a single output text part.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, vec![ContentPart::output_text(text)])
    }

    /// Concatenated text of every content part.
    pub fn text(&self) -> String {
        self.content.iter().map(ContentPart::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn user_turn_serialization() {
        let turn = Turn::user("Hello!");
        let json = to_value(&turn).unwrap();

        assert_eq!(
            json,
            json!({
                "role": "user",
                "content": [
                    {
                        "type": "input_text",
                        "text": "Hello!"
                    }
                ]
            })
        );
    }

    #[test]
    fn assistant_turn_serialization() {
        let turn = Turn::assistant("Hi there.");
        let json = to_value(&turn).unwrap();

        assert_eq!(
            json,
            json!({
                "role": "assistant",
                "content": [
                    {
                        "type": "output_text",
                        "text": "Hi there."
                    }
                ]
            })
        );
    }

    #[test]
    fn system_turn_uses_input_text() {
        let turn = Turn::system("Be helpful.");
        assert_eq!(turn.role, Role::System);
        assert_eq!(turn.text(), "Be helpful.");
        let json = to_value(&turn).unwrap();
        assert_eq!(json["content"][0]["type"], "input_text");
    }

    #[test]
    fn turn_deserialization() {
        let json = json!({
            "role": "assistant",
            "content": [
                {
                    "type": "output_text",
                    "text": "Hello, "
                },
                {
                    "type": "output_text",
                    "text": "world."
                }
            ]
        });

        let turn: Turn = serde_json::from_value(json).unwrap();
        assert_eq!(turn.role, Role::Assistant);
        assert_eq!(turn.text(), "Hello, world.");
    }

    #[test]
    fn role_serialization() {
        assert_eq!(to_value(Role::System).unwrap(), json!("system"));
        assert_eq!(to_value(Role::User).unwrap(), json!("user"));
        assert_eq!(to_value(Role::Assistant).unwrap(), json!("assistant"));
    }
}
