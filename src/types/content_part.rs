use serde::{Deserialize, Serialize};

/// Text supplied to the model as input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputText {
    /// The text content.
    pub text: String,
}

impl InputText {
    /// Create a new `InputText` with the given text.
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

/// Text produced by the model as output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputText {
    /// The text content.
    pub text: String,
}

impl OutputText {
    /// Create a new `OutputText` with the given text.
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

/// One piece of a turn's content.
///
/// Input parts carry text toward the model (system and user turns); output
/// parts carry text the model produced (assistant turns).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    /// Text supplied as input.
    #[serde(rename = "input_text")]
    InputText(InputText),

    /// Text produced as output.
    #[serde(rename = "output_text")]
    OutputText(OutputText),
}

impl ContentPart {
    /// Create an input text part.
    pub fn input_text(text: impl Into<String>) -> Self {
        ContentPart::InputText(InputText::new(text.into()))
    }

    /// Create an output text part.
    pub fn output_text(text: impl Into<String>) -> Self {
        ContentPart::OutputText(OutputText::new(text.into()))
    }

    /// The text carried by this part, whichever direction it flows.
    pub fn text(&self) -> &str {
        match self {
            ContentPart::InputText(part) => &part.text,
            ContentPart::OutputText(part) => &part.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn input_text_serialization() {
        let part = ContentPart::input_text("Hello");
        let json = to_value(&part).unwrap();

        assert_eq!(
            json,
            json!({
                "type": "input_text",
                "text": "Hello"
            })
        );
    }

    #[test]
    fn output_text_serialization() {
        let part = ContentPart::output_text("World");
        let json = to_value(&part).unwrap();

        assert_eq!(
            json,
            json!({
                "type": "output_text",
                "text": "World"
            })
        );
    }

    #[test]
    fn content_part_deserialization() {
        let json = json!({
            "type": "input_text",
            "text": "Hello"
        });

        let part: ContentPart = serde_json::from_value(json).unwrap();
        match part {
            ContentPart::InputText(inner) => assert_eq!(inner.text, "Hello"),
            _ => panic!("Expected InputText variant"),
        }
    }

    #[test]
    fn text_accessor() {
        assert_eq!(ContentPart::input_text("a").text(), "a");
        assert_eq!(ContentPart::output_text("b").text(), "b");
    }
}
