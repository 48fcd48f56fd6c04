use serde::{Deserialize, Serialize};

/// An outgoing rich-text run, as Notion expects it inside request bodies.
///
/// ```ignore
/// RichText::plain("hello") // {"type":"text","text":{"content":"hello"}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichText {
    Text { text: TextContent },
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        RichText::Text {
            text: TextContent {
                content: content.into(),
                link: None,
            },
        }
    }

    pub fn content(&self) -> &str {
        match self {
            RichText::Text { text } => &text.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// The kind of an incoming rich-text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RichTextKind {
    Text,
    Mention,
    Equation,
    Other,
}

/// A rich-text run read back from the API.
///
/// `plain_text` is what Notion renders for every kind, so it is what callers print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub kind: RichTextKind,
    pub plain_text: String,
    pub href: Option<String>,
}

impl RichTextItem {
    pub fn plain_text(text: &str) -> Self {
        Self {
            kind: RichTextKind::Text,
            plain_text: text.to_string(),
            href: None,
        }
    }
}

/// Concatenates the plain text of a run list.
pub fn join_plain_text(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}
