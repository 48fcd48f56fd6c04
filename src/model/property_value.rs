use crate::types::{join_plain_text, RichTextItem};
use serde::{Deserialize, Serialize};

/// A page property value read back from the API.
///
/// Only the types the task schema uses are modelled; everything else keeps its
/// type name so it can still be reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Title(Vec<RichTextItem>),
    RichText(Vec<RichTextItem>),
    Select(Option<String>),
    Status(Option<String>),
    Date(Option<chrono::NaiveDate>),
    People(Vec<String>),
    Checkbox(bool),
    Other { property_type: String },
}

impl PropertyValue {
    /// Renders the value as a single display string.
    pub fn display_text(&self) -> String {
        match self {
            PropertyValue::Title(items) | PropertyValue::RichText(items) => {
                join_plain_text(items)
            }
            PropertyValue::Select(name) | PropertyValue::Status(name) => {
                name.clone().unwrap_or_default()
            }
            PropertyValue::Date(date) => date.map(|d| d.to_string()).unwrap_or_default(),
            PropertyValue::People(names) => names.join(", "),
            PropertyValue::Checkbox(checked) => checked.to_string(),
            PropertyValue::Other { property_type } => format!("<{}>", property_type),
        }
    }
}
