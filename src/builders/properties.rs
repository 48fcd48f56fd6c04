// src/builders/properties.rs
//! Page property payloads.

use crate::model::requests::{DateInput, PropertyInput, PropertyMap, SelectRef};
use crate::types::{PropertyName, RichText};

/// Name of the title property on a standalone (non-database) page.
pub const PAGE_TITLE_PROPERTY: &str = "title";

pub fn title_value(text: &str) -> PropertyInput {
    PropertyInput::Title(vec![RichText::plain(text)])
}

pub fn rich_text_value(text: &str) -> PropertyInput {
    PropertyInput::RichText(vec![RichText::plain(text)])
}

pub fn select_value(name: &str) -> PropertyInput {
    PropertyInput::Select(SelectRef {
        name: name.to_string(),
    })
}

pub fn date_value(start: chrono::NaiveDate) -> PropertyInput {
    PropertyInput::Date(DateInput { start, end: None })
}

/// The property set that names a standalone page.
pub fn page_title_properties(title: &str) -> PropertyMap {
    let mut properties = PropertyMap::new();
    properties.insert(PropertyName::new(PAGE_TITLE_PROPERTY), title_value(title));
    properties
}
