mod block;
pub mod blocks;
pub mod common;
mod property_value;
pub mod requests;

pub use block::Block;
pub use blocks::*;
pub use common::*;
pub use property_value::PropertyValue;

use crate::types::{BlockId, DatabaseId, PageId, PropertyName, RichTextItem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A Notion page as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: PageTitle,
    pub url: String,
    pub properties: HashMap<PropertyName, PropertyValue>,
    pub parent: Option<Parent>,
    pub archived: bool,
}

impl Page {
    pub fn title(&self) -> &PageTitle {
        &self.title
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(&PropertyName::new(name))
    }
}

/// A Notion database as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: DatabaseId,
    pub title: DatabaseTitle,
    pub url: String,
    /// Names of the properties in the database schema.
    pub property_names: Vec<PropertyName>,
    pub parent: Option<Parent>,
    pub archived: bool,
}

impl Database {
    pub fn title(&self) -> &DatabaseTitle {
        &self.title
    }
}

/// Parent reference with typed IDs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Parent {
    #[serde(rename = "page_id")]
    Page { page_id: PageId },
    #[serde(rename = "database_id")]
    Database { database_id: DatabaseId },
    #[serde(rename = "block_id")]
    Block { block_id: BlockId },
    #[serde(rename = "workspace")]
    Workspace,
}

/// Page title, flattened to plain text. Empty when the page has no title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PageTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseTitle(Vec<RichTextItem>);

impl DatabaseTitle {
    pub fn new(items: Vec<RichTextItem>) -> Self {
        Self(items)
    }

    pub fn as_plain_text(&self) -> String {
        crate::types::join_plain_text(&self.0)
    }
}

impl std::fmt::Display for DatabaseTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_plain_text())
    }
}

/// One page of results from a list or query endpoint.
///
/// Cursors are surfaced but never followed: callers get the first page only.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPage<T> {
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl<T> ResultsPage<T> {
    pub fn complete(results: Vec<T>) -> Self {
        Self {
            results,
            next_cursor: None,
            has_more: false,
        }
    }
}
