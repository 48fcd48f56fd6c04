// src/model/requests.rs
//! Outgoing request bodies, one type per endpoint.
//!
//! Each type serializes to exactly the JSON the Notion API expects, so the
//! transport can send them without inspecting their contents.

use crate::types::{Color, DatabaseId, PageId, PropertyName, RichText};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The block kinds this crate can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph,
    #[serde(rename = "heading_1")]
    Heading1,
    #[serde(rename = "heading_2")]
    Heading2,
    #[serde(rename = "heading_3")]
    Heading3,
    BulletedListItem,
    NumberedListItem,
    Code,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading1 => "heading_1",
            BlockKind::Heading2 => "heading_2",
            BlockKind::Heading3 => "heading_3",
            BlockKind::BulletedListItem => "bulleted_list_item",
            BlockKind::NumberedListItem => "numbered_list_item",
            BlockKind::Code => "code",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Body of a text-carrying block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextBody {
    pub rich_text: Vec<RichText>,
}

/// Body of a code block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBody {
    pub rich_text: Vec<RichText>,
    pub language: String,
}

/// Type-specific block content.
///
/// Serializes externally tagged (`{"paragraph": {...}}`), which is also the
/// body `PATCH /blocks/{id}` takes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockContent {
    Paragraph(RichTextBody),
    #[serde(rename = "heading_1")]
    Heading1(RichTextBody),
    #[serde(rename = "heading_2")]
    Heading2(RichTextBody),
    #[serde(rename = "heading_3")]
    Heading3(RichTextBody),
    BulletedListItem(RichTextBody),
    NumberedListItem(RichTextBody),
    Code(CodeBody),
}

impl BlockContent {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Paragraph(_) => BlockKind::Paragraph,
            BlockContent::Heading1(_) => BlockKind::Heading1,
            BlockContent::Heading2(_) => BlockKind::Heading2,
            BlockContent::Heading3(_) => BlockKind::Heading3,
            BlockContent::BulletedListItem(_) => BlockKind::BulletedListItem,
            BlockContent::NumberedListItem(_) => BlockKind::NumberedListItem,
            BlockContent::Code(_) => BlockKind::Code,
        }
    }

    pub fn rich_text(&self) -> &[RichText] {
        match self {
            BlockContent::Paragraph(body)
            | BlockContent::Heading1(body)
            | BlockContent::Heading2(body)
            | BlockContent::Heading3(body)
            | BlockContent::BulletedListItem(body)
            | BlockContent::NumberedListItem(body) => &body.rich_text,
            BlockContent::Code(body) => &body.rich_text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum ObjectKind {
    Block,
}

/// A block to create: `{"object":"block","type":"<kind>","<kind>":{...}}`.
///
/// The `type` tag is derived from the content, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBlock {
    object: ObjectKind,
    #[serde(rename = "type")]
    kind: BlockKind,
    #[serde(flatten)]
    content: BlockContent,
}

impl NewBlock {
    pub fn new(content: BlockContent) -> Self {
        Self {
            object: ObjectKind::Block,
            kind: content.kind(),
            content,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn content(&self) -> &BlockContent {
        &self.content
    }
}

/// Where a new page or database is created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParentRef {
    PageId { page_id: PageId },
    DatabaseId { database_id: DatabaseId },
}

/// A select option in a database schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOptionSpec {
    pub name: String,
    pub color: Color,
}

/// A column definition in a database schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertySchema {
    Title {},
    RichText {},
    Date {},
    People {},
    Select { options: Vec<SelectOptionSpec> },
}

/// Reference to a select option by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateInput {
    pub start: chrono::NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<chrono::NaiveDate>,
}

/// A property value to write onto a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyInput {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    Select(SelectRef),
    Date(DateInput),
}

/// Property values keyed by property name, in insertion order.
pub type PropertyMap = IndexMap<PropertyName, PropertyInput>;

/// Column definitions keyed by property name, in insertion order.
pub type SchemaMap = IndexMap<PropertyName, PropertySchema>;

/// `POST /pages`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePageRequest {
    pub parent: ParentRef,
    pub properties: PropertyMap,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NewBlock>,
}

/// `PATCH /pages/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePageRequest {
    pub properties: PropertyMap,
}

/// `POST /databases`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDatabaseRequest {
    pub parent: ParentRef,
    pub title: Vec<RichText>,
    pub properties: SchemaMap,
}

/// `POST /databases/{id}/query`
///
/// The filter is forwarded verbatim; its grammar belongs to the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QueryDatabaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
}

/// `PATCH /blocks/{id}/children`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppendBlockChildrenRequest {
    pub children: Vec<NewBlock>,
}
