// src/api/notion_client_adapter.rs
//! Adapter layer for converting notion-client types to our domain model.
//!
//! Only the block and property kinds the walkthrough writes are modelled in
//! full; anything else is kept by type name so it can still be listed.

use crate::error::{AppError, NotionClientError};
use crate::model::blocks::*;
use crate::model::common::BlockCommon;
use crate::model::{Block, Database, DatabaseTitle, Page, PageTitle, Parent, PropertyValue};
use crate::types::{
    join_plain_text, BlockId, Color, DatabaseId, PageId, PropertyName, RichTextItem, RichTextKind,
};
use notion_client::objects::page::PageProperty;
use std::collections::HashMap;

/// Convert notion-client Page to our domain Page
pub fn convert_page(notion_page: notion_client::objects::page::Page) -> Result<Page, AppError> {
    let id = PageId::parse(&notion_page.id)?;
    let title = extract_page_title(&notion_page.properties);
    let parent = Some(convert_parent(notion_page.parent)?);

    Ok(Page {
        id,
        title,
        url: notion_page.url,
        properties: convert_page_properties(notion_page.properties),
        parent,
        archived: notion_page.archived,
    })
}

/// Convert notion-client Database to our domain Database
pub fn convert_database(
    notion_db: notion_client::objects::database::Database,
) -> Result<Database, AppError> {
    let id =
        DatabaseId::parse(
            &notion_db
                .id
                .ok_or_else(|| NotionClientError::ConversionError {
                    message: "Database missing required ID field".to_string(),
                })?,
        )?;

    let title = DatabaseTitle::new(convert_rich_text_array(notion_db.title));
    let parent = Some(convert_parent(notion_db.parent)?);

    let mut property_names: Vec<PropertyName> = notion_db
        .properties
        .into_keys()
        .map(PropertyName::new)
        .collect();
    property_names.sort_by(|a, b| a.as_str().cmp(b.as_str()));

    Ok(Database {
        id,
        title,
        url: notion_db.url,
        property_names,
        parent,
        archived: notion_db.archived,
    })
}

/// Convert notion-client Block to our domain Block
pub fn convert_block(
    notion_block: notion_client::objects::block::Block,
) -> Result<Block, AppError> {
    let common = convert_block_common(&notion_block)?;

    use notion_client::objects::block::BlockType;

    match notion_block.block_type {
        BlockType::Paragraph { paragraph } => Ok(Block::Paragraph(ParagraphBlock {
            common,
            content: convert_text_block_content(paragraph.rich_text, paragraph.color),
        })),

        BlockType::Heading1 { heading_1 } => Ok(Block::Heading1(Heading1Block {
            common,
            content: convert_text_block_content(heading_1.rich_text, heading_1.color),
        })),

        BlockType::Heading2 { heading_2 } => Ok(Block::Heading2(Heading2Block {
            common,
            content: convert_text_block_content(heading_2.rich_text, heading_2.color),
        })),

        BlockType::Heading3 { heading_3 } => Ok(Block::Heading3(Heading3Block {
            common,
            content: convert_text_block_content(heading_3.rich_text, heading_3.color),
        })),

        BlockType::BulletedListItem { bulleted_list_item } => {
            Ok(Block::BulletedListItem(BulletedListItemBlock {
                common,
                content: convert_text_block_content(
                    bulleted_list_item.rich_text,
                    Some(bulleted_list_item.color),
                ),
            }))
        }

        BlockType::NumberedListItem { numbered_list_item } => {
            Ok(Block::NumberedListItem(NumberedListItemBlock {
                common,
                content: convert_text_block_content(
                    numbered_list_item.rich_text,
                    Some(numbered_list_item.color),
                ),
            }))
        }

        BlockType::Code { code } => Ok(Block::Code(CodeBlock {
            common,
            language: serde_type_name(&code.language)
                .unwrap_or_else(|| format!("{:?}", code.language).to_lowercase()),
            content: convert_text_block_content(code.rich_text, None),
        })),

        other => Ok(Block::Unsupported(UnsupportedBlock {
            common,
            block_type: serde_type_name(&other).unwrap_or_else(|| debug_variant_name(&other)),
        })),
    }
}

/// Convert notion-client Parent to our domain Parent
fn convert_parent(
    notion_parent: notion_client::objects::parent::Parent,
) -> Result<Parent, AppError> {
    use notion_client::objects::parent::Parent as NcParent;

    match notion_parent {
        NcParent::PageId { page_id } => Ok(Parent::Page {
            page_id: PageId::parse(&page_id)?,
        }),
        NcParent::DatabaseId { database_id } => Ok(Parent::Database {
            database_id: DatabaseId::parse(&database_id)?,
        }),
        NcParent::BlockId { block_id } => Ok(Parent::Block {
            block_id: BlockId::parse(&block_id)?,
        }),
        NcParent::Workspace { .. } => Ok(Parent::Workspace),
        _ => Err(NotionClientError::ConversionError {
            message: "Unsupported parent type".to_string(),
        }
        .into()),
    }
}

fn convert_block_common(
    notion_block: &notion_client::objects::block::Block,
) -> Result<BlockCommon, AppError> {
    let id = BlockId::parse(notion_block.id.as_deref().ok_or_else(|| {
        NotionClientError::ConversionError {
            message: "Block missing required ID field".to_string(),
        }
    })?)?;

    Ok(BlockCommon {
        id,
        has_children: notion_block.has_children.unwrap_or(false),
        archived: notion_block.archived.unwrap_or(false),
    })
}

fn convert_text_block_content(
    rich_text: Vec<notion_client::objects::rich_text::RichText>,
    color: Option<notion_client::objects::block::TextColor>,
) -> TextBlockContent {
    TextBlockContent {
        rich_text: convert_rich_text_array(rich_text),
        color: convert_block_color(
            color.unwrap_or(notion_client::objects::block::TextColor::Default),
        ),
    }
}

fn convert_rich_text_array(
    rich_texts: Vec<notion_client::objects::rich_text::RichText>,
) -> Vec<RichTextItem> {
    rich_texts.into_iter().map(convert_rich_text).collect()
}

fn convert_rich_text(rich_text: notion_client::objects::rich_text::RichText) -> RichTextItem {
    use notion_client::objects::rich_text::RichText as NcRichText;

    match rich_text {
        NcRichText::Text {
            text,
            plain_text,
            href,
            ..
        } => RichTextItem {
            kind: RichTextKind::Text,
            // Request echoes sometimes omit plain_text; the content is the same string.
            plain_text: plain_text.unwrap_or(text.content),
            href,
        },

        NcRichText::Mention {
            plain_text, href, ..
        } => RichTextItem {
            kind: RichTextKind::Mention,
            plain_text,
            href,
        },

        NcRichText::Equation {
            plain_text, href, ..
        } => RichTextItem {
            kind: RichTextKind::Equation,
            plain_text,
            href,
        },

        _ => RichTextItem {
            kind: RichTextKind::Other,
            plain_text: String::new(),
            href: None,
        },
    }
}

/// Generates a color conversion function from a Notion color enum to our Color type.
/// `*Background` variants map to their base colors.
macro_rules! impl_color_conversion {
    ($fn_name:ident, $source:ty) => {
        fn $fn_name(color: $source) -> Color {
            match color {
                <$source>::Default => Color::Default,
                <$source>::Gray | <$source>::GrayBackground => Color::Gray,
                <$source>::Brown | <$source>::BrownBackground => Color::Brown,
                <$source>::Orange | <$source>::OrangeBackground => Color::Orange,
                <$source>::Yellow | <$source>::YellowBackground => Color::Yellow,
                <$source>::Green | <$source>::GreenBackground => Color::Green,
                <$source>::Blue | <$source>::BlueBackground => Color::Blue,
                <$source>::Purple | <$source>::PurpleBackground => Color::Purple,
                <$source>::Pink | <$source>::PinkBackground => Color::Pink,
                <$source>::Red | <$source>::RedBackground => Color::Red,
            }
        }
    };
}

impl_color_conversion!(convert_block_color, notion_client::objects::block::TextColor);

/// Reads the `"type"` tag (or bare string form) of a serializable API value.
fn serde_type_name<T: serde::Serialize>(value: &T) -> Option<String> {
    match serde_json::to_value(value).ok()? {
        serde_json::Value::String(name) => Some(name),
        serde_json::Value::Object(map) => map
            .get("type")
            .and_then(|t| t.as_str())
            .map(str::to_string),
        _ => None,
    }
}

/// `Divider { divider: .. }` -> `divider`
fn debug_variant_name<T: std::fmt::Debug>(value: &T) -> String {
    let debug = format!("{:?}", value);
    let name: String = debug
        .chars()
        .take_while(|c| c.is_alphanumeric())
        .collect();
    let mut snake = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                snake.push('_');
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Extract page title from properties. A page without a title property has an empty title.
fn extract_page_title(properties: &HashMap<String, PageProperty>) -> PageTitle {
    let title = properties.values().find_map(|property| match property {
        PageProperty::Title { title, .. } => Some(join_plain_text(&convert_rich_text_array(
            title.clone(),
        ))),
        _ => None,
    });

    PageTitle::new(title.unwrap_or_default())
}

fn convert_page_properties(
    properties: HashMap<String, PageProperty>,
) -> HashMap<PropertyName, PropertyValue> {
    properties
        .into_iter()
        .map(|(name, property)| (PropertyName::new(name), convert_page_property(property)))
        .collect()
}

/// Converts a Notion `DateOrDateTime` to a `NaiveDate`.
fn resolve_date(dod: notion_client::objects::page::DateOrDateTime) -> chrono::NaiveDate {
    match dod {
        notion_client::objects::page::DateOrDateTime::Date(d) => d,
        notion_client::objects::page::DateOrDateTime::DateTime(dt) => dt.date_naive(),
    }
}

fn convert_page_property(property: PageProperty) -> PropertyValue {
    match property {
        PageProperty::Title { title, .. } => PropertyValue::Title(convert_rich_text_array(title)),
        PageProperty::RichText { rich_text, .. } => {
            PropertyValue::RichText(convert_rich_text_array(rich_text))
        }
        PageProperty::Select { select, .. } => {
            PropertyValue::Select(select.and_then(|s| s.name))
        }
        PageProperty::Status { status, .. } => {
            PropertyValue::Status(status.and_then(|s| s.name))
        }
        PageProperty::Date { date, .. } => {
            PropertyValue::Date(date.and_then(|d| d.start).map(resolve_date))
        }
        PageProperty::People { people, .. } => {
            PropertyValue::People(people.into_iter().filter_map(|u| u.name).collect())
        }
        PageProperty::Checkbox { checkbox, .. } => PropertyValue::Checkbox(checkbox),
        other => PropertyValue::Other {
            property_type: serde_type_name(&other).unwrap_or_else(|| debug_variant_name(&other)),
        },
    }
}
