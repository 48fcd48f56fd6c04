// src/builders/blocks.rs
//! Pure constructors for block payloads.

use crate::model::requests::{BlockContent, BlockKind, CodeBody, NewBlock, RichTextBody};
use crate::types::{RichText, ValidationError};
use std::str::FromStr;

/// Language tag used for code blocks when the caller does not name one.
pub const DEFAULT_CODE_LANGUAGE: &str = "javascript";

/// Heading depth. Notion has exactly three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeadingLevel {
    #[default]
    One,
    Two,
    Three,
}

impl HeadingLevel {
    /// The block kind each level maps to.
    pub fn block_kind(self) -> BlockKind {
        match self {
            HeadingLevel::One => BlockKind::Heading1,
            HeadingLevel::Two => BlockKind::Heading2,
            HeadingLevel::Three => BlockKind::Heading3,
        }
    }
}

impl FromStr for HeadingLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(HeadingLevel::One),
            "2" => Ok(HeadingLevel::Two),
            "3" => Ok(HeadingLevel::Three),
            other => Err(ValidationError::InvalidHeadingLevel(other.to_string())),
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = ValidationError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        level.to_string().parse()
    }
}

fn single_run(text: &str) -> RichTextBody {
    RichTextBody {
        rich_text: vec![RichText::plain(text)],
    }
}

/// Paragraph content without the block envelope, as used by block updates.
pub fn paragraph_content(text: &str) -> BlockContent {
    BlockContent::Paragraph(single_run(text))
}

pub fn paragraph_block(text: &str) -> NewBlock {
    NewBlock::new(paragraph_content(text))
}

pub fn heading_block(text: &str, level: HeadingLevel) -> NewBlock {
    let body = single_run(text);
    let content = match level.block_kind() {
        BlockKind::Heading2 => BlockContent::Heading2(body),
        BlockKind::Heading3 => BlockContent::Heading3(body),
        _ => BlockContent::Heading1(body),
    };
    NewBlock::new(content)
}

pub fn bulleted_list_item_block(text: &str) -> NewBlock {
    NewBlock::new(BlockContent::BulletedListItem(single_run(text)))
}

pub fn numbered_list_item_block(text: &str) -> NewBlock {
    NewBlock::new(BlockContent::NumberedListItem(single_run(text)))
}

/// Code block; `language` falls back to [`DEFAULT_CODE_LANGUAGE`].
pub fn code_block(code: &str, language: Option<&str>) -> NewBlock {
    NewBlock::new(BlockContent::Code(CodeBody {
        rich_text: vec![RichText::plain(code)],
        language: language.unwrap_or(DEFAULT_CODE_LANGUAGE).to_string(),
    }))
}
