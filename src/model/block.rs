use super::blocks::*;
use super::common::BlockCommon;
use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Unsupported($pattern) => $result,
        }
    };
}

/// A block read back from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading1(Heading1Block),
    Heading2(Heading2Block),
    Heading3(Heading3Block),
    BulletedListItem(BulletedListItemBlock),
    NumberedListItem(NumberedListItemBlock),
    Code(CodeBlock),
    Unsupported(UnsupportedBlock),
}

impl Block {
    pub fn id(&self) -> &BlockId {
        match_all_blocks!(self, b => &b.common.id)
    }

    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    /// The API type tag, e.g. `heading_2`.
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::Code(_) => "code",
            Block::Unsupported(b) => &b.block_type,
        }
    }

    /// Plain text of the block, for blocks that carry text.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Paragraph(b) => Some(b.content.plain_text()),
            Block::Heading1(b) => Some(b.content.plain_text()),
            Block::Heading2(b) => Some(b.content.plain_text()),
            Block::Heading3(b) => Some(b.content.plain_text()),
            Block::BulletedListItem(b) => Some(b.content.plain_text()),
            Block::NumberedListItem(b) => Some(b.content.plain_text()),
            Block::Code(b) => Some(b.content.plain_text()),
            Block::Unsupported(_) => None,
        }
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }
}
