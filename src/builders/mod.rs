// src/builders/mod.rs
//! Payload builders: pure functions from plain values to request bodies.

pub mod blocks;
pub mod properties;
pub mod tasks;

pub use blocks::{
    bulleted_list_item_block, code_block, heading_block, numbered_list_item_block,
    paragraph_block, paragraph_content, HeadingLevel, DEFAULT_CODE_LANGUAGE,
};
pub use properties::{
    date_value, page_title_properties, rich_text_value, select_value, title_value,
};
pub use tasks::{status_update, task_database_schema, TaskItem, TaskPriority, TaskStatus};
