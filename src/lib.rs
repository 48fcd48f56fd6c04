// src/lib.rs
//! notion-crud library: create, read, update and delete Notion pages, databases and blocks.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ExampleConfig`
//! - **Domain model**: `Page`, `Database`, `Block` and the request bodies in `model::requests`
//! - **Domain types**: `ApiKey`, `PageId`, `DatabaseId`, `BlockId`, `RichText`, etc.
//! - **Builders**: pure payload constructors for blocks, properties and task rows
//! - **API client**: `NotionRepository`, `NotionHttpClient`, parsers
//! - **Operations**: one logged wrapper per remote call
//! - **Showcase**: the end-to-end walkthrough the binary runs

pub mod api;
pub mod builders;
mod config;
mod error;
pub mod model;
pub mod operations;
mod showcase;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionClientError, NotionErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{
    CommandLineInput, ExampleConfig, API_TOKEN_VAR, DATABASE_ID_VAR, PAGE_ID_VAR,
};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockCommon, Database, DatabaseTitle, Page, PageTitle, Parent, PropertyValue,
    ResultsPage,
};

// --- Domain Types ---
pub use crate::types::{
    ApiKey, BlockId, Color, DatabaseId, PageId, PropertyName, RichText, RichTextItem,
};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse,
    parser::{
        parse_block_response, parse_blocks_results, parse_database_response,
        parse_page_response, parse_pages_results,
    },
    NotionHttpClient, NotionRepository,
};

// --- Walkthrough ---
pub use crate::showcase::{
    sample_blocks, sample_tasks, SectionOutcome, Showcase, ShowcaseSummary, DATABASE_TITLE,
    PAGE_TITLE, UPDATED_PAGE_TITLE, UPDATED_PARAGRAPH,
};
