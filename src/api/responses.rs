// src/api/responses.rs
//! API response types using the notion-client object definitions.

use crate::error::AppError;
use crate::model::ResultsPage;
use serde::{Deserialize, Serialize};

pub use notion_client::objects::{
    block::Block as NotionBlock, database::Database as NotionDatabase, error::Error as NotionError,
    page::Page as NotionPage,
};

/// Generic paginated response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub object: String,
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// Database query response using notion-client types
pub type QueryDatabaseResponse = PaginatedResponse<NotionPage>;

/// Block children response using notion-client types
pub type BlockChildrenResponse = PaginatedResponse<NotionBlock>;

/// Trait for converting notion-client types to domain types
pub trait ToDomain<T> {
    fn to_domain(self) -> Result<T, AppError>;
}

impl ToDomain<crate::model::Page> for NotionPage {
    fn to_domain(self) -> Result<crate::model::Page, AppError> {
        super::notion_client_adapter::convert_page(self)
    }
}

impl ToDomain<crate::model::Database> for NotionDatabase {
    fn to_domain(self) -> Result<crate::model::Database, AppError> {
        super::notion_client_adapter::convert_database(self)
    }
}

impl ToDomain<crate::model::Block> for NotionBlock {
    fn to_domain(self) -> Result<crate::model::Block, AppError> {
        super::notion_client_adapter::convert_block(self)
    }
}

impl<T> PaginatedResponse<T> {
    /// Converts every result, keeping the cursor metadata.
    pub fn into_domain<D>(self) -> Result<ResultsPage<D>, AppError>
    where
        T: ToDomain<D>,
    {
        Ok(ResultsPage {
            results: self
                .results
                .into_iter()
                .map(ToDomain::to_domain)
                .collect::<Result<Vec<_>, _>>()?,
            next_cursor: self.next_cursor,
            has_more: self.has_more,
        })
    }
}
