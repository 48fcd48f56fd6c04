// src/api/mod.rs
//! Notion API interaction: the remote operations the walkthrough performs.
//!
//! Operations depend on [`NotionRepository`], never on HTTP details, so a
//! recording stub can stand in for the network in tests.

pub mod client;
pub mod notion_client_adapter;
pub mod parser;
mod responses;

use crate::error::AppError;
use crate::model::requests::{
    AppendBlockChildrenRequest, BlockContent, CreateDatabaseRequest, CreatePageRequest,
    QueryDatabaseRequest, UpdatePageRequest,
};
use crate::model::{Block, Database, Page, ResultsPage};
use crate::types::{BlockId, DatabaseId, PageId};

/// The remote create/read/update/delete surface of a Notion workspace.
///
/// Each method is one HTTP call. Implementations must not retry.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// `POST /pages`. Also creates database items when the parent is a database.
    async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, AppError>;
    async fn retrieve_page(&self, id: &PageId) -> Result<Page, AppError>;
    async fn update_page(
        &self,
        id: &PageId,
        request: &UpdatePageRequest,
    ) -> Result<Page, AppError>;

    async fn create_database(&self, request: &CreateDatabaseRequest)
        -> Result<Database, AppError>;
    /// First page of results only; cursors are not followed.
    async fn query_database(
        &self,
        id: &DatabaseId,
        request: &QueryDatabaseRequest,
    ) -> Result<ResultsPage<Page>, AppError>;

    async fn append_block_children(
        &self,
        parent: &BlockId,
        request: &AppendBlockChildrenRequest,
    ) -> Result<ResultsPage<Block>, AppError>;
    /// First page of children only; cursors are not followed.
    async fn list_block_children(&self, parent: &BlockId)
        -> Result<ResultsPage<Block>, AppError>;
    async fn update_block(&self, id: &BlockId, content: &BlockContent)
        -> Result<Block, AppError>;
    /// Archives the block; the API returns it with `archived: true`.
    async fn delete_block(&self, id: &BlockId) -> Result<Block, AppError>;
}

pub use client::NotionHttpClient;
