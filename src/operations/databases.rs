// src/operations/databases.rs
use super::{log_failure, warn_if_truncated};
use crate::api::NotionRepository;
use crate::builders::{task_database_schema, TaskItem};
use crate::error::AppError;
use crate::model::requests::{
    CreatePageRequest, CreateDatabaseRequest, ParentRef, PropertyMap, QueryDatabaseRequest,
    UpdatePageRequest,
};
use crate::model::{Database, Page};
use crate::types::{DatabaseId, PageId, RichText};

/// Creates a task database under `parent`.
pub async fn create_database(
    api: &dyn NotionRepository,
    parent: &PageId,
    title: &str,
) -> Result<Database, AppError> {
    let request = CreateDatabaseRequest {
        parent: ParentRef::PageId {
            page_id: parent.clone(),
        },
        title: vec![RichText::plain(title)],
        properties: task_database_schema(),
    };

    let database = api
        .create_database(&request)
        .await
        .map_err(log_failure("create database"))?;
    log::info!("Database created successfully");
    Ok(database)
}

/// Adds one task row. Rows are pages whose parent is the database.
pub async fn add_database_item(
    api: &dyn NotionRepository,
    database: &DatabaseId,
    item: &TaskItem,
) -> Result<Page, AppError> {
    let request = CreatePageRequest {
        parent: ParentRef::DatabaseId {
            database_id: database.clone(),
        },
        properties: item.to_properties(),
        children: Vec::new(),
    };

    let page = api
        .create_page(&request)
        .await
        .map_err(log_failure("add item"))?;
    log::info!("Item added successfully");
    Ok(page)
}

/// Queries `database`, forwarding `filter` as-is when given.
///
/// Returns the first page of results only.
pub async fn query_database(
    api: &dyn NotionRepository,
    database: &DatabaseId,
    filter: Option<serde_json::Value>,
) -> Result<Vec<Page>, AppError> {
    let request = QueryDatabaseRequest { filter };

    let results = api
        .query_database(database, &request)
        .await
        .map_err(log_failure("query database"))?;
    log::info!("{} items found", results.results.len());
    warn_if_truncated(results.has_more, "items");
    Ok(results.results)
}

pub async fn update_database_item(
    api: &dyn NotionRepository,
    item: &PageId,
    properties: PropertyMap,
) -> Result<Page, AppError> {
    let request = UpdatePageRequest { properties };

    let page = api
        .update_page(item, &request)
        .await
        .map_err(log_failure("update item"))?;
    log::info!("Item updated successfully");
    Ok(page)
}
