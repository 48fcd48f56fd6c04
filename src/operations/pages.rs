// src/operations/pages.rs
use super::log_failure;
use crate::api::NotionRepository;
use crate::builders::{page_title_properties, paragraph_block};
use crate::error::AppError;
use crate::model::requests::{CreatePageRequest, ParentRef, UpdatePageRequest};
use crate::model::Page;
use crate::types::PageId;

/// Body of the paragraph every created page starts with.
pub const CREATED_PAGE_PARAGRAPH: &str = "This page was created via the Notion API.";

/// Creates a child page of `parent` titled `title`.
pub async fn create_page(
    api: &dyn NotionRepository,
    parent: &PageId,
    title: &str,
) -> Result<Page, AppError> {
    let request = CreatePageRequest {
        parent: ParentRef::PageId {
            page_id: parent.clone(),
        },
        properties: page_title_properties(title),
        children: vec![paragraph_block(CREATED_PAGE_PARAGRAPH)],
    };

    let page = api
        .create_page(&request)
        .await
        .map_err(log_failure("create page"))?;
    log::info!("Page created successfully");
    Ok(page)
}

pub async fn get_page(api: &dyn NotionRepository, id: &PageId) -> Result<Page, AppError> {
    let page = api
        .retrieve_page(id)
        .await
        .map_err(log_failure("retrieve page"))?;
    log::info!("Page retrieved successfully");
    Ok(page)
}

/// Replaces the page's title property.
pub async fn update_page_title(
    api: &dyn NotionRepository,
    id: &PageId,
    title: &str,
) -> Result<Page, AppError> {
    let request = UpdatePageRequest {
        properties: page_title_properties(title),
    };

    let page = api
        .update_page(id, &request)
        .await
        .map_err(log_failure("update page title"))?;
    log::info!("Page title updated successfully");
    Ok(page)
}
