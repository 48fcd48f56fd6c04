// src/api/client.rs
//! Pure HTTP client wrapper for Notion API.
//!
//! This module provides a thin wrapper around reqwest for making
//! HTTP requests to the Notion API. It handles authentication and
//! basic request/response operations; parsing lives in `parser`.

use super::parser;
use crate::error::AppError;
use crate::model::requests::{
    AppendBlockChildrenRequest, BlockContent, CreateDatabaseRequest, CreatePageRequest,
    QueryDatabaseRequest, UpdatePageRequest,
};
use crate::model::{Block, Database, Page, ResultsPage};
use crate::types::{ApiKey, BlockId, DatabaseId, PageId};
use reqwest::{header, Client, Response};
use serde::Serialize;

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE_URL: &str = "https://api.notion.com/v1";

/// A thin wrapper around reqwest Client for Notion API requests.
///
/// Built once at startup; cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    fn url(endpoint: &str) -> String {
        format!("{}/{}", API_BASE_URL, endpoint)
    }

    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = Self::url(endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = Self::url(endpoint);
        log::debug!("POST {}", url);
        log_body(body);
        Ok(self.client.post(url).json(body).send().await?)
    }

    pub async fn patch<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        let url = Self::url(endpoint);
        log::debug!("PATCH {}", url);
        log_body(body);
        Ok(self.client.patch(url).json(body).send().await?)
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = Self::url(endpoint);
        log::debug!("DELETE {}", url);
        Ok(self.client.delete(url).send().await?)
    }
}

fn log_body<T: Serialize>(body: &T) {
    if log::log_enabled!(log::Level::Trace) {
        log::trace!(
            "   Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "Failed to serialize".to_string())
        );
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, AppError> {
        let response = self.post("pages", request).await?;
        parser::parse_page_response(extract_response_text(response).await?)
    }

    async fn retrieve_page(&self, id: &PageId) -> Result<Page, AppError> {
        let endpoint = format!("pages/{}", id.to_dashed());
        let response = self.get(&endpoint).await?;
        parser::parse_page_response(extract_response_text(response).await?)
    }

    async fn update_page(
        &self,
        id: &PageId,
        request: &UpdatePageRequest,
    ) -> Result<Page, AppError> {
        let endpoint = format!("pages/{}", id.to_dashed());
        let response = self.patch(&endpoint, request).await?;
        parser::parse_page_response(extract_response_text(response).await?)
    }

    async fn create_database(
        &self,
        request: &CreateDatabaseRequest,
    ) -> Result<Database, AppError> {
        let response = self.post("databases", request).await?;
        parser::parse_database_response(extract_response_text(response).await?)
    }

    async fn query_database(
        &self,
        id: &DatabaseId,
        request: &QueryDatabaseRequest,
    ) -> Result<ResultsPage<Page>, AppError> {
        let endpoint = format!("databases/{}/query", id.to_dashed());
        let response = self.post(&endpoint, request).await?;
        parser::parse_pages_results(extract_response_text(response).await?)
    }

    async fn append_block_children(
        &self,
        parent: &BlockId,
        request: &AppendBlockChildrenRequest,
    ) -> Result<ResultsPage<Block>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_dashed());
        let response = self.patch(&endpoint, request).await?;
        parser::parse_blocks_results(extract_response_text(response).await?)
    }

    async fn list_block_children(
        &self,
        parent: &BlockId,
    ) -> Result<ResultsPage<Block>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_dashed());
        let response = self.get(&endpoint).await?;
        parser::parse_blocks_results(extract_response_text(response).await?)
    }

    async fn update_block(
        &self,
        id: &BlockId,
        content: &BlockContent,
    ) -> Result<Block, AppError> {
        let endpoint = format!("blocks/{}", id.to_dashed());
        let response = self.patch(&endpoint, content).await?;
        parser::parse_block_response(extract_response_text(response).await?)
    }

    async fn delete_block(&self, id: &BlockId) -> Result<Block, AppError> {
        let endpoint = format!("blocks/{}", id.to_dashed());
        let response = self.delete(&endpoint).await?;
        parser::parse_block_response(extract_response_text(response).await?)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    log::debug!("{} from {}", status, url);

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
