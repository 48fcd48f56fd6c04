// src/api/parser.rs
//! Response parsing using the notion-client library.
//!
//! Success bodies are deserialized into notion-client objects and converted
//! to the domain model. Error bodies become [`AppError::NotionService`] with
//! the raw body kept for reporting.

use super::client::ApiResponse;
use super::responses::{
    BlockChildrenResponse, NotionBlock, NotionDatabase, NotionError, NotionPage,
    QueryDatabaseResponse, ToDomain,
};
use crate::error::{AppError, NotionClientError, NotionErrorCode};
use crate::model::{Block, Database, Page, ResultsPage};
use reqwest::StatusCode;

/// Maximum characters of a body quoted in deserialization errors.
const BODY_PREVIEW_LENGTH: usize = 500;

/// Parse any Notion API response using notion-client types
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        Err(parse_error_body(&result.data, result.status, &result.url))
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::debug!("Failed to parse response from {}: {}", url, e);

        let preview = if body.len() > BODY_PREVIEW_LENGTH {
            let cut = (0..=BODY_PREVIEW_LENGTH)
                .rev()
                .find(|&i| body.is_char_boundary(i))
                .unwrap_or(0);
            format!("{}...", &body[..cut])
        } else {
            body.to_string()
        };

        NotionClientError::Deserialization {
            source: e,
            body: preview,
        }
        .into()
    })
}

/// Turns a non-2xx response into the error every operation reports.
fn parse_error_body(body: &str, status: StatusCode, url: &str) -> AppError {
    if let Ok(notion_error) = serde_json::from_str::<NotionError>(body) {
        return AppError::NotionService {
            code: NotionErrorCode::from_api_response(&notion_error.code),
            message: notion_error.message,
            status,
            body: Some(body.to_string()),
        };
    }

    AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
        body: None,
    }
}

pub fn parse_page_response(result: ApiResponse<String>) -> Result<Page, AppError> {
    let notion_page: NotionPage = parse_api_response(result)?;
    notion_page.to_domain()
}

pub fn parse_database_response(result: ApiResponse<String>) -> Result<Database, AppError> {
    let notion_database: NotionDatabase = parse_api_response(result)?;
    notion_database.to_domain()
}

pub fn parse_block_response(result: ApiResponse<String>) -> Result<Block, AppError> {
    let notion_block: NotionBlock = parse_api_response(result)?;
    notion_block.to_domain()
}

/// Parses a database query response (first page of results).
pub fn parse_pages_results(result: ApiResponse<String>) -> Result<ResultsPage<Page>, AppError> {
    let response: QueryDatabaseResponse = parse_api_response(result)?;
    response.into_domain()
}

/// Parses a block children response (first page of results).
pub fn parse_blocks_results(result: ApiResponse<String>) -> Result<ResultsPage<Block>, AppError> {
    let response: BlockChildrenResponse = parse_api_response(result)?;
    response.into_domain()
}
