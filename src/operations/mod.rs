// src/operations/mod.rs
//! CRUD wrappers over [`NotionRepository`](crate::api::NotionRepository).
//!
//! Every wrapper makes exactly one remote call. Success logs one fixed info
//! line; failure logs one error line and hands the same error back.

pub mod blocks;
pub mod databases;
pub mod pages;

pub use blocks::{add_blocks, delete_block, get_child_blocks, update_block};
pub use databases::{add_database_item, create_database, query_database, update_database_item};
pub use pages::{create_page, get_page, update_page_title, CREATED_PAGE_PARAGRAPH};

use crate::error::AppError;

/// Logs a failed call once, then passes the error through untouched.
fn log_failure(action: &'static str) -> impl FnOnce(AppError) -> AppError {
    move |err| {
        log::error!("Failed to {}: {}", action, err.describe());
        err
    }
}

/// Only the first page is ever returned; say so when the API had more.
fn warn_if_truncated(has_more: bool, what: &str) {
    if has_more {
        log::warn!(
            "More {} are available than were returned; only the first page was fetched",
            what
        );
    }
}
