// tests/common/mod.rs
//! Shared test doubles: a recording repository and a per-thread log capture.
#![allow(dead_code)]

use notion_crud::model::blocks::{
    BulletedListItemBlock, CodeBlock, Heading1Block, Heading2Block, Heading3Block,
    NumberedListItemBlock, ParagraphBlock, TextBlockContent,
};
use notion_crud::model::requests::{
    AppendBlockChildrenRequest, BlockContent, CreateDatabaseRequest, CreatePageRequest,
    QueryDatabaseRequest, UpdatePageRequest,
};
use notion_crud::types::RichText;
use notion_crud::{
    AppError, ApiKey, Block, BlockCommon, BlockId, Database, DatabaseId, DatabaseTitle,
    ExampleConfig, NotionErrorCode, NotionRepository, Page, PageId, PageTitle, ResultsPage,
    RichTextItem,
};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Mutex, Once};

pub const PARENT_PAGE: &str = "11111111111111111111111111111111";
pub const CREATED_PAGE: &str = "22222222222222222222222222222222";
pub const CREATED_DATABASE: &str = "33333333333333333333333333333333";
pub const ERROR_BODY: &str = r#"{"object":"error","status":404,"code":"object_not_found","message":"Could not find page."}"#;

/// One call made against the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub target: Option<String>,
    pub body: Option<Value>,
}

/// In-memory [`NotionRepository`] that records every call.
///
/// Appended blocks are kept so that listing children returns them.
#[derive(Default)]
pub struct RecordingRepository {
    calls: Mutex<Vec<RecordedCall>>,
    blocks: Mutex<Vec<Block>>,
    fail_all: bool,
    query_has_more: bool,
}

pub fn not_found_error() -> AppError {
    AppError::NotionService {
        code: NotionErrorCode::ObjectNotFound,
        message: "Could not find page.".to_string(),
        status: StatusCode::NOT_FOUND,
        body: Some(ERROR_BODY.to_string()),
    }
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a 404 `object_not_found` error.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Query responses report more results than they carry.
    pub fn truncated_queries() -> Self {
        Self {
            query_has_more: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<&'static str> {
        self.calls().iter().map(|call| call.method).collect()
    }

    fn record<B: Serialize>(
        &self,
        method: &'static str,
        target: Option<String>,
        body: Option<&B>,
    ) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            target,
            body: body.map(|b| serde_json::to_value(b).unwrap()),
        });
        if self.fail_all {
            Err(not_found_error())
        } else {
            Ok(())
        }
    }
}

pub fn page(id: &str, title: &str) -> Page {
    Page {
        id: PageId::parse(id).unwrap(),
        title: PageTitle::new(title),
        url: format!("https://www.notion.so/{}", id),
        properties: HashMap::new(),
        parent: None,
        archived: false,
    }
}

fn text_content(rich_text: &[RichText]) -> TextBlockContent {
    TextBlockContent {
        rich_text: rich_text
            .iter()
            .map(|run| RichTextItem::plain_text(run.content()))
            .collect(),
        ..Default::default()
    }
}

/// What the API would echo back for `content` once stored.
pub fn stored_block(content: &BlockContent) -> Block {
    let common = BlockCommon::new(BlockId::new_v4());
    let text = text_content(content.rich_text());
    match content {
        BlockContent::Paragraph(_) => Block::Paragraph(ParagraphBlock {
            common,
            content: text,
        }),
        BlockContent::Heading1(_) => Block::Heading1(Heading1Block {
            common,
            content: text,
        }),
        BlockContent::Heading2(_) => Block::Heading2(Heading2Block {
            common,
            content: text,
        }),
        BlockContent::Heading3(_) => Block::Heading3(Heading3Block {
            common,
            content: text,
        }),
        BlockContent::BulletedListItem(_) => Block::BulletedListItem(BulletedListItemBlock {
            common,
            content: text,
        }),
        BlockContent::NumberedListItem(_) => Block::NumberedListItem(NumberedListItemBlock {
            common,
            content: text,
        }),
        BlockContent::Code(body) => Block::Code(CodeBlock {
            common,
            language: body.language.clone(),
            content: text,
        }),
    }
}

#[async_trait::async_trait]
impl NotionRepository for RecordingRepository {
    async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, AppError> {
        self.record("create_page", None, Some(request))?;
        Ok(page(CREATED_PAGE, "My Test Page"))
    }

    async fn retrieve_page(&self, id: &PageId) -> Result<Page, AppError> {
        self.record::<()>("retrieve_page", Some(id.to_string()), None)?;
        Ok(page(id.as_str(), "My Test Page"))
    }

    async fn update_page(
        &self,
        id: &PageId,
        request: &UpdatePageRequest,
    ) -> Result<Page, AppError> {
        self.record("update_page", Some(id.to_string()), Some(request))?;
        Ok(page(id.as_str(), ""))
    }

    async fn create_database(
        &self,
        request: &CreateDatabaseRequest,
    ) -> Result<Database, AppError> {
        self.record("create_database", None, Some(request))?;
        Ok(Database {
            id: DatabaseId::parse(CREATED_DATABASE).unwrap(),
            title: DatabaseTitle::new(vec![RichTextItem::plain_text("Tasks")]),
            url: format!("https://www.notion.so/{}", CREATED_DATABASE),
            property_names: Vec::new(),
            parent: None,
            archived: false,
        })
    }

    async fn query_database(
        &self,
        id: &DatabaseId,
        request: &QueryDatabaseRequest,
    ) -> Result<ResultsPage<Page>, AppError> {
        self.record("query_database", Some(id.to_string()), Some(request))?;
        Ok(ResultsPage {
            results: vec![
                page("44444444444444444444444444444444", "Implement API integration"),
                page("55555555555555555555555555555555", ""),
            ],
            next_cursor: self.query_has_more.then(|| "cursor".to_string()),
            has_more: self.query_has_more,
        })
    }

    async fn append_block_children(
        &self,
        parent: &BlockId,
        request: &AppendBlockChildrenRequest,
    ) -> Result<ResultsPage<Block>, AppError> {
        self.record("append_block_children", Some(parent.to_string()), Some(request))?;
        let created: Vec<Block> = request
            .children
            .iter()
            .map(|block| stored_block(block.content()))
            .collect();
        self.blocks.lock().unwrap().extend(created.iter().cloned());
        Ok(ResultsPage::complete(created))
    }

    async fn list_block_children(
        &self,
        parent: &BlockId,
    ) -> Result<ResultsPage<Block>, AppError> {
        self.record::<()>("list_block_children", Some(parent.to_string()), None)?;
        Ok(ResultsPage::complete(self.blocks.lock().unwrap().clone()))
    }

    async fn update_block(
        &self,
        id: &BlockId,
        content: &BlockContent,
    ) -> Result<Block, AppError> {
        self.record("update_block", Some(id.to_string()), Some(content))?;
        Ok(stored_block(content))
    }

    async fn delete_block(&self, id: &BlockId) -> Result<Block, AppError> {
        self.record::<()>("delete_block", Some(id.to_string()), None)?;
        let mut blocks = self.blocks.lock().unwrap();
        let position = blocks.iter().position(|block| block.id() == id);
        Ok(match position {
            Some(index) => blocks.remove(index),
            None => stored_block(&notion_crud::builders::paragraph_content("")),
        })
    }
}

pub fn config(page_id: Option<&str>, database_id: Option<&str>, cleanup: bool) -> ExampleConfig {
    ExampleConfig {
        api_key: ApiKey::new("secret_test_token").unwrap(),
        page_id: page_id.map(|id| PageId::parse(id).unwrap()),
        database_id: database_id.map(|id| DatabaseId::parse(id).unwrap()),
        cleanup,
        verbose: false,
    }
}

// --- Log capture ---

thread_local! {
    static CAPTURED: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CapturingLogger;

impl log::Log for CapturingLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::Level::Info
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) && record.target().starts_with("notion_crud") {
            CAPTURED.with(|captured| {
                captured
                    .borrow_mut()
                    .push((record.level(), record.args().to_string()))
            });
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;
static INIT: Once = Once::new();

/// Installs the capturing logger (once per process) and clears this thread's buffer.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger is installed in tests");
        log::set_max_level(log::LevelFilter::Info);
    });
    CAPTURED.with(|captured| captured.borrow_mut().clear());
}

/// Drains the lines logged on this thread since the last call.
pub fn take_logs() -> Vec<(log::Level, String)> {
    CAPTURED.with(|captured| std::mem::take(&mut *captured.borrow_mut()))
}
