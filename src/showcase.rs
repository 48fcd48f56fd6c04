// src/showcase.rs
//! The walkthrough: database, page, then block examples against one parent page.
//!
//! Sections run strictly in order and each remote call is awaited before the
//! next one starts. A failing section is reported and the next one still runs.

use crate::api::NotionRepository;
use crate::builders::{
    bulleted_list_item_block, code_block, heading_block, paragraph_block, paragraph_content,
    status_update, HeadingLevel, TaskItem, TaskPriority, TaskStatus, DEFAULT_CODE_LANGUAGE,
};
use crate::config::{ExampleConfig, PAGE_ID_VAR};
use crate::model::requests::NewBlock;
use crate::model::Page;
use crate::operations;
use crate::types::PageId;
use anyhow::Context;

pub const DATABASE_TITLE: &str = "Tasks";
pub const PAGE_TITLE: &str = "My Test Page";
pub const UPDATED_PAGE_TITLE: &str = "My Updated Page";
pub const UPDATED_PARAGRAPH: &str = "This paragraph was updated via the Notion API.";
const UNTITLED: &str = "Untitled";

/// How a section ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOutcome {
    Completed,
    Skipped,
    Failed,
}

/// Outcomes of a full run, in section order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseSummary {
    pub databases: SectionOutcome,
    pub pages: SectionOutcome,
    pub blocks: SectionOutcome,
}

impl ShowcaseSummary {
    pub fn failures(&self) -> usize {
        [self.databases, self.pages, self.blocks]
            .iter()
            .filter(|outcome| **outcome == SectionOutcome::Failed)
            .count()
    }
}

/// The two task rows every run adds.
pub fn sample_tasks() -> Vec<TaskItem> {
    vec![
        TaskItem::new(
            "Implement API integration",
            TaskStatus::InProgress,
            TaskPriority::High,
            chrono::NaiveDate::from_ymd_opt(2025, 6, 15).unwrap_or_default(),
        )
        .with_notes("Integrate with the Notion API to sync data"),
        TaskItem::new(
            "Test features",
            TaskStatus::Pending,
            TaskPriority::Medium,
            chrono::NaiveDate::from_ymd_opt(2025, 6, 20).unwrap_or_default(),
        )
        .with_notes("Run integration and unit tests"),
    ]
}

/// The block list appended to the parent page, in display order.
pub fn sample_blocks() -> Vec<NewBlock> {
    vec![
        heading_block("Example Section", HeadingLevel::One),
        paragraph_block("This is an example paragraph created via the Notion API."),
        heading_block("Task List", HeadingLevel::Two),
        bulleted_list_item_block("Task 1: Implement integration"),
        bulleted_list_item_block("Task 2: Test features"),
        bulleted_list_item_block("Task 3: Document code"),
        heading_block("Code Example", HeadingLevel::Two),
        code_block(
            r#"console.log("Hello, Notion API!");"#,
            Some(DEFAULT_CODE_LANGUAGE),
        ),
    ]
}

fn display_title(page: &Page) -> &str {
    if page.title().is_empty() {
        UNTITLED
    } else {
        page.title().as_str()
    }
}

pub struct Showcase<'a> {
    api: &'a dyn NotionRepository,
    config: &'a ExampleConfig,
}

impl<'a> Showcase<'a> {
    pub fn new(api: &'a dyn NotionRepository, config: &'a ExampleConfig) -> Self {
        Self { api, config }
    }

    /// Runs every section in order and reports how each one ended.
    pub async fn run_all(&self) -> ShowcaseSummary {
        println!("Starting Notion API examples...");
        if self.config.page_id.is_none() {
            println!(
                "Note: set {} (or pass --page-id) to run every example. Some examples will be skipped.",
                PAGE_ID_VAR
            );
        }

        println!("\n=== Database examples ===\n");
        let databases = report("database", self.run_database_examples().await);

        println!("\n=== Page examples ===\n");
        let pages = report("page", self.run_page_examples().await);

        println!("\n=== Block examples ===\n");
        let blocks = report("block", self.run_block_examples().await);

        println!("\nExamples finished!");
        ShowcaseSummary {
            databases,
            pages,
            blocks,
        }
    }

    fn parent_page(&self, section: &str) -> Option<&'a PageId> {
        let page = self.config.page_id.as_ref();
        if page.is_none() {
            println!(
                "To run the {} examples, set {} in the .env file",
                section, PAGE_ID_VAR
            );
        }
        page
    }

    /// Creates the task database, fills it, lists it and marks the first row done.
    pub async fn run_database_examples(&self) -> anyhow::Result<SectionOutcome> {
        let Some(parent) = self.parent_page("database") else {
            return Ok(SectionOutcome::Skipped);
        };

        let database = operations::create_database(self.api, parent, DATABASE_TITLE)
            .await
            .context("creating the task database")?;
        println!("Database created: {}", database.id);

        for task in sample_tasks() {
            operations::add_database_item(self.api, &database.id, &task)
                .await
                .with_context(|| format!("adding item '{}'", task.name))?;
        }

        let items = operations::query_database(self.api, &database.id, None)
            .await
            .context("querying the task database")?;
        println!("Items in the database:");
        for item in &items {
            println!("- {}", display_title(item));
        }

        if let Some(first) = items.first() {
            operations::update_database_item(self.api, &first.id, status_update(TaskStatus::Done))
                .await
                .context("updating the first item")?;
            println!(
                "First item updated to \"{}\"",
                TaskStatus::Done.label()
            );
        }

        if let Some(existing) = &self.config.database_id {
            let rows = operations::query_database(self.api, existing, None)
                .await
                .with_context(|| format!("querying database {}", existing))?;
            println!("Configured database {} has {} items", existing, rows.len());
        }

        Ok(SectionOutcome::Completed)
    }

    /// Creates a page, reads it back by the returned id, then renames it.
    pub async fn run_page_examples(&self) -> anyhow::Result<SectionOutcome> {
        let Some(parent) = self.parent_page("page") else {
            return Ok(SectionOutcome::Skipped);
        };

        let page = operations::create_page(self.api, parent, PAGE_TITLE)
            .await
            .context("creating the test page")?;
        println!("Page created: {}", page.id);

        let retrieved = operations::get_page(self.api, &page.id)
            .await
            .context("retrieving the test page")?;
        println!("Page retrieved: {}", retrieved.id);

        operations::update_page_title(self.api, &page.id, UPDATED_PAGE_TITLE)
            .await
            .context("renaming the test page")?;
        println!("Page title updated");

        Ok(SectionOutcome::Completed)
    }

    /// Appends the sample blocks, lists them and rewrites the first paragraph.
    pub async fn run_block_examples(&self) -> anyhow::Result<SectionOutcome> {
        let Some(parent) = self.parent_page("block") else {
            return Ok(SectionOutcome::Skipped);
        };
        let parent = parent.as_block_id();

        let added = operations::add_blocks(self.api, &parent, sample_blocks())
            .await
            .context("appending the sample blocks")?;
        println!("{} blocks added", added.len());

        let children = operations::get_child_blocks(self.api, &parent)
            .await
            .context("listing the page's blocks")?;
        println!("Child blocks retrieved");

        if let Some(paragraph) = children.iter().find(|block| block.is_paragraph()) {
            operations::update_block(self.api, paragraph.id(), &paragraph_content(UPDATED_PARAGRAPH))
                .await
                .context("updating the first paragraph")?;
            println!("Paragraph block updated");
        }

        if self.config.cleanup {
            for block in &added {
                operations::delete_block(self.api, block.id())
                    .await
                    .with_context(|| format!("deleting block {}", block.id()))?;
            }
            println!("{} blocks deleted", added.len());
        }

        Ok(SectionOutcome::Completed)
    }
}

fn report(section: &str, result: anyhow::Result<SectionOutcome>) -> SectionOutcome {
    match result {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error running the {} examples: {:#}", section, e);
            SectionOutcome::Failed
        }
    }
}
