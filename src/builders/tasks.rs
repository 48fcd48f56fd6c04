// src/builders/tasks.rs
//! The task-tracker schema the walkthrough creates, and the items that fill it.
//!
//! Select values are enums here so an item cannot name an option the schema
//! does not define.

use super::properties::{date_value, rich_text_value, select_value, title_value};
use crate::model::requests::{PropertyMap, PropertySchema, SchemaMap, SelectOptionSpec};
use crate::types::{Color, PropertyName, ValidationError};
use std::str::FromStr;

pub const NAME_PROPERTY: &str = "Name";
pub const STATUS_PROPERTY: &str = "Status";
pub const PRIORITY_PROPERTY: &str = "Priority";
pub const DUE_DATE_PROPERTY: &str = "Due Date";
pub const ASSIGNEE_PROPERTY: &str = "Assignee";
pub const NOTES_PROPERTY: &str = "Notes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done];

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn color(self) -> Color {
        match self {
            TaskStatus::Pending => Color::Red,
            TaskStatus::InProgress => Color::Yellow,
            TaskStatus::Done => Color::Green,
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidSelectValue {
                property: STATUS_PROPERTY,
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }

    pub fn color(self) -> Color {
        match self {
            TaskPriority::Low => Color::Blue,
            TaskPriority::Medium => Color::Yellow,
            TaskPriority::High => Color::Red,
        }
    }
}

impl FromStr for TaskPriority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidSelectValue {
                property: PRIORITY_PROPERTY,
                value: s.to_string(),
            })
    }
}

/// Column layout of the task database, in display order.
pub fn task_database_schema() -> SchemaMap {
    let options = |pairs: Vec<(&str, Color)>| PropertySchema::Select {
        options: pairs
            .into_iter()
            .map(|(name, color)| SelectOptionSpec {
                name: name.to_string(),
                color,
            })
            .collect(),
    };

    let mut schema = SchemaMap::new();
    schema.insert(PropertyName::new(NAME_PROPERTY), PropertySchema::Title {});
    schema.insert(
        PropertyName::new(STATUS_PROPERTY),
        options(
            TaskStatus::ALL
                .iter()
                .map(|s| (s.label(), s.color()))
                .collect(),
        ),
    );
    schema.insert(
        PropertyName::new(PRIORITY_PROPERTY),
        options(
            TaskPriority::ALL
                .iter()
                .map(|p| (p.label(), p.color()))
                .collect(),
        ),
    );
    schema.insert(PropertyName::new(DUE_DATE_PROPERTY), PropertySchema::Date {});
    schema.insert(PropertyName::new(ASSIGNEE_PROPERTY), PropertySchema::People {});
    schema.insert(PropertyName::new(NOTES_PROPERTY), PropertySchema::RichText {});
    schema
}

/// One row of the task database.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskItem {
    pub name: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: chrono::NaiveDate,
    pub notes: Option<String>,
}

impl TaskItem {
    pub fn new(
        name: impl Into<String>,
        status: TaskStatus,
        priority: TaskPriority,
        due_date: chrono::NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            priority,
            due_date,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Property values for this item. Absent notes are written as an empty run.
    pub fn to_properties(&self) -> PropertyMap {
        let mut properties = PropertyMap::new();
        properties.insert(PropertyName::new(NAME_PROPERTY), title_value(&self.name));
        properties.insert(
            PropertyName::new(STATUS_PROPERTY),
            select_value(self.status.label()),
        );
        properties.insert(
            PropertyName::new(PRIORITY_PROPERTY),
            select_value(self.priority.label()),
        );
        properties.insert(
            PropertyName::new(DUE_DATE_PROPERTY),
            date_value(self.due_date),
        );
        properties.insert(
            PropertyName::new(NOTES_PROPERTY),
            rich_text_value(self.notes.as_deref().unwrap_or_default()),
        );
        properties
    }
}

/// Properties that move an item to `status`.
pub fn status_update(status: TaskStatus) -> PropertyMap {
    let mut properties = PropertyMap::new();
    properties.insert(
        PropertyName::new(STATUS_PROPERTY),
        select_value(status.label()),
    );
    properties
}
