//! Task data model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Parse priority from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" | "med" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single planner entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable opaque identifier, assigned at creation
    pub id: String,

    /// Task title
    pub title: String,

    /// Due date
    pub due_date: NaiveDate,

    /// Priority level
    pub priority: Priority,

    /// Whether the task has been completed (one-way transition)
    #[serde(default)]
    pub completed: bool,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new task
    pub fn new(title: impl Into<String>, due_date: NaiveDate, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            due_date,
            priority,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Mark the task as completed. Completing a completed task is a no-op.
    pub fn complete(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        self.completed_at = Some(Utc::now());
    }

    /// Whether the task is unfinished and due on or before `today`
    pub fn is_due_or_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date <= today
    }
}
