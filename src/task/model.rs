//! Task data model

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use thiserror::Error;

/// Date format for deadlines, e.g. `2023-12-01`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-time format for events, e.g. `2023-12-01 1800`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H%M";

/// What kind of task this is, with the kind-specific date payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// A plain to-do with no date attached
    Todo,
    /// Something due by a calendar date
    Deadline { by: NaiveDate },
    /// Something happening at a specific date and time
    Event { at: NaiveDateTime },
}

impl TaskKind {
    /// Single-letter type code used in the persistence format
    pub fn type_code(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// A task: description, done flag, and kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// What needs doing; non-empty once constructed
    pub description: String,

    /// Whether the task has been completed
    pub done: bool,

    /// Kind and date payload
    pub kind: TaskKind,
}

/// Error parsing a persisted task line
#[derive(Debug, Error)]
pub enum ParseTaskError {
    #[error("unknown task type code: {0:?}")]
    UnknownTypeCode(String),

    #[error("expected done flag 0 or 1, got {0:?}")]
    BadDoneFlag(String),

    #[error("task line has too few fields: {0:?}")]
    MissingFields(String),

    #[error("empty task description")]
    EmptyDescription,

    #[error("bad date {0:?}, expected {DATE_FORMAT}")]
    BadDate(String),

    #[error("bad date-time {0:?}, expected {DATE_TIME_FORMAT}")]
    BadDateTime(String),
}

impl Task {
    /// Create a new todo, not yet done
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    /// Create a new deadline task, not yet done
    pub fn deadline(description: impl Into<String>, by: NaiveDate) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { by },
        }
    }

    /// Create a new event task, not yet done
    pub fn event(description: impl Into<String>, at: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { at },
        }
    }

    /// Mark the task as done. Idempotent; there is no way back to not-done.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    fn checkbox(&self) -> &'static str {
        if self.done {
            "[X]"
        } else {
            "[ ]"
        }
    }

    /// Format as one line of the persistence file:
    /// `T | 0 | read book` or `D | 1 | report | 2023-12-01`.
    pub fn to_line(&self) -> String {
        let done = if self.done { 1 } else { 0 };
        match &self.kind {
            TaskKind::Todo => format!("T | {} | {}", done, self.description),
            TaskKind::Deadline { by } => format!(
                "D | {} | {} | {}",
                done,
                self.description,
                by.format(DATE_FORMAT)
            ),
            TaskKind::Event { at } => format!(
                "E | {} | {} | {}",
                done,
                self.description,
                at.format(DATE_TIME_FORMAT)
            ),
        }
    }

    /// Parse one line of the persistence file back into a task,
    /// restoring the done flag exactly.
    ///
    /// Descriptions may themselves contain `" | "`: the type code and done
    /// flag are peeled off the front, the date (for deadlines and events)
    /// off the back, and whatever sits between them is the description.
    pub fn from_line(line: &str) -> Result<Self, ParseTaskError> {
        let mut fields = line.splitn(3, " | ");

        let code = fields
            .next()
            .ok_or_else(|| ParseTaskError::MissingFields(line.to_string()))?;
        let done = match fields.next() {
            Some("0") => false,
            Some("1") => true,
            Some(other) => return Err(ParseTaskError::BadDoneFlag(other.to_string())),
            None => return Err(ParseTaskError::MissingFields(line.to_string())),
        };
        let rest = fields
            .next()
            .ok_or_else(|| ParseTaskError::MissingFields(line.to_string()))?;

        let task = match code {
            "T" => Task {
                description: rest.to_string(),
                done,
                kind: TaskKind::Todo,
            },
            "D" => {
                let (description, date) = rest
                    .rsplit_once(" | ")
                    .ok_or_else(|| ParseTaskError::MissingFields(line.to_string()))?;
                let by = NaiveDate::parse_from_str(date, DATE_FORMAT)
                    .map_err(|_| ParseTaskError::BadDate(date.to_string()))?;
                Task {
                    description: description.to_string(),
                    done,
                    kind: TaskKind::Deadline { by },
                }
            }
            "E" => {
                let (description, date) = rest
                    .rsplit_once(" | ")
                    .ok_or_else(|| ParseTaskError::MissingFields(line.to_string()))?;
                let at = NaiveDateTime::parse_from_str(date, DATE_TIME_FORMAT)
                    .map_err(|_| ParseTaskError::BadDateTime(date.to_string()))?;
                Task {
                    description: description.to_string(),
                    done,
                    kind: TaskKind::Event { at },
                }
            }
            other => return Err(ParseTaskError::UnknownTypeCode(other.to_string())),
        };

        if task.description.is_empty() {
            return Err(ParseTaskError::EmptyDescription);
        }

        Ok(task)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TaskKind::Todo => {
                write!(f, "[T]{} {}", self.checkbox(), self.description)
            }
            TaskKind::Deadline { by } => write!(
                f,
                "[D]{} {} (by: {})",
                self.checkbox(),
                self.description,
                by.format(DATE_FORMAT)
            ),
            TaskKind::Event { at } => write!(
                f,
                "[E]{} {} (at: {})",
                self.checkbox(),
                self.description,
                at.format(DATE_TIME_FORMAT)
            ),
        }
    }
}
