//! Command parsing - free text to intents

pub mod parser;

pub use parser::parse;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// A parsed user intent. Indices are 1-based, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTodo(String),
    AddDeadline { description: String, by: NaiveDate },
    AddEvent { description: String, at: NaiveDateTime },
    List,
    Done(usize),
    Delete(usize),
    Bye,
}

/// User-input format errors. The messages are shown to the user verbatim,
/// so they name the expected shape rather than the parser internals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Please enter something to do.")]
    EmptyTodo,

    #[error("Wrong {keyword} format. Please use: {keyword} <description> {marker} <date>")]
    MissingSeparator {
        keyword: &'static str,
        marker: &'static str,
    },

    #[error("Please give the {keyword} a description.")]
    EmptyDescription { keyword: &'static str },

    #[error("Please enter the deadline date in the following format: YYYY-MM-DD")]
    BadDeadlineDate,

    #[error("Please enter the event time in the following format: YYYY-MM-DD HHMM")]
    BadEventDateTime,

    #[error("Please give {keyword} a task number, e.g. {keyword} 2")]
    MissingIndex { keyword: &'static str },

    #[error("{given:?} is not a task number.")]
    BadIndex { given: String },

    #[error(
        "I don't understand that. Try: todo, deadline, event, list, done, delete or bye."
    )]
    UnknownCommand,
}
