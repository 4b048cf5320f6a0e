//! Free-text command parser
//!
//! Turns one line of chat input into a [`Command`]. Parsing never mutates
//! anything; a bad line is a [`CommandError`] whose message is shown to the
//! user as-is.

use chrono::{NaiveDate, NaiveDateTime};

use super::{Command, CommandError};
use crate::task::model::{DATE_FORMAT, DATE_TIME_FORMAT};

/// Parse one line of user input
pub fn parse(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    let (keyword, rest) = match input.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (input, ""),
    };

    match keyword {
        "todo" => parse_todo(rest),
        "deadline" => parse_deadline(rest),
        "event" => parse_event(rest),
        "done" | "mark" => parse_index("done", rest).map(Command::Done),
        "delete" => parse_index("delete", rest).map(Command::Delete),
        "list" if rest.is_empty() => Ok(Command::List),
        "bye" if rest.is_empty() => Ok(Command::Bye),
        _ => Err(CommandError::UnknownCommand),
    }
}

fn parse_todo(rest: &str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::EmptyTodo);
    }
    Ok(Command::AddTodo(rest.to_string()))
}

fn parse_deadline(rest: &str) -> Result<Command, CommandError> {
    let (description, date) = split_on_marker("deadline", "/by", rest)?;
    let by = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| CommandError::BadDeadlineDate)?;
    Ok(Command::AddDeadline {
        description: description.to_string(),
        by,
    })
}

fn parse_event(rest: &str) -> Result<Command, CommandError> {
    let (description, date) = split_on_marker("event", "/at", rest)?;
    let at = NaiveDateTime::parse_from_str(date, DATE_TIME_FORMAT)
        .map_err(|_| CommandError::BadEventDateTime)?;
    Ok(Command::AddEvent {
        description: description.to_string(),
        at,
    })
}

/// Split `<description> /by <date>` style input on its marker. The marker
/// only counts as a standalone word, so a description containing `x/bypass`
/// does not trip it. Both sides are trimmed and the description must be
/// non-empty.
fn split_on_marker<'a>(
    keyword: &'static str,
    marker: &'static str,
    rest: &'a str,
) -> Result<(&'a str, &'a str), CommandError> {
    let padded = format!(" {} ", rest);
    let at = padded
        .find(&format!(" {} ", marker))
        .ok_or(CommandError::MissingSeparator { keyword, marker })?;

    // `at` is the index of the space before the marker in `padded`, which is
    // where the marker itself starts in `rest`.
    let description = rest[..at].trim();
    let date = rest[at + marker.len()..].trim();

    if description.is_empty() {
        return Err(CommandError::EmptyDescription { keyword });
    }
    Ok((description, date))
}

fn parse_index(keyword: &'static str, rest: &str) -> Result<usize, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingIndex { keyword });
    }
    match rest.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::BadIndex {
            given: rest.to_string(),
        }),
    }
}
