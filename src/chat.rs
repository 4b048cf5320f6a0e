//! Chat session - the controller behind the conversation
//!
//! A [`Session`] owns the task list and the storage handle for its whole
//! lifetime; everything else sees them only for the duration of a call.
//! Input goes in as one line of text, a [`Reply`] comes back out.

use std::fmt::Write as _;
use tracing::debug;

use crate::command::{self, Command};
use crate::storage::{LoadOutcome, Storage, StorageError};
use crate::task::{Task, TaskList};

/// Greeting shown when a session opens
#[derive(Debug)]
pub struct Greeting {
    pub text: String,
    /// True when the task file was just created
    pub fresh: bool,
}

/// One turn of the conversation
#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// True after `bye`; the front end should stop reading input
    pub exit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }
}

pub struct Session {
    tasks: TaskList,
    storage: Storage,
    user_name: String,
}

impl Session {
    /// Open a session over `storage`, loading any persisted tasks.
    /// Only real I/O failures error out; a missing file means a fresh list.
    pub fn open(storage: Storage, user_name: &str) -> Result<(Self, Greeting), StorageError> {
        let (tasks, greeting) = match storage.load()? {
            LoadOutcome::Created => {
                let text = format!(
                    "Hello {}! This is Spongebob!\n\
                     Starting a fresh task list. What can I do for you?",
                    user_name
                );
                (TaskList::new(), Greeting { text, fresh: true })
            }
            LoadOutcome::Loaded { tasks, skipped } => {
                let mut text = format!(
                    "Hello {}! This is Spongebob!\n\
                     You have {} tasks in your list. What can I do for you?",
                    user_name,
                    tasks.len()
                );
                if skipped > 0 {
                    let _ = write!(
                        text,
                        "\n({} line(s) in the task file could not be read and were skipped.)",
                        skipped
                    );
                }
                (TaskList::from_tasks(tasks), Greeting { text, fresh: false })
            }
        };

        Ok((
            Self {
                tasks,
                storage,
                user_name: user_name.to_string(),
            },
            greeting,
        ))
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Handle one line of input and produce the reply text.
    /// Never panics and never returns an error: bad input and failed
    /// persistence both become words in the reply.
    pub fn respond(&mut self, input: &str) -> Reply {
        debug!(input, "handling chat input");
        match command::parse(input) {
            Ok(command) => self.execute(command),
            Err(e) => Reply::text(e.to_string()),
        }
    }

    fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::AddTodo(description) => self.add_task(Task::todo(description)),
            Command::AddDeadline { description, by } => {
                self.add_task(Task::deadline(description, by))
            }
            Command::AddEvent { description, at } => self.add_task(Task::event(description, at)),
            Command::List => self.list(),
            Command::Done(n) => self.done(n),
            Command::Delete(n) => self.delete(n),
            Command::Bye => Reply {
                text: format!("Bye {}! See you again soon!", self.user_name),
                exit: true,
            },
        }
    }

    fn add_task(&mut self, task: Task) -> Reply {
        let saved = self.storage.save_task(&task);
        self.tasks.add(task);
        let count = self.tasks.len();
        let task = &self.tasks.as_slice()[count - 1];

        let mut text = format!(
            "This task has been added successfully:\n  {}\nNow you have {} tasks in the list",
            task, count
        );
        if let Err(e) = saved {
            let _ = write!(text, "\nWarning: the task could not be saved: {}", e);
        }
        Reply::text(text)
    }

    fn list(&self) -> Reply {
        if self.tasks.is_empty() {
            return Reply::text("Your task list is empty.");
        }
        let mut text = String::from("Here are the tasks in your list:");
        for (i, task) in self.tasks.iter().enumerate() {
            let _ = write!(text, "\n{}. {}", i + 1, task);
        }
        Reply::text(text)
    }

    fn done(&mut self, n: usize) -> Reply {
        let mut text = match n.checked_sub(1).and_then(|i| self.tasks.mark_done(i)) {
            Some(task) => format!("Nice! I've marked this task as done:\n  {}", task),
            None => return self.no_such_task(n),
        };
        if let Err(e) = self.storage.update_tasks(self.tasks.as_slice()) {
            let _ = write!(text, "\nWarning: the change could not be saved: {}", e);
        }
        Reply::text(text)
    }

    fn delete(&mut self, n: usize) -> Reply {
        let removed = match n.checked_sub(1).and_then(|i| self.tasks.remove(i)) {
            Some(task) => task,
            None => return self.no_such_task(n),
        };

        let mut text = format!(
            "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list",
            removed,
            self.tasks.len()
        );
        if let Err(e) = self.storage.update_tasks(self.tasks.as_slice()) {
            let _ = write!(text, "\nWarning: the change could not be saved: {}", e);
        }
        Reply::text(text)
    }

    fn no_such_task(&self, n: usize) -> Reply {
        Reply::text(format!(
            "There is no task {}. You have {} tasks in the list.",
            n,
            self.tasks.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn open_session(dir: &std::path::Path) -> Session {
        let storage = Storage::new(dir.join("tasks.txt"));
        let (session, _) = Session::open(storage, "Patrick").unwrap();
        session
    }

    #[test]
    fn test_fresh_session_greets() {
        let temp = tempdir().unwrap();
        let storage = Storage::new(temp.path().join("tasks.txt"));
        let (session, greeting) = Session::open(storage, "Patrick").unwrap();

        assert!(greeting.fresh);
        assert!(greeting.text.contains("Hello Patrick!"));
        assert_eq!(session.task_count(), 0);
    }

    #[test]
    fn test_add_todo_persists_line() {
        let temp = tempdir().unwrap();
        let mut session = open_session(temp.path());

        let reply = session.respond("todo read book");
        assert!(reply.text.contains("added successfully"));
        assert!(reply.text.contains("1 tasks in the list"));
        assert!(!reply.exit);
        assert_eq!(session.task_count(), 1);

        let content = fs::read_to_string(temp.path().join("tasks.txt")).unwrap();
        assert_eq!(content, "T | 0 | read book\n");
    }

    #[test]
    fn test_add_deadline_persists_date() {
        let temp = tempdir().unwrap();
        let mut session = open_session(temp.path());

        session.respond("deadline submit report /by 2023-12-01");

        let content = fs::read_to_string(temp.path().join("tasks.txt")).unwrap();
        assert_eq!(content, "D | 0 | submit report | 2023-12-01\n");
    }

    #[test]
    fn test_bad_input_leaves_state_alone() {
        let temp = tempdir().unwrap();
        let mut session = open_session(temp.path());

        let reply = session.respond("todo");
        assert_eq!(reply.text, "Please enter something to do.");
        assert_eq!(session.task_count(), 0);

        let reply = session.respond("deadline submit report 2023-12-01");
        assert!(reply.text.contains("Wrong deadline format"));
        assert_eq!(session.task_count(), 0);

        let content = fs::read_to_string(temp.path().join("tasks.txt")).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_done_rewrites_file() {
        let temp = tempdir().unwrap();
        let mut session = open_session(temp.path());

        session.respond("todo read book");
        session.respond("todo feed snail");
        let reply = session.respond("done 2");
        assert!(reply.text.contains("marked this task as done"));
        assert!(reply.text.contains("[T][X] feed snail"));

        let content = fs::read_to_string(temp.path().join("tasks.txt")).unwrap();
        assert_eq!(content, "T | 0 | read book\nT | 1 | feed snail\n");
    }

    #[test]
    fn test_done_twice_is_harmless() {
        let temp = tempdir().unwrap();
        let mut session = open_session(temp.path());

        session.respond("todo read book");
        session.respond("done 1");
        let reply = session.respond("done 1");
        assert!(reply.text.contains("[T][X] read book"));
    }

    #[test]
    fn test_done_out_of_range() {
        let temp = tempdir().unwrap();
        let mut session = open_session(temp.path());

        session.respond("todo read book");
        let reply = session.respond("done 5");
        assert!(reply.text.contains("There is no task 5"));

        let content = fs::read_to_string(temp.path().join("tasks.txt")).unwrap();
        assert_eq!(content, "T | 0 | read book\n");
    }

    #[test]
    fn test_delete_renumbers() {
        let temp = tempdir().unwrap();
        let mut session = open_session(temp.path());

        session.respond("todo a");
        session.respond("todo b");
        let reply = session.respond("delete 1");
        assert!(reply.text.contains("removed this task"));
        assert!(reply.text.contains("1 tasks in the list"));

        let content = fs::read_to_string(temp.path().join("tasks.txt")).unwrap();
        assert_eq!(content, "T | 0 | b\n");
    }

    #[test]
    fn test_list_output() {
        let temp = tempdir().unwrap();
        let mut session = open_session(temp.path());

        assert_eq!(session.respond("list").text, "Your task list is empty.");

        session.respond("todo read book");
        session.respond("event party /at 2023-12-01 1800");
        let reply = session.respond("list");
        assert!(reply.text.contains("1. [T][ ] read book"));
        assert!(reply.text.contains("2. [E][ ] party (at: 2023-12-01 1800)"));
    }

    #[test]
    fn test_bye_sets_exit() {
        let temp = tempdir().unwrap();
        let mut session = open_session(temp.path());

        let reply = session.respond("bye");
        assert!(reply.exit);
        assert!(reply.text.contains("Bye Patrick!"));
    }

    #[test]
    fn test_reopen_restores_state() {
        let temp = tempdir().unwrap();
        {
            let mut session = open_session(temp.path());
            session.respond("todo read book");
            session.respond("done 1");
        }

        let storage = Storage::new(temp.path().join("tasks.txt"));
        let (session, greeting) = Session::open(storage, "Patrick").unwrap();
        assert!(!greeting.fresh);
        assert!(greeting.text.contains("You have 1 tasks"));
        assert_eq!(session.task_count(), 1);
    }
}
