//! Spongebob Organiser library - chat-style task tracking
//!
//! The core is deliberately small: a task model, an in-memory list, a
//! line-based flat file behind it, and a command parser tying them together.

pub mod chat;
pub mod cli;
pub mod command;
pub mod config;
pub mod storage;
pub mod task;
