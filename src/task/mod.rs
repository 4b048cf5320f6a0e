//! Task model and list

pub mod list;
pub mod model;

pub use list::TaskList;
pub use model::{ParseTaskError, Task, TaskKind};
