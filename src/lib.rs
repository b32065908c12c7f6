//! Chores CLI - recurring household chores tracked in a markdown log
//!
//! Chore definitions and dated completion entries live together in one
//! plain-text file. The log is parsed into chores and completions, and the
//! scheduler ranks every chore by how urgently it needs doing.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{Chore, ChoreStatus, Completion, Status};
pub use storage::{parse, ParsedLog};
