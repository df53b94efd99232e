//! Interactive command shell for the lodge persistence engine.
//!
//! The shell is the system's only user interface: one command per line,
//! each mapped to operations on the entity registry. Everything a user
//! sees (ids, display forms, error lines) is produced here; the core
//! crates stay silent.

mod command;
mod error;
mod shell;

pub use command::Command;
pub use error::{CommandError, ShellError};
pub use shell::{Outcome, PROMPT, Shell};
