//! Error types for the console.

use lodge_storage::StorageError;
use std::io;
use thiserror::Error;

/// User-facing command failures.
///
/// The display strings are the shell's exact output lines; the shell
/// prints these and keeps going. Argument checks surface in a fixed
/// order: class name presence, class existence, id presence, instance
/// existence, attribute presence, value presence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("** class name missing **")]
    ClassNameMissing,

    #[error("** class doesn't exist **")]
    ClassDoesntExist,

    #[error("** instance id missing **")]
    InstanceIdMissing,

    #[error("** no instance found **")]
    NoInstanceFound,

    #[error("** attribute name missing **")]
    AttributeNameMissing,

    #[error("** value missing **")]
    ValueMissing,

    /// An unrecognized verb; carries the offending line.
    #[error("*** Unknown syntax: {0}")]
    UnknownSyntax(String),
}

/// Failures the shell itself cannot recover from, plus the recoverable
/// command failures it handles internally.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A user-facing command failure. Printed by the shell, never fatal.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The storage engine failed. A registry that cannot reach disk is
    /// fatal to the session.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Writing shell output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
