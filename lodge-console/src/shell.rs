//! The interactive shell.
//!
//! Owns the process's one [`FileStore`] and turns parsed commands into
//! registry operations. All user-visible output goes through the writer
//! handed to [`Shell::handle_line`], so tests drive the shell against an
//! in-memory buffer exactly the way `main` drives it against stdout.

use crate::command::Command;
use crate::error::{CommandError, ShellError};
use lodge_model::{Entity, ModelKind};
use lodge_storage::FileStore;
use std::io::{BufRead, Write};
use tracing::debug;

/// Prompt printed before every input line.
pub const PROMPT: &str = "(lodge) ";

const HELP: &str = "\
Documented commands:
  create <Class>                      create an entity, save, print its id
  show <Class> <id>                   print one entity
  destroy <Class> <id>                remove one entity and save
  all [<Class>]                       print every entity, optionally one class
  update <Class> <id> <attr> <value>  set one string attribute and save
  help                                print this summary
  quit                                exit the shell

Classes: BaseModel, User, State, City, Amenity, Place, Review";

/// What the caller should do after a handled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading commands.
    Continue,
    /// Terminate the shell.
    Quit,
}

/// The command shell over one entity registry.
pub struct Shell {
    store: FileStore,
}

impl Shell {
    /// Creates a shell around a store, typically freshly reloaded.
    #[must_use]
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// Runs the interactive loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Read/write failures on the streams and storage failures; user
    /// errors are printed and recovered from.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<(), ShellError> {
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // end of input behaves like quit, finishing the prompt line
                writeln!(out)?;
                debug!("input exhausted; shell terminating");
                return Ok(());
            }
            if self.handle_line(&line, out)? == Outcome::Quit {
                return Ok(());
            }
        }
    }

    /// Handles one input line, writing any output to `out`.
    ///
    /// Command failures are printed and reported as [`Outcome::Continue`];
    /// only storage and output failures escape as errors.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Outcome, ShellError> {
        match Command::parse(line) {
            Ok(None) => Ok(Outcome::Continue),
            Ok(Some(command)) => self.dispatch(command, out),
            Err(err) => {
                writeln!(out, "{err}")?;
                Ok(Outcome::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: Command, out: &mut impl Write) -> Result<Outcome, ShellError> {
        let result = match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Help => writeln!(out, "{HELP}").map_err(ShellError::from),
            Command::Create(kind) => self.create(kind, out),
            Command::Show(kind, id) => self.show(kind, &id, out),
            Command::Destroy(kind, id) => self.destroy(kind, &id),
            Command::All(kind) => self.all(kind, out),
            Command::Update {
                kind,
                id,
                attr,
                value,
            } => self.update(kind, &id, attr, value),
        };
        match result {
            Ok(()) => Ok(Outcome::Continue),
            Err(ShellError::Command(err)) => {
                writeln!(out, "{err}")?;
                Ok(Outcome::Continue)
            }
            Err(err) => Err(err),
        }
    }

    /// Creates a fresh entity, saves the registry, prints the new id.
    fn create(&mut self, kind: ModelKind, out: &mut impl Write) -> Result<(), ShellError> {
        let mut entity = Entity::new(kind);
        entity.touch();
        let id = entity.id().to_string();
        self.store.insert(entity);
        self.store.save()?;
        writeln!(out, "{id}")?;
        Ok(())
    }

    fn show(&self, kind: ModelKind, id: &str, out: &mut impl Write) -> Result<(), ShellError> {
        let entity = self
            .store
            .get(kind, id)
            .ok_or(CommandError::NoInstanceFound)?;
        writeln!(out, "{entity}")?;
        Ok(())
    }

    fn destroy(&mut self, kind: ModelKind, id: &str) -> Result<(), ShellError> {
        self.store
            .remove(kind, id)
            .ok_or(CommandError::NoInstanceFound)?;
        self.store.save()?;
        Ok(())
    }

    fn all(&self, kind: Option<ModelKind>, out: &mut impl Write) -> Result<(), ShellError> {
        match kind {
            None => {
                for entity in self.store.all().values() {
                    writeln!(out, "{entity}")?;
                }
            }
            Some(kind) => {
                for entity in self.store.all_of(kind) {
                    writeln!(out, "{entity}")?;
                }
            }
        }
        Ok(())
    }

    /// Sets one attribute on an existing entity and saves.
    ///
    /// The instance lookup runs before the attribute and value presence
    /// checks, so `update User <bad-id>` reports the missing instance,
    /// not the missing attribute.
    fn update(
        &mut self,
        kind: ModelKind,
        id: &str,
        attr: Option<String>,
        value: Option<String>,
    ) -> Result<(), ShellError> {
        let entity = self
            .store
            .get_mut(kind, id)
            .ok_or(CommandError::NoInstanceFound)?;
        let attr = attr.ok_or(CommandError::AttributeNameMissing)?;
        let value = value.ok_or(CommandError::ValueMissing)?;
        entity.set_attr(&attr, value);
        entity.touch();
        self.store.save()?;
        Ok(())
    }
}
