//! Command-line parsing for the shell.
//!
//! One input line maps to at most one [`Command`]. Parsing reports the
//! same argument failures the shell prints, in the same order a user
//! sees them: class name presence, class existence, id presence. The
//! update command's attribute and value stay optional here because their
//! presence is only checked after the instance lookup succeeds.

use crate::error::CommandError;
use lodge_model::ModelKind;

/// A fully parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create <Class>`
    Create(ModelKind),
    /// `show <Class> <id>`
    Show(ModelKind, String),
    /// `destroy <Class> <id>`
    Destroy(ModelKind, String),
    /// `all` or `all <Class>`
    All(Option<ModelKind>),
    /// `update <Class> <id> <attr> <value>`, attr and value checked later
    Update {
        kind: ModelKind,
        id: String,
        attr: Option<String>,
        value: Option<String>,
    },
    /// `help`
    Help,
    /// `quit`
    Quit,
}

impl Command {
    /// Parses one input line. Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// [`CommandError::UnknownSyntax`] for an unrecognized verb, plus the
    /// per-command argument failures.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut rest = line;
        let Some(verb) = next_token(&mut rest) else {
            return Ok(None);
        };
        let command = match verb {
            "quit" => Command::Quit,
            "help" => Command::Help,
            "create" => Command::Create(parse_kind(&mut rest)?),
            "show" => {
                let (kind, id) = parse_kind_and_id(&mut rest)?;
                Command::Show(kind, id)
            }
            "destroy" => {
                let (kind, id) = parse_kind_and_id(&mut rest)?;
                Command::Destroy(kind, id)
            }
            "all" => match next_token(&mut rest) {
                None => Command::All(None),
                Some(tag) => Command::All(Some(resolve_kind(tag)?)),
            },
            "update" => {
                let (kind, id) = parse_kind_and_id(&mut rest)?;
                let attr = next_token(&mut rest).map(str::to_string);
                let value = next_value(&mut rest);
                Command::Update {
                    kind,
                    id,
                    attr,
                    value,
                }
            }
            _ => return Err(CommandError::UnknownSyntax(line.trim().to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_kind(rest: &mut &str) -> Result<ModelKind, CommandError> {
    let tag = next_token(rest).ok_or(CommandError::ClassNameMissing)?;
    resolve_kind(tag)
}

fn resolve_kind(tag: &str) -> Result<ModelKind, CommandError> {
    ModelKind::from_tag(tag).map_err(|_| CommandError::ClassDoesntExist)
}

fn parse_kind_and_id(rest: &mut &str) -> Result<(ModelKind, String), CommandError> {
    let kind = parse_kind(rest)?;
    let id = next_token(rest).ok_or(CommandError::InstanceIdMissing)?;
    Ok((kind, id.to_string()))
}

/// Splits the next whitespace-delimited token off the front of `input`.
fn next_token<'a>(input: &mut &'a str) -> Option<&'a str> {
    *input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    let (token, rest) = input.split_at(end);
    *input = rest;
    Some(token)
}

/// Reads an update value: a double-quoted span with the quotes stripped
/// and inner spaces preserved, or a single bare token.
fn next_value(input: &mut &str) -> Option<String> {
    *input = input.trim_start();
    let Some(quoted) = input.strip_prefix('"') else {
        return next_token(input).map(str::to_string);
    };
    match quoted.find('"') {
        Some(end) => {
            let value = quoted[..end].to_string();
            *input = &quoted[end + 1..];
            Some(value)
        }
        None => {
            // unterminated quote: take the remainder verbatim
            let value = quoted.to_string();
            *input = "";
            Some(value)
        }
    }
}
