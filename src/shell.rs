//! Line commands for driving the book from a terminal.

use thiserror::Error;

use crate::domain::{ContactId, Field};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { field: Field, value: String },
    Edit(ContactId),
    Submit,
    Delete(ContactId),
    Search(String),
    Page(usize),
    Refresh,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),
    #[error("{0}")]
    InvalidField(String),
    #[error("Page must be a number: {0}")]
    InvalidPage(String),
}

pub const HELP: &str = "\
commands:
  set <name|email|phone|image> <value>
  edit <id>       load a contact into the form
  submit          add or update
  delete <id>
  search [text]   empty text clears the search
  page <n>
  refresh | show | help | quit";

/// `Ok(None)` for a blank line.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None if !rest.is_empty() => (rest, ""),
                None => return Err(ParseError::MissingArgument("set")),
            };
            Command::Set {
                field: field.parse().map_err(ParseError::InvalidField)?,
                value: value.to_string(),
            }
        }
        "edit" => Command::Edit(id_argument("edit", rest)?),
        "delete" => Command::Delete(id_argument("delete", rest)?),
        "submit" => Command::Submit,
        "search" => Command::Search(rest.to_string()),
        "page" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument("page"));
            }
            Command::Page(rest.parse().map_err(|_| ParseError::InvalidPage(rest.to_string()))?)
        }
        "refresh" => Command::Refresh,
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn id_argument(verb: &'static str, rest: &str) -> Result<ContactId, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(verb))
    } else {
        Ok(ContactId::new(rest))
    }
}
