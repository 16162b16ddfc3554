//! Text view of the todo list.
//!
//! [`render`] draws the input line and both lists with row indices, and
//! [`parse_command`] turns a line of user input into the actions those rows
//! and buttons stand for. Rows are addressed by their index at render time.

use crate::actions::TodoAction;
use crate::config::ViewConfig;
use crate::state::TodoListState;
use crate::types::TodoItem;
use std::fmt::Write as _;
use thiserror::Error;

/// Usage shown by the `help` command
pub const HELP: &str = "\
commands:
  type <text>     replace the input text
  add [<text>]    add the input text (or <text>) to the incomplete list
  done <n>        move incomplete item n to the complete list
  delete <n>      delete incomplete item n
  back <n>        move complete item n back to the incomplete list
  show            redraw the lists
  json            print the state as JSON
  help            show this message
  quit            exit";

/// What a line of input asks the front end to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Send these actions to the store, in order
    Send(Vec<TodoAction>),
    /// Redraw the lists
    Show,
    /// Print the state as JSON
    Json,
    /// Print usage
    Help,
    /// Leave the input loop
    Quit,
}

/// Errors from [`parse_command`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace was entered
    #[error("empty command")]
    Empty,

    /// The first word is not a known command
    #[error("unknown command {0:?}, try \"help\"")]
    UnknownCommand(String),

    /// A row command was given no index
    #[error("{command} needs a row number")]
    MissingIndex {
        /// Command word
        command: String,
    },

    /// A row command was given something other than a row number
    #[error("{value:?} is not a row number")]
    InvalidIndex {
        /// Offending argument
        value: String,
    },

    /// A command that takes no argument was given one
    #[error("{command} takes no argument")]
    UnexpectedArgument {
        /// Command word
        command: String,
    },
}

/// Render the input line and both lists
#[must_use]
pub fn render(state: &TodoListState, config: &ViewConfig) -> String {
    let mut out = String::new();

    if state.pending_text().is_empty() {
        let _ = writeln!(out, "> ({})  [add]", config.placeholder);
    } else {
        let _ = writeln!(out, "> {}  [add]", state.pending_text());
    }

    out.push('\n');
    render_list(&mut out, &config.incomplete_title, state.incomplete_items(), |index| {
        format!("[done {index}] [delete {index}]")
    });

    out.push('\n');
    render_list(&mut out, &config.complete_title, state.complete_items(), |index| {
        format!("[back {index}]")
    });

    out
}

fn render_list<F>(out: &mut String, title: &str, items: &[TodoItem], buttons: F)
where
    F: Fn(usize) -> String,
{
    let _ = writeln!(out, "{title}");
    if items.is_empty() {
        out.push_str("  (none)\n");
        return;
    }

    for (index, item) in items.iter().enumerate() {
        let _ = writeln!(out, "  {index}. {item}  {}", buttons(index));
    }
}

/// Parse one line of user input
///
/// ```
/// use todo_list::view::{parse_command, ViewCommand};
/// use todo_list::TodoAction;
///
/// assert_eq!(
///     parse_command("done 2"),
///     Ok(ViewCommand::Send(vec![TodoAction::Complete { index: 2 }]))
/// );
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] for empty lines, unknown commands and bad or
/// missing row numbers.
pub fn parse_command(line: &str) -> Result<ViewCommand, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    let command = match word {
        "" => return Err(ParseError::Empty),
        "type" => ViewCommand::Send(vec![TodoAction::SetPendingText {
            text: rest.to_string(),
        }]),
        "add" if rest.is_empty() => ViewCommand::Send(vec![TodoAction::Add]),
        "add" => ViewCommand::Send(vec![
            TodoAction::SetPendingText {
                text: rest.to_string(),
            },
            TodoAction::Add,
        ]),
        "done" => ViewCommand::Send(vec![TodoAction::Complete {
            index: parse_index(word, rest)?,
        }]),
        "delete" | "del" => ViewCommand::Send(vec![TodoAction::DeleteIncomplete {
            index: parse_index(word, rest)?,
        }]),
        "back" | "restore" => ViewCommand::Send(vec![TodoAction::Restore {
            index: parse_index(word, rest)?,
        }]),
        "show" | "list" => no_argument(word, rest, ViewCommand::Show)?,
        "json" => no_argument(word, rest, ViewCommand::Json)?,
        "help" => no_argument(word, rest, ViewCommand::Help)?,
        "quit" | "exit" => no_argument(word, rest, ViewCommand::Quit)?,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(command)
}

fn parse_index(command: &str, rest: &str) -> Result<usize, ParseError> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(ParseError::MissingIndex {
            command: command.to_string(),
        });
    }

    value.parse().map_err(|_| ParseError::InvalidIndex {
        value: value.to_string(),
    })
}

fn no_argument(command: &str, rest: &str, parsed: ViewCommand) -> Result<ViewCommand, ParseError> {
    if rest.trim().is_empty() {
        Ok(parsed)
    } else {
        Err(ParseError::UnexpectedArgument {
            command: command.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_shows_placeholder_and_empty_lists() {
        let rendered = render(&TodoListState::new(), &ViewConfig::default());

        assert_eq!(
            rendered,
            "> (Enter a todo)  [add]\n\nIncomplete\n  (none)\n\nComplete\n  (none)\n"
        );
    }

    #[test]
    fn render_numbers_rows_with_their_buttons() {
        let state = TodoListState::from_lists(["a", "b"], ["c"]).with_pending_text("draft");
        let rendered = render(&state, &ViewConfig::default());

        assert!(rendered.starts_with("> draft  [add]\n"));
        assert!(rendered.contains("  0. a  [done 0] [delete 0]\n"));
        assert!(rendered.contains("  1. b  [done 1] [delete 1]\n"));
        assert!(rendered.contains("  0. c  [back 0]\n"));
    }

    #[test]
    fn render_uses_configured_titles() {
        let config = ViewConfig {
            incomplete_title: "未完了のTODO".to_string(),
            complete_title: "完了のTODO".to_string(),
            placeholder: "TODOを入力".to_string(),
        };
        let rendered = render(&TodoListState::new(), &config);

        assert!(rendered.contains("(TODOを入力)"));
        assert!(rendered.contains("未完了のTODO\n"));
        assert!(rendered.contains("完了のTODO\n"));
    }

    #[test]
    fn type_keeps_text_verbatim() {
        assert_eq!(
            parse_command("type  buy  milk \n"),
            Ok(ViewCommand::Send(vec![TodoAction::SetPendingText {
                text: " buy  milk ".to_string(),
            }]))
        );
        assert_eq!(
            parse_command("type"),
            Ok(ViewCommand::Send(vec![TodoAction::SetPendingText {
                text: String::new(),
            }]))
        );
    }

    #[test]
    fn add_with_text_types_then_adds() {
        assert_eq!(
            parse_command("add walk dog"),
            Ok(ViewCommand::Send(vec![
                TodoAction::SetPendingText {
                    text: "walk dog".to_string(),
                },
                TodoAction::Add,
            ]))
        );
        assert_eq!(parse_command("add"), Ok(ViewCommand::Send(vec![TodoAction::Add])));
    }

    #[test]
    fn row_commands_parse_indices() {
        assert_eq!(
            parse_command("del 0"),
            Ok(ViewCommand::Send(vec![TodoAction::DeleteIncomplete { index: 0 }]))
        );
        assert_eq!(
            parse_command("  restore 3"),
            Ok(ViewCommand::Send(vec![TodoAction::Restore { index: 3 }]))
        );
    }

    #[test]
    fn row_commands_reject_bad_indices() {
        assert_eq!(
            parse_command("done"),
            Err(ParseError::MissingIndex {
                command: "done".to_string(),
            })
        );
        assert_eq!(
            parse_command("back -1"),
            Err(ParseError::InvalidIndex {
                value: "-1".to_string(),
            })
        );
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command("list"), Ok(ViewCommand::Show));
        assert_eq!(parse_command("json"), Ok(ViewCommand::Json));
        assert_eq!(parse_command("help"), Ok(ViewCommand::Help));
        assert_eq!(parse_command("exit\r\n"), Ok(ViewCommand::Quit));
        assert_eq!(
            parse_command("quit now"),
            Err(ParseError::UnexpectedArgument {
                command: "quit".to_string(),
            })
        );
    }

    #[test]
    fn unknown_and_empty_lines() {
        assert_eq!(parse_command("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_command("finish 1"),
            Err(ParseError::UnknownCommand("finish".to_string()))
        );
    }
}
