//! Interactive article selection.
//!
//! The prompt is the one place a run blocks on the user. It is modelled as a single
//! request/response call so the rest of the crate never touches the terminal.

use crate::error::{Result, StencilError};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use std::io::{ErrorKind, IsTerminal};

pub const SELECT_PROMPT: &str = "Select the article to apply the template to";

pub trait Selector {
    /// Blocks until the user picks exactly one of `choices`, returning its position.
    /// Returns [`StencilError::Cancelled`] if the user backs out.
    fn select(&self, message: &str, choices: &[String]) -> Result<usize>;
}

/// Single-choice list prompt on the controlling terminal.
pub struct TerminalSelector;

impl TerminalSelector {
    /// True when both stdin and stderr (where the prompt is drawn) are terminals.
    pub fn is_available() -> bool {
        std::io::stdin().is_terminal() && console::user_attended_stderr()
    }
}

impl Selector for TerminalSelector {
    fn select(&self, message: &str, choices: &[String]) -> Result<usize> {
        if !Self::is_available() {
            return Err(StencilError::NotInteractive);
        }

        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact_opt();

        match picked {
            Ok(Some(index)) => Ok(index),
            Ok(None) => Err(StencilError::Cancelled),
            Err(dialoguer::Error::IO(e)) if e.kind() == ErrorKind::Interrupted => {
                Err(StencilError::Cancelled)
            }
            Err(e) => Err(StencilError::Prompt(e.to_string())),
        }
    }
}
