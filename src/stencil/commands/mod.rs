//! # Command Layer
//!
//! This module contains the **core logic** of stencil. Each step of a run lives in its
//! own submodule as a plain function over a [`DocumentStore`](crate::store::DocumentStore).
//!
//! Commands explicitly avoid:
//! - **Any terminal I/O**: No stdout, stderr, prompts or colors
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! A run is strictly linear and every step short-circuits on error:
//!
//! 1. [`resolve`]: Turn a template name into a [`Template`], failing if its file is absent
//! 2. [`list`]: Collect the `.md` articles that can be offered for selection
//! 3. [`apply`]: Read, combine and write the selected article
//!
//! Commands return [`CmdResult`], not strings. The UI layer decides how to render it.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` to avoid filesystem dependencies and verify both
//! the returned `CmdResult` and what ended up in the store.

use crate::model::{ApplyMode, Article, Template};
use serde::Serialize;

pub mod apply;
pub mod list;
pub mod resolve;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of applying a template to an article.
#[derive(Debug, Clone, Serialize)]
pub struct CmdResult {
    pub template: Template,
    pub article: Article,
    pub mode: ApplyMode,
    /// Size of the article after the write, in bytes.
    pub bytes_written: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
