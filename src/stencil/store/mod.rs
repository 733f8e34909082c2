//! # Storage Layer
//!
//! This module defines the storage abstraction for stencil. The [`DocumentStore`] trait
//! lets the command layer work against the template and article directories without
//! knowing whether they live on disk or in memory.
//!
//! ## Layout
//!
//! ```text
//! <root>/
//! ├── stencil.toml        # Optional configuration
//! ├── templates/
//! │   └── {name}.md       # Template content, read-only
//! └── articles/
//!     └── {file}.md       # Articles, the write targets
//! ```
//!
//! Stores deal in raw names. Deciding which entries count as articles (the `.md`
//! filter, ordering) is left to the command layer.
//!
//! ## Implementations
//!
//! - [`fs::FsStore`]: Production implementation over two directories.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub trait DocumentStore {
    /// Path a template name resolves to (`<templates>/<name>.md`).
    /// The name is used verbatim.
    fn template_path(&self, name: &str) -> PathBuf;

    fn template_exists(&self, name: &str) -> bool;

    fn read_template(&self, name: &str) -> Result<String>;

    /// Directory the articles live in.
    fn articles_dir(&self) -> PathBuf;

    /// Names of every regular file in the articles directory, unfiltered and unordered.
    /// A missing directory yields an empty list.
    fn list_article_files(&self) -> Result<Vec<String>>;

    fn article_path(&self, name: &str) -> PathBuf {
        self.articles_dir().join(name)
    }

    fn read_article(&self, name: &str) -> Result<String>;

    /// Replace the article's content entirely.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_article(&self, name: &str, content: &str) -> Result<()>;
}
