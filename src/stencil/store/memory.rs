use super::DocumentStore;
use crate::error::{Result, StencilError};
use crate::model::MARKDOWN_EXT;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// In-memory store for testing.
///
/// Uses `RefCell` for interior mutability since stencil is single-threaded,
/// so writes can go through `&self` like the filesystem store.
#[derive(Default)]
pub struct InMemoryStore {
    templates: RefCell<HashMap<String, String>>,
    articles: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(self, name: &str, content: &str) -> Self {
        self.templates
            .borrow_mut()
            .insert(name.to_string(), content.to_string());
        self
    }

    /// Adds a file to the articles directory. Any name is accepted, `.md` or not.
    pub fn with_article(self, name: &str, content: &str) -> Self {
        self.articles
            .borrow_mut()
            .insert(name.to_string(), content.to_string());
        self
    }

    pub fn article(&self, name: &str) -> Option<String> {
        self.articles.borrow().get(name).cloned()
    }

    /// Number of successful `write_article` calls.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl DocumentStore for InMemoryStore {
    fn template_path(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("memory://templates/{}{}", name, MARKDOWN_EXT))
    }

    fn template_exists(&self, name: &str) -> bool {
        self.templates.borrow().contains_key(name)
    }

    fn read_template(&self, name: &str) -> Result<String> {
        self.templates.borrow().get(name).cloned().ok_or_else(|| {
            StencilError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("template {} vanished", name),
            ))
        })
    }

    fn articles_dir(&self) -> PathBuf {
        PathBuf::from("memory://articles")
    }

    fn list_article_files(&self) -> Result<Vec<String>> {
        Ok(self.articles.borrow().keys().cloned().collect())
    }

    fn read_article(&self, name: &str) -> Result<String> {
        self.articles.borrow().get(name).cloned().ok_or_else(|| {
            StencilError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("article {} vanished", name),
            ))
        })
    }

    fn write_article(&self, name: &str, content: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(StencilError::Io(io::Error::other("Simulated write error")));
        }
        self.articles
            .borrow_mut()
            .insert(name.to_string(), content.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
