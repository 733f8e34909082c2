use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Suffix shared by templates and articles.
pub const MARKDOWN_EXT: &str = ".md";

/// How a template's content is written into an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyMode {
    /// Replace the article's content with the template.
    #[default]
    Overwrite,
    /// Keep the article's content and add a newline plus the template after it.
    Append,
}

impl fmt::Display for ApplyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyMode::Overwrite => write!(f, "overwrite"),
            ApplyMode::Append => write!(f, "append"),
        }
    }
}

/// A resolved template: the name the user asked for and the file backing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: String,
    pub path: PathBuf,
}

/// A candidate target document, identified by its file name in the articles directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub name: String,
    pub path: PathBuf,
}
