use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StencilError {
    #[error("Missing required argument: --template=<name>")]
    MissingTemplateArg,

    #[error("Template '{name}' not found ({})", path.display())]
    TemplateNotFound { name: String, path: PathBuf },

    #[error("No articles found in {}", .0.display())]
    NoArticles(PathBuf),

    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("Selection cancelled, no article was changed")]
    Cancelled,

    #[error("No terminal available for article selection (use --article=<file>)")]
    NotInteractive,

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StencilError>;
