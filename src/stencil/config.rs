//! # Configuration
//!
//! Stencil configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Command-line flags**: `--mode`, `--append` (applied by the CLI after loading).
//! 2. **Environment variables**: `STENCIL__TEMPLATES_DIR`, `STENCIL__MODE`, etc.
//! 3. **Root Config**: `<root>/stencil.toml`, next to `templates/` and `articles/`.
//! 4. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 5. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `templates_dir` | `templates` | Directory holding `<name>.md` templates, relative to the root |
//! | `articles_dir` | `articles` | Directory holding the `.md` articles, relative to the root |
//! | `mode` | `overwrite` | Default apply mode (`overwrite` or `append`) |

use crate::model::ApplyMode;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "stencil.toml";

/// Configuration for stencil, stored in `stencil.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StencilConfig {
    /// Template directory, relative to the root
    #[config(default = "templates")]
    pub templates_dir: String,

    /// Article directory, relative to the root
    #[config(default = "articles")]
    pub articles_dir: String,

    /// Default apply mode: "overwrite" or "append".
    /// When absent, templates overwrite the article.
    pub mode: Option<ApplyMode>,
}

impl Default for StencilConfig {
    fn default() -> Self {
        Self {
            templates_dir: "templates".to_string(),
            articles_dir: "articles".to_string(),
            mode: None,
        }
    }
}

impl StencilConfig {
    /// Get the apply mode, using the default if not configured.
    pub fn mode(&self) -> ApplyMode {
        self.mode.unwrap_or_default()
    }

    /// Template directory joined onto `root`. Absolute settings are kept as-is.
    pub fn templates_path(&self, root: &Path) -> PathBuf {
        root.join(&self.templates_dir)
    }

    /// Article directory joined onto `root`. Absolute settings are kept as-is.
    pub fn articles_path(&self, root: &Path) -> PathBuf {
        root.join(&self.articles_dir)
    }
}
