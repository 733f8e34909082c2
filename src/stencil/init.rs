//! # Initialization
//!
//! Builds everything a run needs from a root directory: the layered configuration
//! and a filesystem-backed [`StencilApi`].
//!
//! The root holds `templates/`, `articles/` and an optional `stencil.toml`. Config files
//! are searched in the global config directory first and the root second, merged so the
//! root's keys win:
//!
//! - `STENCIL_CONFIG_DIR` overrides the global directory (primarily for testing).
//! - Otherwise the OS-appropriate config directory from `directories` is used.
//!
//! A missing config is not fatal; compiled defaults apply. A config file that is present
//! but invalid stops the run with [`StencilError::Config`].

use crate::api::StencilApi;
use crate::config::{StencilConfig, CONFIG_FILE_NAME};
use crate::error::{Result, StencilError};
use crate::store::fs::FsStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct StencilContext {
    pub api: StencilApi<FsStore>,
    pub config: StencilConfig,
}

fn global_config_dir() -> Option<PathBuf> {
    std::env::var("STENCIL_CONFIG_DIR")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("com", "stencil", "stencil").map(|d| d.config_dir().to_path_buf())
        })
}

/// Loads the merged configuration for `root`.
///
/// With no `stencil.toml` anywhere the compiled defaults apply. A config file that exists
/// but cannot be loaded is an error: silently falling back could flip `mode` back to
/// overwrite.
pub fn load_config(root: &Path) -> Result<StencilConfig> {
    let mut dirs = Vec::new();
    if let Some(global) = global_config_dir() {
        dirs.push(global);
    }
    dirs.push(root.to_path_buf());
    let has_file = dirs.iter().any(|d| d.join(CONFIG_FILE_NAME).exists());
    let search_paths: Vec<SearchPath> = dirs.into_iter().map(SearchPath::Path).collect();

    let loaded = Clapfig::builder()
        .app_name("stencil")
        .file_name(CONFIG_FILE_NAME)
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load();

    match loaded {
        Ok(config) => Ok(config),
        Err(e) if !has_file => {
            log::debug!("No {} found, using defaults ({})", CONFIG_FILE_NAME, e);
            Ok(StencilConfig::default())
        }
        Err(e) => Err(StencilError::Config(e.to_string())),
    }
}

pub fn initialize(root: &Path) -> Result<StencilContext> {
    let config = load_config(root)?;
    let templates_dir = config.templates_path(root);
    let articles_dir = config.articles_path(root);
    log::debug!(
        "Root {} (templates: {}, articles: {}, mode: {})",
        root.display(),
        templates_dir.display(),
        articles_dir.display(),
        config.mode()
    );

    let store = FsStore::new(templates_dir, articles_dir);
    Ok(StencilContext {
        api: StencilApi::new(store),
        config,
    })
}
