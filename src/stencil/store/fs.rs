use super::DocumentStore;
use crate::error::{Result, StencilError};
use crate::model::MARKDOWN_EXT;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem store rooted at a template directory and an article directory.
pub struct FsStore {
    templates_dir: PathBuf,
    articles_dir: PathBuf,
}

impl FsStore {
    pub fn new(templates_dir: PathBuf, articles_dir: PathBuf) -> Self {
        Self {
            templates_dir,
            articles_dir,
        }
    }
}

impl DocumentStore for FsStore {
    fn template_path(&self, name: &str) -> PathBuf {
        self.templates_dir.join(format!("{}{}", name, MARKDOWN_EXT))
    }

    fn template_exists(&self, name: &str) -> bool {
        self.template_path(name).exists()
    }

    fn read_template(&self, name: &str) -> Result<String> {
        fs::read_to_string(self.template_path(name)).map_err(StencilError::Io)
    }

    fn articles_dir(&self) -> PathBuf {
        self.articles_dir.clone()
    }

    fn list_article_files(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.articles_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StencilError::Io(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(StencilError::Io)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            match path.file_name().and_then(|s| s.to_str()) {
                Some(name) => names.push(name.to_string()),
                None => log::debug!("Skipping non UTF-8 file name {}", path.display()),
            }
        }
        Ok(names)
    }

    fn read_article(&self, name: &str) -> Result<String> {
        fs::read_to_string(self.article_path(name)).map_err(StencilError::Io)
    }

    fn write_article(&self, name: &str, content: &str) -> Result<()> {
        // Symlinked articles are written through to the file they point at
        let target_path = match fs::canonicalize(self.article_path(name)) {
            Ok(resolved) => resolved,
            Err(e) if e.kind() == ErrorKind::NotFound => self.article_path(name),
            Err(e) => return Err(StencilError::Io(e)),
        };
        let parent = target_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.articles_dir.clone());
        let permissions = match fs::metadata(&target_path) {
            Ok(meta) => Some(meta.permissions()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(StencilError::Io(e)),
        };

        // Atomic Write
        let tmp_path = parent.join(format!(".stencil-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(StencilError::Io)?;
        if let Some(permissions) = permissions {
            if let Err(e) = fs::set_permissions(&tmp_path, permissions) {
                let _ = fs::remove_file(&tmp_path);
                return Err(StencilError::Io(e));
            }
        }
        if let Err(e) = fs::rename(&tmp_path, &target_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StencilError::Io(e));
        }

        Ok(())
    }
}
