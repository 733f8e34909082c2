use crate::error::{Result, StencilError};
use crate::model::Template;
use crate::store::DocumentStore;

/// Resolves `name` to `<templates>/<name>.md`, failing when that file does not exist.
pub fn run<S: DocumentStore>(store: &S, name: &str) -> Result<Template> {
    let path = store.template_path(name);
    if !store.template_exists(name) {
        return Err(StencilError::TemplateNotFound {
            name: name.to_string(),
            path,
        });
    }
    log::debug!("Resolved template {} to {}", name, path.display());
    Ok(Template {
        name: name.to_string(),
        path,
    })
}
