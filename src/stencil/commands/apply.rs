use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ApplyMode, Article, Template};
use crate::store::DocumentStore;

/// Combines template and article content for `mode`.
///
/// `original` is only consulted in append mode.
pub fn compose(mode: ApplyMode, template: &str, original: Option<&str>) -> String {
    match mode {
        ApplyMode::Overwrite => template.to_string(),
        ApplyMode::Append => {
            let original = original.unwrap_or_default();
            let mut content = String::with_capacity(original.len() + 1 + template.len());
            content.push_str(original);
            content.push('\n');
            content.push_str(template);
            content
        }
    }
}

pub fn run<S: DocumentStore>(
    store: &S,
    template: &Template,
    article: &Article,
    mode: ApplyMode,
) -> Result<CmdResult> {
    let template_content = store.read_template(&template.name)?;

    // Overwrite never looks at what was there before
    let original = match mode {
        ApplyMode::Append => Some(store.read_article(&article.name)?),
        ApplyMode::Overwrite => None,
    };

    let content = compose(mode, &template_content, original.as_deref());
    store.write_article(&article.name, &content)?;
    log::debug!(
        "Wrote {} bytes to {} ({})",
        content.len(),
        article.path.display(),
        mode
    );

    let mut result = CmdResult {
        template: template.clone(),
        article: article.clone(),
        mode,
        bytes_written: content.len(),
        messages: Vec::new(),
    };
    result.add_message(CmdMessage::success(format!(
        "Applied template {} to {}",
        template.name, article.name
    )));
    if mode == ApplyMode::Overwrite && template_content.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Template {} is empty, {} is now empty too",
            template.name, article.name
        )));
    }
    Ok(result)
}
