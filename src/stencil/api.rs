//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for applying templates, whatever UI sits on top.
//!
//! `StencilApi<S: DocumentStore>` is generic over the store:
//! - Production: `StencilApi<FsStore>`
//! - Testing: `StencilApi<InMemoryStore>`
//!
//! [`StencilApi::apply_template`] runs the whole linear sequence
//! (validate, select, read, combine, write) and stops at the first failure, so nothing
//! is written unless every earlier step succeeded. The individual steps are exposed
//! too for UIs that want to drive them separately.

use crate::commands::{self, CmdResult};
use crate::error::{Result, StencilError};
use crate::model::{ApplyMode, Article, Template};
use crate::prompt::{Selector, SELECT_PROMPT};
use crate::store::DocumentStore;

/// How the target article is chosen.
pub enum Selection<'a> {
    /// Use the article with this file name.
    Named(&'a str),
    /// Ask the user.
    Prompt(&'a dyn Selector),
}

pub struct StencilApi<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> StencilApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resolve_template(&self, name: &str) -> Result<Template> {
        commands::resolve::run(&self.store, name)
    }

    pub fn list_articles(&self) -> Result<Vec<Article>> {
        commands::list::run(&self.store)
    }

    pub fn select_article(&self, articles: &[Article], selection: Selection<'_>) -> Result<Article> {
        match selection {
            Selection::Named(name) => commands::list::find(articles, name),
            Selection::Prompt(selector) => {
                let choices: Vec<String> = articles.iter().map(|a| a.name.clone()).collect();
                let index = selector.select(SELECT_PROMPT, &choices)?;
                articles.get(index).cloned().ok_or_else(|| {
                    StencilError::Prompt(format!("selection {} is out of range", index))
                })
            }
        }
    }

    pub fn apply(&self, template: &Template, article: &Article, mode: ApplyMode) -> Result<CmdResult> {
        commands::apply::run(&self.store, template, article, mode)
    }

    pub fn apply_template(
        &self,
        template_name: &str,
        selection: Selection<'_>,
        mode: ApplyMode,
    ) -> Result<CmdResult> {
        let template = self.resolve_template(template_name)?;
        let articles = self.list_articles()?;
        let article = self.select_article(&articles, selection)?;
        log::debug!("Selected article {}", article.name);
        self.apply(&template, &article, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::cell::RefCell;

    /// Answers with a fixed position and records what it was shown.
    struct ScriptedSelector {
        answer: Option<usize>,
        shown: RefCell<Vec<String>>,
    }

    impl ScriptedSelector {
        fn picking(answer: usize) -> Self {
            Self {
                answer: Some(answer),
                shown: RefCell::new(Vec::new()),
            }
        }

        fn cancelling() -> Self {
            Self {
                answer: None,
                shown: RefCell::new(Vec::new()),
            }
        }

        fn was_asked(&self) -> bool {
            !self.shown.borrow().is_empty()
        }
    }

    impl Selector for ScriptedSelector {
        fn select(&self, _message: &str, choices: &[String]) -> Result<usize> {
            *self.shown.borrow_mut() = choices.to_vec();
            self.answer.ok_or(StencilError::Cancelled)
        }
    }

    fn blog() -> InMemoryStore {
        InMemoryStore::new()
            .with_template("footer", "— end —")
            .with_article("draft.md", "Hello")
            .with_article("post.md", "Post")
            .with_article("notes.txt", "skip me")
    }

    #[test]
    fn test_prompt_offers_only_markdown_articles() {
        let api = StencilApi::new(blog());
        let selector = ScriptedSelector::picking(0);

        api.apply_template("footer", Selection::Prompt(&selector), ApplyMode::Overwrite)
            .unwrap();

        assert_eq!(*selector.shown.borrow(), vec!["draft.md", "post.md"]);
    }

    #[test]
    fn test_prompted_overwrite() {
        let api = StencilApi::new(blog());
        let selector = ScriptedSelector::picking(0);

        let result = api
            .apply_template("footer", Selection::Prompt(&selector), ApplyMode::Overwrite)
            .unwrap();

        assert_eq!(result.article.name, "draft.md");
        assert_eq!(api.store().article("draft.md").unwrap(), "— end —");
        assert_eq!(api.store().article("post.md").unwrap(), "Post");
    }

    #[test]
    fn test_prompted_append() {
        let api = StencilApi::new(blog());
        let selector = ScriptedSelector::picking(1);

        api.apply_template("footer", Selection::Prompt(&selector), ApplyMode::Append)
            .unwrap();

        assert_eq!(api.store().article("post.md").unwrap(), "Post\n— end —");
    }

    #[test]
    fn test_named_selection_skips_prompt() {
        let api = StencilApi::new(blog());

        let result = api
            .apply_template("footer", Selection::Named("post.md"), ApplyMode::Append)
            .unwrap();

        assert_eq!(result.article.name, "post.md");
        assert_eq!(api.store().article("post.md").unwrap(), "Post\n— end —");
    }

    #[test]
    fn test_missing_template_stops_before_prompt() {
        let api = StencilApi::new(blog());
        let selector = ScriptedSelector::picking(0);

        let err = api
            .apply_template("header", Selection::Prompt(&selector), ApplyMode::Overwrite)
            .unwrap_err();

        assert!(matches!(err, StencilError::TemplateNotFound { .. }));
        assert!(!selector.was_asked());
        assert_eq!(api.store().write_count(), 0);
    }

    #[test]
    fn test_no_articles_stops_before_prompt() {
        let store = InMemoryStore::new()
            .with_template("footer", "x")
            .with_article("notes.txt", "");
        let api = StencilApi::new(store);
        let selector = ScriptedSelector::picking(0);

        let err = api
            .apply_template("footer", Selection::Prompt(&selector), ApplyMode::Overwrite)
            .unwrap_err();

        assert!(matches!(err, StencilError::NoArticles(_)));
        assert!(!selector.was_asked());
    }

    #[test]
    fn test_cancelled_prompt_writes_nothing() {
        let api = StencilApi::new(blog());
        let selector = ScriptedSelector::cancelling();

        let err = api
            .apply_template("footer", Selection::Prompt(&selector), ApplyMode::Overwrite)
            .unwrap_err();

        assert!(matches!(err, StencilError::Cancelled));
        assert_eq!(api.store().write_count(), 0);
        assert_eq!(api.store().article("draft.md").unwrap(), "Hello");
    }

    #[test]
    fn test_unknown_named_article_writes_nothing() {
        let api = StencilApi::new(blog());

        let err = api
            .apply_template("footer", Selection::Named("notes.txt"), ApplyMode::Overwrite)
            .unwrap_err();

        assert!(matches!(err, StencilError::ArticleNotFound(_)));
        assert_eq!(api.store().write_count(), 0);
    }
}
