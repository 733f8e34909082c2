use crate::error::{Result, StencilError};
use crate::model::{Article, MARKDOWN_EXT};
use crate::store::DocumentStore;

/// Lists the articles that can be offered for selection: files ending in `.md`,
/// ordered by name. An empty result is an error rather than an empty prompt.
pub fn run<S: DocumentStore>(store: &S) -> Result<Vec<Article>> {
    let mut names: Vec<String> = store
        .list_article_files()?
        .into_iter()
        .filter(|name| name.ends_with(MARKDOWN_EXT))
        .collect();
    names.sort();

    if names.is_empty() {
        return Err(StencilError::NoArticles(store.articles_dir()));
    }

    log::debug!("Found {} candidate article(s)", names.len());
    Ok(names
        .into_iter()
        .map(|name| Article {
            path: store.article_path(&name),
            name,
        })
        .collect())
}

/// Picks `name` out of the candidate list. Only names that [`run`] would offer are accepted.
pub fn find(articles: &[Article], name: &str) -> Result<Article> {
    articles
        .iter()
        .find(|a| a.name == name)
        .cloned()
        .ok_or_else(|| StencilError::ArticleNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn names(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_only_markdown_files_are_listed() {
        let store = InMemoryStore::new()
            .with_article("draft.md", "")
            .with_article("notes.txt", "")
            .with_article("image.png", "")
            .with_article("README", "")
            .with_article("post.md", "");

        let articles = run(&store).unwrap();
        assert_eq!(names(&articles), vec!["draft.md", "post.md"]);
    }

    #[test]
    fn test_articles_are_sorted_by_name() {
        let store = InMemoryStore::new()
            .with_article("c.md", "")
            .with_article("a.md", "")
            .with_article("b.md", "");

        assert_eq!(names(&run(&store).unwrap()), vec!["a.md", "b.md", "c.md"]);
    }

    #[test]
    fn test_suffix_must_be_exact() {
        let store = InMemoryStore::new()
            .with_article("draft.md.bak", "")
            .with_article("draft.MD", "")
            .with_article("keep.md", "");

        assert_eq!(names(&run(&store).unwrap()), vec!["keep.md"]);
    }

    #[test]
    fn test_no_articles_is_an_error() {
        let store = InMemoryStore::new().with_article("notes.txt", "");
        let err = run(&store).unwrap_err();
        assert!(matches!(err, StencilError::NoArticles(_)));
    }

    #[test]
    fn test_article_path_points_into_articles_dir() {
        let store = InMemoryStore::new().with_article("draft.md", "");
        let articles = run(&store).unwrap();
        assert_eq!(articles[0].path, store.articles_dir().join("draft.md"));
    }

    #[test]
    fn test_find_known_article() {
        let store = InMemoryStore::new()
            .with_article("draft.md", "")
            .with_article("post.md", "");
        let articles = run(&store).unwrap();
        assert_eq!(find(&articles, "post.md").unwrap().name, "post.md");
    }

    #[test]
    fn test_find_rejects_unlisted_names() {
        let store = InMemoryStore::new()
            .with_article("draft.md", "")
            .with_article("notes.txt", "");
        let articles = run(&store).unwrap();

        assert!(matches!(
            find(&articles, "notes.txt"),
            Err(StencilError::ArticleNotFound(_))
        ));
        assert!(matches!(
            find(&articles, "missing.md"),
            Err(StencilError::ArticleNotFound(_))
        ));
    }
}
