//! Page orchestration
//!
//! The `PageController` owns the entry store and maps each page-level
//! operation (index, view, search, create, edit, save, random) to a
//! structured payload. Rendering those payloads into markup or terminal
//! output is entirely the presentation layer's job.
//!
//! A missing entry is never an error here: `view` and `edit` return
//! `Missing` payloads carrying related-title suggestions so the
//! presentation layer can show a normal "did you mean" page.

use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::info;

use crate::error::{WikiError, WikiResult};
use crate::forms::{self, CreateInput, EditInput, SearchInput};
use crate::render;
use crate::search::{SearchResult, TitleMatcher};
use crate::store::EntryStore;
use crate::title;

/// The index page: every stored title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPage {
    /// All titles, sorted case-insensitively for presentation
    pub titles: Vec<String>,
}

/// Outcome of viewing an entry by title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum EntryPage {
    /// The entry exists; `title` carries the stored casing
    Found {
        title: String,
        html: String,
        markdown: String,
    },
    /// Soft not-found with suggestions, rendered as a normal page
    Missing { query: String, related: Vec<String> },
}

/// Outcome of a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum SearchPage {
    /// Exact match: the presentation layer should redirect to the entry
    Redirect { title: String },
    /// No exact match: show the related titles
    Results { query: String, related: Vec<String> },
}

/// Outcome of opening an entry for editing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum EditPage {
    /// The current body, for pre-filling an edit form
    Form { title: String, body: String },
    /// The title does not exist; suggest related entries instead
    Missing { title: String, related: Vec<String> },
}

/// Orchestrates page operations over an [`EntryStore`]
pub struct PageController {
    store: EntryStore,
}

impl PageController {
    pub fn new(store: EntryStore) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// All stored titles, sorted case-insensitively
    pub fn index(&self) -> WikiResult<IndexPage> {
        let mut titles = self.store.list()?;
        titles.sort_by_key(|t| title::normalize(t));
        Ok(IndexPage { titles })
    }

    /// View an entry, or get suggestions when the title is absent
    pub fn view(&self, requested: &str) -> WikiResult<EntryPage> {
        let matcher = TitleMatcher::new(&self.store);
        match matcher.resolve(requested)? {
            SearchResult::Found { title } => match self.store.get(&title)? {
                Some(markdown) => Ok(EntryPage::Found {
                    html: render::to_html(&markdown),
                    title,
                    markdown,
                }),
                // Removed between listing and read; treat as missing
                None => Ok(EntryPage::Missing {
                    query: requested.to_string(),
                    related: Vec::new(),
                }),
            },
            SearchResult::NotFound { related } => Ok(EntryPage::Missing {
                query: requested.to_string(),
                related,
            }),
        }
    }

    /// Search for a title: redirect on exact match, suggestions otherwise
    pub fn search(&self, input: &SearchInput) -> WikiResult<SearchPage> {
        let matcher = TitleMatcher::new(&self.store);
        match matcher.resolve(input.query())? {
            SearchResult::Found { title } => {
                info!(query = input.query(), %title, "search hit");
                Ok(SearchPage::Redirect { title })
            }
            SearchResult::NotFound { related } => Ok(SearchPage::Results {
                query: input.query().to_string(),
                related,
            }),
        }
    }

    /// Create a new entry; refuses to overwrite an existing one
    ///
    /// Returns the created title. Fails with [`WikiError::AlreadyExists`]
    /// when the title resolves to an entry under any casing.
    pub fn create(&self, input: &CreateInput) -> WikiResult<String> {
        if let Some(existing) = self.store.canonical_title(input.title())? {
            return Err(WikiError::AlreadyExists { title: existing });
        }

        self.store.put(input.title(), input.body())?;
        info!(title = input.title(), "created entry");
        Ok(input.title().to_string())
    }

    /// Load an entry's raw body for editing
    pub fn edit(&self, requested: &str) -> WikiResult<EditPage> {
        match self.store.canonical_title(requested)? {
            Some(stored) => {
                let body = self.store.get(&stored)?.unwrap_or_default();
                Ok(EditPage::Form {
                    title: stored,
                    body,
                })
            }
            None => {
                let matcher = TitleMatcher::new(&self.store);
                let related = match matcher.resolve(requested)? {
                    SearchResult::NotFound { related } => related,
                    SearchResult::Found { .. } => Vec::new(),
                };
                Ok(EditPage::Missing {
                    title: requested.to_string(),
                    related,
                })
            }
        }
    }

    /// Overwrite an entry's body
    ///
    /// Unconditional full overwrite, last writer wins: there is no
    /// conflict detection against concurrent edits of the same title.
    pub fn save(&self, requested: &str, input: &EditInput) -> WikiResult<()> {
        // Titles become filenames; the filename-safety rules apply on
        // every write path, not just create.
        let title = forms::validate_title(requested)?;
        self.store.put(&title, input.body())?;
        info!(title = %title, "saved entry");
        Ok(())
    }

    /// Pick a stored title uniformly at random
    pub fn random(&self) -> WikiResult<String> {
        let titles = self.store.list()?;
        titles
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(WikiError::EmptyStore)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn test_controller(temp_dir: &TempDir) -> PageController {
        let store = EntryStore::at(temp_dir.path().join("entries")).unwrap();
        PageController::new(store)
    }

    fn seed(controller: &PageController, titles: &[&str]) {
        for t in titles {
            controller.store().put(t, &format!("# {}\n", t)).unwrap();
        }
    }

    #[test]
    fn test_index_sorted_case_insensitively() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);
        seed(&controller, &["Python", "css", "HTML"]);

        let page = controller.index().unwrap();
        assert_eq!(
            page.titles,
            vec!["css".to_string(), "HTML".to_string(), "Python".to_string()]
        );
    }

    #[test]
    fn test_view_found_renders_html() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);
        seed(&controller, &["Python"]);

        match controller.view("python").unwrap() {
            EntryPage::Found {
                title,
                html,
                markdown,
            } => {
                assert_eq!(title, "Python");
                assert!(html.contains("<h1>Python</h1>"));
                assert_eq!(markdown, "# Python\n");
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_view_missing_carries_suggestions() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);
        seed(&controller, &["Python", "CSS", "HTML"]);

        match controller.view("ml").unwrap() {
            EntryPage::Missing { query, related } => {
                assert_eq!(query, "ml");
                assert_eq!(related, vec!["HTML".to_string()]);
            }
            other => panic!("expected Missing, got {:?}", other),
        }
    }

    #[test]
    fn test_search_exact_redirects_with_stored_casing() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);
        seed(&controller, &["CSS"]);

        let input = SearchInput::parse("css").unwrap();
        assert_eq!(
            controller.search(&input).unwrap(),
            SearchPage::Redirect {
                title: "CSS".to_string()
            }
        );
    }

    #[test]
    fn test_search_no_match_returns_results() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);
        seed(&controller, &["Python", "CSS", "HTML"]);

        let input = SearchInput::parse("xyz").unwrap();
        assert_eq!(
            controller.search(&input).unwrap(),
            SearchPage::Results {
                query: "xyz".to_string(),
                related: vec![]
            }
        );
    }

    #[test]
    fn test_create_then_view() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);

        let input = CreateInput::parse("Rust", "# Rust\n\nFast and safe.").unwrap();
        let title = controller.create(&input).unwrap();
        assert_eq!(title, "Rust");

        assert!(matches!(
            controller.view("rust").unwrap(),
            EntryPage::Found { .. }
        ));
    }

    #[test]
    fn test_create_existing_title_fails() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);
        seed(&controller, &["Python"]);

        let input = CreateInput::parse("python", "different body").unwrap();
        match controller.create(&input) {
            Err(WikiError::AlreadyExists { title }) => assert_eq!(title, "Python"),
            other => panic!("expected AlreadyExists, got {:?}", other),
        }

        // Original body untouched
        assert_eq!(
            controller.store().get("Python").unwrap().unwrap(),
            "# Python\n"
        );
    }

    #[test]
    fn test_edit_returns_current_body() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);
        seed(&controller, &["Git"]);

        match controller.edit("git").unwrap() {
            EditPage::Form { title, body } => {
                assert_eq!(title, "Git");
                assert_eq!(body, "# Git\n");
            }
            other => panic!("expected Form, got {:?}", other),
        }
    }

    #[test]
    fn test_edit_missing_with_no_suggestions() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);

        match controller.edit("Go").unwrap() {
            EditPage::Missing { title, related } => {
                assert_eq!(title, "Go");
                assert!(related.is_empty());
            }
            other => panic!("expected Missing, got {:?}", other),
        }
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);
        seed(&controller, &["Python"]);

        let input = EditInput::parse("# Python\n\nRewritten.").unwrap();
        controller.save("python", &input).unwrap();

        assert_eq!(
            controller.store().get("Python").unwrap().unwrap(),
            "# Python\n\nRewritten."
        );
        // Still a single entry
        assert_eq!(controller.store().list().unwrap().len(), 1);
    }

    #[test]
    fn test_save_rejects_path_bearing_title() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);

        let input = EditInput::parse("outside body").unwrap();
        assert!(matches!(
            controller.save("../escaped", &input),
            Err(WikiError::Validation(_))
        ));

        // Nothing written outside (or inside) the entries directory
        assert!(!temp_dir.path().join("escaped.md").exists());
        assert!(controller.store().list().unwrap().is_empty());
    }

    #[test]
    fn test_save_rejects_backslash_and_hidden_titles() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);

        let input = EditInput::parse("body").unwrap();
        assert!(matches!(
            controller.save("a\\b", &input),
            Err(WikiError::Validation(_))
        ));
        assert!(matches!(
            controller.save(".hidden", &input),
            Err(WikiError::Validation(_))
        ));
    }

    #[test]
    fn test_random_returns_stored_title() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);
        seed(&controller, &["Python", "CSS", "HTML"]);

        let all: HashSet<String> = controller.store().list().unwrap().into_iter().collect();
        for _ in 0..20 {
            let picked = controller.random().unwrap();
            assert!(all.contains(&picked));
        }
    }

    #[test]
    fn test_random_eventually_covers_all_titles() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);
        seed(&controller, &["Python", "CSS", "HTML"]);

        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(controller.random().unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_random_on_empty_store_fails() {
        let temp_dir = TempDir::new().unwrap();
        let controller = test_controller(&temp_dir);

        assert!(matches!(
            controller.random(),
            Err(WikiError::EmptyStore)
        ));
    }
}
