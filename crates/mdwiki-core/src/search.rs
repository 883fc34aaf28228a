//! Title resolution and related-title search
//!
//! Maps a requested title to a stored entry, or produces "did you mean"
//! suggestions when nothing matches exactly.

use serde::Serialize;
use tracing::debug;

use crate::error::WikiResult;
use crate::store::EntryStore;
use crate::title;

/// Outcome of resolving a query against the stored titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum SearchResult {
    /// Exact case-insensitive match; carries the stored casing
    Found { title: String },
    /// No exact match; `related` holds every title containing the query
    /// as a case-insensitive substring, in listing order (may be empty)
    NotFound { related: Vec<String> },
}

/// Resolves queries against an [`EntryStore`]
pub struct TitleMatcher<'a> {
    store: &'a EntryStore,
}

impl<'a> TitleMatcher<'a> {
    pub fn new(store: &'a EntryStore) -> Self {
        Self { store }
    }

    /// Resolve a query title
    ///
    /// The query and every stored title are compared through
    /// [`title::normalize`]. An exact match wins and reports the stored
    /// casing; otherwise all titles whose normalized form contains the
    /// normalized query are returned as suggestions.
    ///
    /// An empty query is a substring of every title, so it yields
    /// `NotFound` with all titles as suggestions. Rejecting empty queries
    /// is the input boundary's job ([`crate::forms::SearchInput`]), not
    /// this function's.
    pub fn resolve(&self, query: &str) -> WikiResult<SearchResult> {
        let needle = title::normalize(query);
        let titles = self.store.list()?;

        if let Some(found) = titles.iter().find(|t| title::normalize(t) == needle) {
            return Ok(SearchResult::Found {
                title: found.clone(),
            });
        }

        let related: Vec<String> = titles
            .into_iter()
            .filter(|t| title::normalize(t).contains(&needle))
            .collect();

        debug!(query, suggestions = related.len(), "no exact title match");
        Ok(SearchResult::NotFound { related })
    }
}
