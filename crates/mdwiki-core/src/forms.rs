//! Typed input validation
//!
//! User input arrives as raw strings; each operation takes a parsed input
//! type instead. `parse` is the only way to construct one, so a
//! `CreateInput` in hand is always a valid title/body pair and the
//! resolution logic never re-checks.
//!
//! Titles double as filenames, so title validation also rejects anything
//! that would escape the entries directory or collide with special names.

use thiserror::Error;

/// Maximum accepted title length, in characters.
pub const MAX_TITLE_LEN: usize = 120;

/// Errors for malformed user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Entry content must not be empty")]
    EmptyBody,

    #[error("Search query must not be empty")]
    EmptyQuery,

    #[error("Title '{0}' is not allowed: no path separators, no leading dots")]
    UnsafeTitle(String),

    #[error("Title is too long ({len} characters, maximum {max})")]
    TitleTooLong { len: usize, max: usize },
}

/// A validated, non-empty search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    query: String,
}

impl SearchInput {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let query = raw.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(Self {
            query: query.to_string(),
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// A validated title/body pair for creating an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateInput {
    title: String,
    body: String,
}

impl CreateInput {
    pub fn parse(title: &str, body: &str) -> Result<Self, ValidationError> {
        let title = validate_title(title)?;
        let body = validate_body(body)?;
        Ok(Self { title, body })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// A validated replacement body for an existing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditInput {
    body: String,
}

impl EditInput {
    pub fn parse(body: &str) -> Result<Self, ValidationError> {
        let body = validate_body(body)?;
        Ok(Self { body })
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

pub(crate) fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong {
            len,
            max: MAX_TITLE_LEN,
        });
    }

    // Titles become filenames in the entries directory.
    if title.contains(['/', '\\']) || title.starts_with('.') {
        return Err(ValidationError::UnsafeTitle(title.to_string()));
    }

    Ok(title.to_string())
}

fn validate_body(raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_input_trims() {
        let input = SearchInput::parse("  css  ").unwrap();
        assert_eq!(input.query(), "css");
    }

    #[test]
    fn test_search_input_rejects_empty() {
        assert_eq!(SearchInput::parse(""), Err(ValidationError::EmptyQuery));
        assert_eq!(SearchInput::parse("   "), Err(ValidationError::EmptyQuery));
    }

    #[test]
    fn test_create_input_valid() {
        let input = CreateInput::parse("Rust", "# Rust\n\nA systems language.").unwrap();
        assert_eq!(input.title(), "Rust");
        assert!(input.body().starts_with("# Rust"));
    }

    #[test]
    fn test_create_input_rejects_empty_title() {
        assert_eq!(
            CreateInput::parse("", "body"),
            Err(ValidationError::EmptyTitle)
        );
    }

    #[test]
    fn test_create_input_rejects_empty_body() {
        assert_eq!(
            CreateInput::parse("Rust", "  \n "),
            Err(ValidationError::EmptyBody)
        );
    }

    #[test]
    fn test_create_input_rejects_path_separators() {
        assert!(matches!(
            CreateInput::parse("../escape", "body"),
            Err(ValidationError::UnsafeTitle(_))
        ));
        assert!(matches!(
            CreateInput::parse("a/b", "body"),
            Err(ValidationError::UnsafeTitle(_))
        ));
        assert!(matches!(
            CreateInput::parse("a\\b", "body"),
            Err(ValidationError::UnsafeTitle(_))
        ));
    }

    #[test]
    fn test_create_input_rejects_leading_dot() {
        assert!(matches!(
            CreateInput::parse(".hidden", "body"),
            Err(ValidationError::UnsafeTitle(_))
        ));
    }

    #[test]
    fn test_create_input_rejects_long_title() {
        let title = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(matches!(
            CreateInput::parse(&title, "body"),
            Err(ValidationError::TitleTooLong { .. })
        ));
    }

    #[test]
    fn test_title_at_max_length_accepted() {
        let title = "x".repeat(MAX_TITLE_LEN);
        assert!(CreateInput::parse(&title, "body").is_ok());
    }

    #[test]
    fn test_edit_input() {
        let input = EditInput::parse("new body").unwrap();
        assert_eq!(input.body(), "new body");
        assert_eq!(EditInput::parse("\n"), Err(ValidationError::EmptyBody));
    }
}
