//! Title normalization
//!
//! Entry identity is case-insensitive. Every comparison between a
//! requested title and a stored one goes through `normalize` so the rule
//! lives in exactly one place: store lookups, store writes, and search all
//! use it.

/// Normalize a title for comparison: trim surrounding whitespace and fold
/// to lowercase (full Unicode lowercasing, not just ASCII).
pub fn normalize(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Whether two titles are the same entry identity.
pub fn matches(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_case() {
        assert_eq!(normalize("Python"), "python");
        assert_eq!(normalize("CSS"), "css");
        assert_eq!(normalize("already lower"), "already lower");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize("  HTML  "), "html");
        assert_eq!(normalize("\tGit\n"), "git");
    }

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize("CAFÉ"), "café");
        assert_eq!(normalize("ÜBUNG"), "übung");
    }

    #[test]
    fn test_matches() {
        assert!(matches("Python", "python"));
        assert!(matches("  python ", "PYTHON"));
        assert!(!matches("Python", "Ruby"));
    }

    #[test]
    fn test_empty_title_normalizes_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
