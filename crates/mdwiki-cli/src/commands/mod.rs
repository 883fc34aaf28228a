//! Command handlers

pub mod config;
pub mod entry;

use anyhow::anyhow;
use mdwiki_core::WikiError;

/// Turn a core error into an anyhow error, appending the recovery hint
/// when the core offers one.
pub fn with_hint(error: WikiError) -> anyhow::Error {
    match error.recovery_suggestion() {
        Some(hint) => anyhow!("{}\n{}", error, hint),
        None => error.into(),
    }
}
