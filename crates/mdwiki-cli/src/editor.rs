//! Interactive editing support
//!
//! Entry bodies are written in $EDITOR: the current body is copied to a
//! temp file, the editor runs to completion, and the file contents come
//! back as the new body.

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::Command;

/// Open the user's editor pre-filled with `initial` and return the edited text.
pub fn edit_text(initial: &str) -> Result<String> {
    let editor = preferred_editor()?;
    let path = scratch_path();

    fs::write(&path, initial)
        .with_context(|| format!("Failed to create scratch file {:?}", path))?;

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("Failed to run editor: {}", editor))?;

    let result = if status.success() {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read edited file {:?}", path))
    } else {
        Err(anyhow::anyhow!(
            "Editor '{}' exited with non-zero status",
            editor
        ))
    };

    let _ = fs::remove_file(&path);
    result
}

fn scratch_path() -> PathBuf {
    env::temp_dir().join(format!("mdwiki-{}.md", std::process::id()))
}

/// Pick an editor: $EDITOR, then $VISUAL, then whatever common editor is
/// on PATH.
fn preferred_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(value) = env::var(var) {
            if !value.is_empty() {
                return Ok(value);
            }
        }
    }

    for candidate in ["nano", "vim", "vi", "emacs"] {
        if on_path(candidate) {
            return Ok(candidate.to_string());
        }
    }

    bail!("No editor found. Set $EDITOR, e.g. `export EDITOR=nano`.")
}

fn on_path(cmd: &str) -> bool {
    Command::new("which")
        .arg(cmd)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Ask the user to confirm an action.
///
/// Returns false without prompting when stdin is not a TTY.
pub fn confirm(prompt: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(false);
    }

    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_path_is_markdown() {
        let path = scratch_path();
        assert_eq!(path.extension().unwrap(), "md");
    }

    #[test]
    fn test_on_path() {
        #[cfg(unix)]
        assert!(on_path("ls"));

        assert!(!on_path("definitely_not_a_real_command_12345"));
    }
}
