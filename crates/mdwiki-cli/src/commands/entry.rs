//! Entry command handlers
//!
//! One handler per page operation. Soft not-found outcomes (unknown
//! title on `show`, no exact match on `search`) print suggestions and
//! exit successfully; only real failures become errors.

use anyhow::{Context, Result};

use mdwiki_core::{
    CreateInput, EditInput, EditPage, EntryPage, PageController, SearchInput, SearchPage,
    WikiError,
};

use crate::commands::with_hint;
use crate::editor::{confirm, edit_text};
use crate::output::Output;

/// List all entry titles
pub fn list(controller: &PageController, output: &Output) -> Result<()> {
    let page = controller.index()?;
    output.print_index(&page);
    Ok(())
}

/// Show a single entry, or suggestions when the title is unknown
pub fn show(controller: &PageController, title: &str, output: &Output) -> Result<()> {
    let page = controller.view(title)?;
    output.print_entry_page(&page);
    Ok(())
}

/// Search entries by title
///
/// An exact match behaves like the web app's redirect: the matched entry
/// is shown directly.
pub fn search(controller: &PageController, query: &str, output: &Output) -> Result<()> {
    let input = SearchInput::parse(query)?;

    match controller.search(&input)? {
        SearchPage::Redirect { title } => show(controller, &title, output),
        page @ SearchPage::Results { .. } => {
            output.print_search_page(&page);
            Ok(())
        }
    }
}

/// Create a new entry
pub fn create(
    controller: &PageController,
    title: &str,
    body: Option<String>,
    output: &Output,
) -> Result<()> {
    // Refuse existing titles before opening an editor
    if controller.store().exists(title)? {
        return Err(with_hint(WikiError::AlreadyExists {
            title: controller
                .store()
                .canonical_title(title)?
                .unwrap_or_else(|| title.to_string()),
        }));
    }

    let body = match body {
        Some(body) => body,
        None => edit_text("").context("Failed to collect entry body")?,
    };

    let input = CreateInput::parse(title, &body)?;
    let created = controller.create(&input).map_err(with_hint)?;

    output.success(&format!("Created entry: {}", created));
    show(controller, &created, output)
}

/// Edit an existing entry
pub fn edit(
    controller: &PageController,
    title: &str,
    body: Option<String>,
    output: &Output,
) -> Result<()> {
    match controller.edit(title)? {
        EditPage::Form {
            title,
            body: current,
        } => {
            let new_body = match body {
                Some(body) => {
                    // Blind overwrite from a flag; editor-based edits show
                    // the current body instead.
                    if output.should_prompt()
                        && !confirm(&format!("Replace the current body of '{}'?", title))?
                    {
                        output.message("Cancelled.");
                        return Ok(());
                    }
                    body
                }
                None => edit_text(&current).context("Failed to edit entry body")?,
            };

            let input = EditInput::parse(&new_body)?;
            controller.save(&title, &input)?;

            output.success(&format!("Saved entry: {}", title));
            Ok(())
        }
        page @ EditPage::Missing { .. } => {
            output.print_edit_page(&page);
            Ok(())
        }
    }
}

/// Show a randomly picked entry
pub fn random(controller: &PageController, output: &Output) -> Result<()> {
    let title = controller.random().map_err(with_hint)?;

    match controller.view(&title)? {
        page @ EntryPage::Found { .. } => {
            output.print_entry_page(&page);
            Ok(())
        }
        // The pick came from the listing; if it vanished since, say so
        EntryPage::Missing { query, .. } => {
            output.message(&format!("Entry '{}' disappeared while reading it.", query));
            Ok(())
        }
    }
}
