//! Markdown rendering

use pulldown_cmark::{html, Options, Parser};

/// Convert an entry body from Markdown to HTML
///
/// Pure and best-effort: malformed Markdown still renders to some HTML,
/// there is no failure mode. Tables, strikethrough, and task lists are
/// enabled on top of CommonMark.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
