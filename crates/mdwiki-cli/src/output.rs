//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)
//!
//! The controller payloads are already `Serialize`, so JSON mode prints
//! them as-is; human mode lays them out for the terminal.

use mdwiki_core::{EditPage, EntryPage, IndexPage, SearchPage};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print the index page
    pub fn print_index(&self, page: &IndexPage) {
        match self.format {
            OutputFormat::Human => {
                if page.titles.is_empty() {
                    println!("No entries yet.");
                    return;
                }
                for title in &page.titles {
                    println!("{}", title);
                }
                println!("\n{} entr{}", page.titles.len(), plural_y(page.titles.len()));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(page).unwrap());
            }
            OutputFormat::Quiet => {
                for title in &page.titles {
                    println!("{}", title);
                }
            }
        }
    }

    /// Print a view outcome: the rendered entry or a suggestions page
    pub fn print_entry_page(&self, page: &EntryPage) {
        match self.format {
            OutputFormat::Human => match page {
                EntryPage::Found { title, html, .. } => {
                    println!("── {} ──", title);
                    println!();
                    println!("{}", html.trim_end());
                }
                EntryPage::Missing { query, related } => {
                    println!("No entry for '{}'.", query);
                    self.print_suggestions(related);
                }
            },
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(page).unwrap());
            }
            OutputFormat::Quiet => match page {
                EntryPage::Found { title, .. } => println!("{}", title),
                EntryPage::Missing { related, .. } => {
                    for title in related {
                        println!("{}", title);
                    }
                }
            },
        }
    }

    /// Print search results (the redirect case is shown as an entry page)
    pub fn print_search_page(&self, page: &SearchPage) {
        match self.format {
            OutputFormat::Human => match page {
                SearchPage::Redirect { title } => println!("→ {}", title),
                SearchPage::Results { query, related } => {
                    println!("No exact match for '{}'.", query);
                    self.print_suggestions(related);
                }
            },
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(page).unwrap());
            }
            OutputFormat::Quiet => match page {
                SearchPage::Redirect { title } => println!("{}", title),
                SearchPage::Results { related, .. } => {
                    for title in related {
                        println!("{}", title);
                    }
                }
            },
        }
    }

    /// Print an edit outcome when the entry is missing
    pub fn print_edit_page(&self, page: &EditPage) {
        match self.format {
            OutputFormat::Human => match page {
                EditPage::Form { title, body } => {
                    println!("── {} ──", title);
                    println!();
                    println!("{}", body);
                }
                EditPage::Missing { title, related } => {
                    println!(
                        "'{}' does not exist and cannot be edited. Create it with `new`.",
                        title
                    );
                    self.print_suggestions(related);
                }
            },
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(page).unwrap());
            }
            OutputFormat::Quiet => {
                if let EditPage::Missing { related, .. } = page {
                    for title in related {
                        println!("{}", title);
                    }
                }
            }
        }
    }

    fn print_suggestions(&self, related: &[String]) {
        if related.is_empty() {
            return;
        }
        println!();
        println!("Did you mean:");
        for title in related {
            println!("  {}", title);
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }
}

fn plural_y(count: usize) -> &'static str {
    if count == 1 {
        "y"
    } else {
        "ies"
    }
}
