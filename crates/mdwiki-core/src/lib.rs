//! mdwiki core library
//!
//! This crate provides the core functionality for mdwiki, a minimal
//! encyclopedia whose entries are flat Markdown files named by title.
//!
//! # Architecture
//!
//! - **EntryStore**: one `.md` file per entry; case-insensitive lookup
//! - **TitleMatcher**: exact resolution or related-title suggestions
//! - **PageController**: per-operation orchestration returning structured
//!   payloads for a presentation layer to render
//!
//! The title index is rebuilt from the directory listing on every read;
//! there is no cache and no database.
//!
//! # Quick Start
//!
//! ```text
//! let store = EntryStore::open(&Config::load()?)?;
//! let controller = PageController::new(store);
//!
//! let input = CreateInput::parse("Python", "# Python\n")?;
//! controller.create(&input)?;
//!
//! match controller.view("python")? {
//!     EntryPage::Found { html, .. } => println!("{html}"),
//!     EntryPage::Missing { related, .. } => println!("try: {related:?}"),
//! }
//! ```
//!
//! # Modules
//!
//! - `controller`: page orchestration (main entry point)
//! - `store`: flat-file entry storage
//! - `search`: title resolution and suggestions
//! - `render`: Markdown to HTML
//! - `forms`: typed input validation
//! - `title`: title normalization
//! - `config`: application configuration

pub mod config;
pub mod controller;
pub mod error;
pub mod forms;
pub mod render;
pub mod search;
pub mod store;
pub mod title;

pub use config::Config;
pub use controller::{EditPage, EntryPage, IndexPage, PageController, SearchPage};
pub use error::{WikiError, WikiResult};
pub use forms::{CreateInput, EditInput, SearchInput, ValidationError};
pub use search::{SearchResult, TitleMatcher};
pub use store::EntryStore;
