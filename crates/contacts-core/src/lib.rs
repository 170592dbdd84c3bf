//! # contacts-core
//!
//! Pure logic for creating sequentially numbered contact notes.
//!
//! - [`select_template`] — pick the body for a new note by [`TemplateKind`]
//! - [`next_number`] — derive the next free `Contact <n>` suffix from existing names
//! - [`VaultEntry`] — file/folder entries the scan runs over
//! - [`path`] — vault-relative path normalisation
//! - [`ContactsSettings`] — persisted folder and template choices
//! - Error hierarchy ([`ContactsError`])

pub mod entry;
pub mod error;
pub mod numbering;
pub mod path;
pub mod settings;
pub mod template;

pub use entry::VaultEntry;
pub use error::{ContactsError, Result};
pub use numbering::{next_number, NextNumber, NOTE_BASE_NAME};
pub use settings::ContactsSettings;
pub use template::{select_template, TemplateKind, CONTACT_TABLE_TEMPLATE, FRONTMATTER_TEMPLATE};

/// Extension given to every created contact note.
pub const NOTE_EXTENSION: &str = "md";
