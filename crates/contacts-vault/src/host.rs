//! Traits at the boundary between contact creation and the host.

use async_trait::async_trait;

use contacts_core::{Result, VaultEntry};

/// Handle to a note that exists in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteHandle {
    /// Vault-relative path, including extension.
    pub path: String,
}

impl NoteHandle {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Storage layer: folder lookup, recursive listing, note creation.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Resolve a vault-relative path to a folder entry.
    ///
    /// # Errors
    ///
    /// Returns [`contacts_core::ContactsError::FolderNotFound`] if nothing
    /// exists at `path` or it is not a folder.
    fn resolve_folder(&self, path: &str) -> Result<VaultEntry>;

    /// Every entry below `folder`, recursively, flattened. No extension
    /// filtering is applied.
    fn entries_under(&self, folder: &VaultEntry) -> Result<Vec<VaultEntry>>;

    /// Create a new note at `path` with `body`. Fails if a note already
    /// exists there.
    async fn create_note(&self, path: &str, body: &str) -> Result<NoteHandle>;
}

/// Editor side of the host: open a note and make it active.
#[async_trait]
pub trait Workspace: Send + Sync {
    async fn open_note(&self, note: &NoteHandle) -> Result<()>;
}

/// Fire-and-forget user notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}
