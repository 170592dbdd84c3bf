//! # contacts-vault
//!
//! Host-side collaborators and the contact note creator.
//!
//! The vault is a directory of markdown notes addressed by vault-relative
//! paths. Creation goes through three seams so the orchestration in
//! [`ContactCreator`] never touches the filesystem or an editor directly:
//! - [`NoteStore`]: resolve folders, enumerate entries, create notes
//! - [`Workspace`]: open a created note for editing
//! - [`Notifier`]: show a message to the user

pub mod creator;
pub mod fs_vault;
pub mod host;
pub mod workspace;

pub use creator::{folder_missing_notice, ContactCreator};
pub use fs_vault::FsVault;
pub use host::{NoteHandle, NoteStore, Notifier, Workspace};
pub use workspace::{EditorWorkspace, NullWorkspace, StderrNotifier};
