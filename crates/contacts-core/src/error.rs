//! Error types for contact note creation.

use thiserror::Error;

/// Top-level result type for contacts operations.
pub type Result<T> = std::result::Result<T, ContactsError>;

/// Top-level error type for contacts.
#[derive(Debug, Error)]
pub enum ContactsError {
    /// The configured contacts folder is missing or is not a folder.
    #[error("can not find folder: '{path}'")]
    FolderNotFound { path: String },

    #[error("note already exists: '{path}'")]
    NoteExists { path: String },

    #[error("vault error: {0}")]
    Vault(String),

    #[error("editor error: {0}")]
    Editor(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ContactsError {
    /// Whether this is the one failure the creator reports to the user
    /// instead of propagating.
    pub fn is_folder_not_found(&self) -> bool {
        matches!(self, Self::FolderNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_human_readable_messages() {
        let err = ContactsError::FolderNotFound {
            path: "People/Work".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("People/Work"));
        assert!(err.is_folder_not_found());

        let err = ContactsError::NoteExists {
            path: "Contacts/Contact 2.md".to_string(),
        };
        assert!(err.to_string().contains("Contact 2.md"));
        assert!(!err.is_folder_not_found());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ContactsError = io.into();
        assert!(matches!(err, ContactsError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
