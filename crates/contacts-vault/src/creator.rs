//! Contact note creation: resolve folder, number, create, open.

use contacts_core::path::join_path;
use contacts_core::{
    next_number, select_template, ContactsError, NextNumber, Result, TemplateKind, VaultEntry,
    NOTE_EXTENSION,
};

use crate::host::{NoteHandle, NoteStore, Notifier, Workspace};

/// Notice shown when the configured folder does not resolve.
pub fn folder_missing_notice(path: &str) -> String {
    format!("Can not find path: '{path}'. Please update the contacts \"folder\" setting")
}

/// Creates numbered contact notes through the host collaborators.
pub struct ContactCreator<'a> {
    store: &'a dyn NoteStore,
    workspace: &'a dyn Workspace,
    notifier: &'a dyn Notifier,
}

impl<'a> ContactCreator<'a> {
    pub fn new(
        store: &'a dyn NoteStore,
        workspace: &'a dyn Workspace,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            store,
            workspace,
            notifier,
        }
    }

    /// Number the next note in `folder` would get.
    ///
    /// # Errors
    ///
    /// Returns [`ContactsError::FolderNotFound`] if `folder` does not resolve.
    pub fn next_number_in(&self, folder: &str) -> Result<NextNumber> {
        let folder = self.store.resolve_folder(folder)?;
        self.scan(&folder)
    }

    fn scan(&self, folder: &VaultEntry) -> Result<NextNumber> {
        let entries = self.store.entries_under(folder)?;
        let next = next_number(
            entries
                .iter()
                .filter(|e| e.is_leaf())
                .map(VaultEntry::basename),
        );
        tracing::debug!(folder = folder.path(), next = next.0, "derived next contact number");
        Ok(next)
    }

    /// Create a contact note in `folder` and open it.
    ///
    /// Returns `Ok(None)` after notifying the user when `folder` does not
    /// resolve; nothing is created in that case. Storage and editor failures
    /// are returned as errors, and the note is only opened once creation
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Any failure other than a missing folder.
    pub async fn create_contact(
        &self,
        folder: &str,
        kind: TemplateKind,
        custom_template: &str,
    ) -> Result<Option<NoteHandle>> {
        let resolved = match self.store.resolve_folder(folder) {
            Ok(resolved) => resolved,
            Err(ContactsError::FolderNotFound { path }) => {
                tracing::debug!(folder = path.as_str(), "contacts folder not found");
                self.notifier.notify(&folder_missing_notice(&path));
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let next = self.scan(&resolved)?;
        let path = join_path(folder, &format!("{}.{NOTE_EXTENSION}", next.note_name()));
        let body = select_template(kind, custom_template);

        let note = self.store.create_note(&path, body).await?;
        tracing::info!(path = note.path.as_str(), template = %kind, "created contact note");

        self.workspace.open_note(&note).await?;
        Ok(Some(note))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use contacts_core::{CONTACT_TABLE_TEMPLATE, FRONTMATTER_TEMPLATE};

    use super::*;
    use crate::fs_vault::FsVault;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingWorkspace {
        opened: Mutex<Vec<NoteHandle>>,
    }

    #[async_trait]
    impl Workspace for RecordingWorkspace {
        async fn open_note(&self, note: &NoteHandle) -> Result<()> {
            self.opened.lock().unwrap().push(note.clone());
            Ok(())
        }
    }

    struct Fixture {
        dir: tempfile::TempDir,
        vault: FsVault,
        workspace: RecordingWorkspace,
        notifier: RecordingNotifier,
    }

    impl Fixture {
        fn new(files: &[&str]) -> Self {
            let dir = tempfile::tempdir().unwrap();
            fs::create_dir_all(dir.path().join("Contacts")).unwrap();
            for file in files {
                let path = dir.path().join(file);
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(&path, "").unwrap();
            }
            let vault = FsVault::open(dir.path()).unwrap();
            Self {
                dir,
                vault,
                workspace: RecordingWorkspace::default(),
                notifier: RecordingNotifier::default(),
            }
        }

        fn creator(&self) -> ContactCreator<'_> {
            ContactCreator::new(&self.vault, &self.workspace, &self.notifier)
        }

        fn read(&self, vault_path: &str) -> String {
            fs::read_to_string(self.dir.path().join(vault_path)).unwrap()
        }
    }

    #[tokio::test]
    async fn empty_folder_gets_bare_name_and_table() {
        let fx = Fixture::new(&[]);
        let note = fx
            .creator()
            .create_contact("Contacts", TemplateKind::Default, "")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(note.path, "Contacts/Contact.md");
        assert_eq!(fx.read("Contacts/Contact.md"), CONTACT_TABLE_TEMPLATE);
        assert_eq!(*fx.workspace.opened.lock().unwrap(), vec![note]);
        assert!(fx.notifier.messages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn numbered_folder_gets_next_number_and_frontmatter() {
        let fx = Fixture::new(&["Contacts/Contact 9.md"]);
        let note = fx
            .creator()
            .create_contact("Contacts", TemplateKind::Frontmatter, "")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(note.path, "Contacts/Contact 10.md");
        assert_eq!(fx.read("Contacts/Contact 10.md"), FRONTMATTER_TEMPLATE);
    }

    #[tokio::test]
    async fn custom_template_body_is_written_verbatim() {
        let fx = Fixture::new(&["Contacts/Contact.md"]);
        let note = fx
            .creator()
            .create_contact("Contacts", TemplateKind::Custom, "# Who\n")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(note.path, "Contacts/Contact 1.md");
        assert_eq!(fx.read("Contacts/Contact 1.md"), "# Who\n");
    }

    #[tokio::test]
    async fn nested_notes_count_toward_numbering() {
        let fx = Fixture::new(&["Contacts/Archive/Contact 4.md", "Contacts/Contact 2.md"]);
        let note = fx
            .creator()
            .create_contact("/Contacts/", TemplateKind::Default, "")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(note.path, "Contacts/Contact 5.md");
    }

    #[tokio::test]
    async fn repeated_creation_counts_up() {
        let fx = Fixture::new(&[]);
        let creator = fx.creator();
        let mut paths = Vec::new();
        for _ in 0..3 {
            let note = creator
                .create_contact("Contacts", TemplateKind::Default, "")
                .await
                .unwrap()
                .unwrap();
            paths.push(note.path);
        }
        assert_eq!(
            paths,
            vec![
                "Contacts/Contact.md",
                "Contacts/Contact 1.md",
                "Contacts/Contact 2.md"
            ]
        );
    }

    #[tokio::test]
    async fn missing_folder_notifies_once_and_creates_nothing() {
        let fx = Fixture::new(&[]);
        let result = fx
            .creator()
            .create_contact("People", TemplateKind::Default, "")
            .await
            .unwrap();
        assert!(result.is_none());

        let messages = fx.notifier.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("'People'"));
        assert!(fx.workspace.opened.lock().unwrap().is_empty());
        assert!(!fx.dir.path().join("People").exists());
        assert_eq!(fs::read_dir(fx.dir.path().join("Contacts")).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn failed_creation_does_not_open() {
        // A folder named like the target note is not a leaf, so numbering
        // picks `Contact.md` and creation collides with it.
        let fx = Fixture::new(&[]);
        fs::create_dir_all(fx.dir.path().join("Contacts/Contact.md")).unwrap();
        let err = fx
            .creator()
            .create_contact("Contacts", TemplateKind::Default, "")
            .await
            .unwrap_err();
        assert!(matches!(err, ContactsError::NoteExists { .. }));
        assert!(fx.workspace.opened.lock().unwrap().is_empty());
        assert!(fx.notifier.messages.lock().unwrap().is_empty());
    }

    #[test]
    fn next_number_in_reports_missing_folder() {
        let fx = Fixture::new(&["Contacts/Contact 3.md", "Contacts/Contact 7.md"]);
        assert_eq!(fx.creator().next_number_in("Contacts").unwrap(), NextNumber(8));
        let err = fx.creator().next_number_in("Nope").unwrap_err();
        assert!(err.is_folder_not_found());
    }
}
