//! Filesystem-backed vault.
//!
//! Vault-relative paths map onto a root directory. Hidden entries
//! (`.contacts`, `.git`, ...) are invisible to listing, as the host hides its
//! own configuration directories.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use contacts_core::path::normalize_path;
use contacts_core::{ContactsError, Result, VaultEntry};

use crate::host::{NoteHandle, NoteStore};

/// A vault rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    /// Open an existing vault directory.
    ///
    /// # Errors
    ///
    /// Returns [`ContactsError::Vault`] if `root` is not a directory.
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(ContactsError::Vault(format!(
                "vault root is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem location of a vault-relative path.
    ///
    /// # Errors
    ///
    /// Returns [`ContactsError::Vault`] if the path would leave the vault.
    pub fn absolute(&self, vault_path: &str) -> Result<PathBuf> {
        let normalized = normalize_path(vault_path);
        if normalized == "/" {
            return Ok(self.root.clone());
        }
        let mut out = self.root.clone();
        for segment in normalized.split('/') {
            if segment == ".." || segment == "." {
                return Err(ContactsError::Vault(format!(
                    "path escapes vault: {vault_path}"
                )));
            }
            out.push(segment);
        }
        Ok(out)
    }

    pub fn absolute_path(&self, note: &NoteHandle) -> Result<PathBuf> {
        self.absolute(&note.path)
    }

    /// All leaf entries under `folder`, sorted by path.
    ///
    /// # Errors
    ///
    /// Propagates folder resolution and listing failures.
    pub fn find_contact_files(&self, folder: &str) -> Result<Vec<VaultEntry>> {
        let folder = self.resolve_folder(folder)?;
        let mut files: Vec<VaultEntry> = self
            .entries_under(&folder)?
            .into_iter()
            .filter(VaultEntry::is_leaf)
            .collect();
        files.sort_by(|a, b| a.path().cmp(b.path()));
        Ok(files)
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent == "/" {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

fn visit_dir(dir: &Path, vault_path: &str, entries: &mut Vec<VaultEntry>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        let path = child_path(vault_path, &name);
        if entry.file_type()?.is_dir() {
            entries.push(VaultEntry::folder(path.clone()));
            visit_dir(&entry.path(), &path, entries)?;
        } else {
            entries.push(VaultEntry::file(path));
        }
    }
    Ok(())
}

#[async_trait]
impl NoteStore for FsVault {
    fn resolve_folder(&self, path: &str) -> Result<VaultEntry> {
        let normalized = normalize_path(path);
        let not_found = || ContactsError::FolderNotFound {
            path: path.to_string(),
        };
        let absolute = self.absolute(&normalized).map_err(|_| not_found())?;
        if !absolute.is_dir() {
            return Err(not_found());
        }
        Ok(VaultEntry::folder(normalized))
    }

    fn entries_under(&self, folder: &VaultEntry) -> Result<Vec<VaultEntry>> {
        let dir = self.absolute(folder.path())?;
        let mut entries = Vec::new();
        visit_dir(&dir, folder.path(), &mut entries)?;
        tracing::debug!(folder = folder.path(), count = entries.len(), "listed vault entries");
        Ok(entries)
    }

    async fn create_note(&self, path: &str, body: &str) -> Result<NoteHandle> {
        let normalized = normalize_path(path);
        let absolute = self.absolute(&normalized)?;
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&absolute)
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => ContactsError::NoteExists {
                    path: normalized.clone(),
                },
                _ => ContactsError::Io(e),
            })?;
        write_body(&mut file, &absolute, body).await?;
        Ok(NoteHandle::new(normalized))
    }
}

/// Write a freshly created note, removing it again if the write fails so a
/// partial note never takes part in numbering.
async fn write_body<W>(writer: &mut W, absolute: &Path, body: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written: io::Result<()> = async {
        writer.write_all(body.as_bytes()).await?;
        writer.flush().await
    }
    .await;
    if let Err(e) = written {
        tracing::debug!(path = %absolute.display(), error = %e, "removing partially written note");
        if let Err(remove_err) = tokio::fs::remove_file(absolute).await {
            tracing::warn!(path = %absolute.display(), error = %remove_err, "failed to remove partial note");
        }
        return Err(ContactsError::Io(e));
    }
    Ok(())
}
