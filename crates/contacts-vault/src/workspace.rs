//! Editor workspace and user notices for a terminal host.

use std::path::PathBuf;

use async_trait::async_trait;

use contacts_core::{ContactsError, Result};

use crate::fs_vault::FsVault;
use crate::host::{NoteHandle, Notifier, Workspace};

/// Opens notes in an external editor and waits for it to exit.
#[derive(Debug, Clone)]
pub struct EditorWorkspace {
    vault: FsVault,
    command: Vec<String>,
}

impl EditorWorkspace {
    /// Use `command` if given, otherwise `$VISUAL`, then `$EDITOR`.
    ///
    /// The command is split on whitespace, so `code --wait` works.
    ///
    /// # Errors
    ///
    /// Returns [`ContactsError::Editor`] if no editor is configured.
    pub fn new(vault: FsVault, command: Option<&str>) -> Result<Self> {
        let configured = resolve_command(
            command,
            std::env::var("VISUAL").ok(),
            std::env::var("EDITOR").ok(),
        )
        .ok_or_else(|| {
            ContactsError::Editor(
                "no editor configured; set `editor` in config, $VISUAL or $EDITOR".to_string(),
            )
        })?;
        Ok(Self {
            vault,
            command: configured.split_whitespace().map(str::to_string).collect(),
        })
    }

    pub fn program(&self) -> &str {
        self.command.first().map(String::as_str).unwrap_or_default()
    }

    fn note_path(&self, note: &NoteHandle) -> Result<PathBuf> {
        self.vault.absolute_path(note)
    }
}

#[async_trait]
impl Workspace for EditorWorkspace {
    async fn open_note(&self, note: &NoteHandle) -> Result<()> {
        let path = self.note_path(note)?;
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| ContactsError::Editor("empty editor command".to_string()))?;
        tracing::debug!(program = program.as_str(), path = %path.display(), "opening note in editor");
        let status = tokio::process::Command::new(program)
            .args(args)
            .arg(&path)
            .status()
            .await
            .map_err(|e| ContactsError::Editor(format!("failed to start '{program}': {e}")))?;
        if !status.success() {
            return Err(ContactsError::Editor(format!(
                "'{program}' exited with {status}"
            )));
        }
        Ok(())
    }
}

/// First non-blank of the configured command, `$VISUAL` and `$EDITOR`.
fn resolve_command(
    configured: Option<&str>,
    visual: Option<String>,
    editor: Option<String>,
) -> Option<String> {
    let usable = |c: &String| !c.trim().is_empty();
    configured
        .map(str::to_string)
        .filter(usable)
        .or_else(|| visual.filter(usable))
        .or_else(|| editor.filter(usable))
}

/// Workspace that leaves created notes closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullWorkspace;

#[async_trait]
impl Workspace for NullWorkspace {
    async fn open_note(&self, note: &NoteHandle) -> Result<()> {
        tracing::debug!(path = note.path.as_str(), "not opening note");
        Ok(())
    }
}

/// Prints notices to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}
