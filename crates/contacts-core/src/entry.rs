//! Vault entries as seen by the numbering scan.

use std::fmt;

/// A file or folder inside the vault, addressed by vault-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VaultEntry {
    File { path: String, basename: String },
    Folder { path: String },
}

impl VaultEntry {
    /// Build a file entry; the basename is the last segment without its
    /// final extension.
    pub fn file(path: impl Into<String>) -> Self {
        let path = path.into();
        let basename = file_stem(&path).to_string();
        Self::File { path, basename }
    }

    pub fn folder(path: impl Into<String>) -> Self {
        Self::Folder { path: path.into() }
    }

    /// Leaf entries are notes and attachments; folders are not.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    pub fn path(&self) -> &str {
        match self {
            Self::File { path, .. } | Self::Folder { path } => path,
        }
    }

    pub fn basename(&self) -> &str {
        match self {
            Self::File { basename, .. } => basename,
            Self::Folder { path } => last_segment(path),
        }
    }
}

impl fmt::Display for VaultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn file_stem(path: &str) -> &str {
    let name = last_segment(path);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(dot) => &name[..dot],
    }
}
