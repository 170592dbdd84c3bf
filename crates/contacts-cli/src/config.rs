//! Loading and initialising `.contacts/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use contacts_core::settings::{CONFIG_DIR, CONFIG_FILE};
use contacts_core::ContactsSettings;

pub fn config_path(vault_root: &Path) -> PathBuf {
    vault_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Read settings for a vault. A missing file yields defaults.
pub fn load_settings(vault_root: &Path) -> anyhow::Result<ContactsSettings> {
    let path = config_path(vault_root);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ContactsSettings::default());
    }
    let content =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    let settings = ContactsSettings::from_toml_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(folder = settings.folder.as_str(), template = %settings.template, "loaded config");
    Ok(settings)
}

/// Write default settings unless a config file already exists.
///
/// Returns `true` if a new file was written.
pub fn init_settings(vault_root: &Path) -> anyhow::Result<bool> {
    let path = config_path(vault_root);
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let text = ContactsSettings::default().to_toml_string()?;
    fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(true)
}
