//! Persisted settings for contact note creation.
//!
//! Stored as TOML in `.contacts/config.toml` at the vault root:
//! ```toml
//! folder = "Contacts"
//! template = "frontmatter"
//! custom_template = ""
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ContactsError;
use crate::template::TemplateKind;

/// Directory under the vault root holding contacts configuration.
pub const CONFIG_DIR: &str = ".contacts";
/// Settings file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// User settings. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactsSettings {
    /// Vault-relative folder new contacts are created in.
    pub folder: String,
    /// Template used when none is requested explicitly.
    pub template: TemplateKind,
    /// Body for [`TemplateKind::Custom`].
    pub custom_template: String,
    /// Editor command used to open new notes. Falls back to `$VISUAL`/`$EDITOR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl Default for ContactsSettings {
    fn default() -> Self {
        Self {
            folder: "Contacts".to_string(),
            template: TemplateKind::Default,
            custom_template: String::new(),
            editor: None,
        }
    }
}

impl ContactsSettings {
    /// # Errors
    ///
    /// Returns [`ContactsError::Config`] if the TOML is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self, ContactsError> {
        toml::from_str(content).map_err(|e| ContactsError::Config(e.to_string()))
    }

    /// # Errors
    ///
    /// Returns [`ContactsError::Serialization`] if the settings cannot be encoded.
    pub fn to_toml_string(&self) -> Result<String, ContactsError> {
        toml::to_string_pretty(self).map_err(|e| ContactsError::Serialization(e.to_string()))
    }
}
