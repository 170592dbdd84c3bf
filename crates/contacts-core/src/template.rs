//! Template bodies for new contact notes.
//!
//! Two bodies are fixed; the third is supplied by the user's settings.
//! Selection is a pure lookup keyed by [`TemplateKind`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default body: a key/value table wrapped in `/---contact---/` markers.
pub const CONTACT_TABLE_TEMPLATE: &str = "/---contact---/
| key       | value |
| --------- | ----- |
| Name      |       |
| Last Name |       |
| Phone     |       |
| Telegram  |       |
| Linkedin  |       |
| Birthday  |       |
| Last chat |       |
| Friends   |       |
/---contact---/";

/// Frontmatter-only body.
pub const FRONTMATTER_TEMPLATE: &str = "---
name:
  first:
  last:
phone:
telegram:
linkedin:
birthday:
last_chat:
friends:
type: contact
---";

/// Which body a new contact note starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TemplateKind {
    /// Body taken verbatim from settings.
    Custom,
    /// Metadata block only.
    Frontmatter,
    /// Key/value table.
    #[default]
    Default,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Custom, Self::Frontmatter, Self::Default];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Frontmatter => "frontmatter",
            Self::Default => "default",
        }
    }

    /// Parse a kind name. Unknown names fall back to [`TemplateKind::Default`].
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "custom" => Self::Custom,
            "frontmatter" => Self::Frontmatter,
            "default" => Self::Default,
            other => {
                tracing::debug!(kind = other, "unknown template kind, using default");
                Self::Default
            }
        }
    }
}

impl From<&str> for TemplateKind {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for TemplateKind {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return the body for a new note of the given kind.
///
/// `custom_text` is only consulted for [`TemplateKind::Custom`] and is
/// returned as-is, without validation.
pub fn select_template(kind: TemplateKind, custom_text: &str) -> &str {
    match kind {
        TemplateKind::Custom => custom_text,
        TemplateKind::Frontmatter => FRONTMATTER_TEMPLATE,
        TemplateKind::Default => CONTACT_TABLE_TEMPLATE,
    }
}
