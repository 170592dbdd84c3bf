//! Next-number derivation for `Contact <n>` note names.
//!
//! Every basename in the contacts folder is scanned for occurrences of the
//! base name, optionally followed by whitespace and digits. Matching is not
//! anchored: `My Contact List` occupies the bare `Contact` slot and
//! `Old Contact 12 (archived)` counts as number 12.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Fixed prefix of every generated contact note name.
pub const NOTE_BASE_NAME: &str = "Contact";

static CONTACT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Contact(?P<number>\s[0-9]+)*").expect("valid contact name regex"));

/// Numeric suffix for the next contact note. Zero means the bare base name
/// is still free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NextNumber(pub u64);

impl NextNumber {
    pub fn is_bare(self) -> bool {
        self.0 == 0
    }

    /// Note name without extension: `Contact` or `Contact <n>`.
    pub fn note_name(self) -> String {
        if self.is_bare() {
            NOTE_BASE_NAME.to_string()
        } else {
            format!("{NOTE_BASE_NAME} {}", self.0)
        }
    }
}

/// Renders the suffix only: empty for the bare name, digits otherwise.
impl fmt::Display for NextNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bare() {
            Ok(())
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Compute the next free number from existing note basenames.
///
/// The result is strictly greater than every numeric suffix found, and at
/// least 1 when any bare `Contact` occurrence exists. Order of `names` does
/// not matter.
pub fn next_number<I, S>(names: I) -> NextNumber
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut next = 0u64;
    for name in names {
        for caps in CONTACT_NAME_RE.captures_iter(name.as_ref()) {
            match caps.name("number") {
                None => {
                    if next == 0 {
                        next = 1;
                    }
                }
                Some(number) => {
                    let bumped = number
                        .as_str()
                        .trim()
                        .parse::<u64>()
                        .ok()
                        .and_then(|current| current.checked_add(1));
                    match bumped {
                        Some(candidate) => next = next.max(candidate),
                        None => {
                            // Unrepresentable numbers still occupy the bare slot.
                            tracing::debug!(name = name.as_ref(), "contact number out of range");
                            if next == 0 {
                                next = 1;
                            }
                        }
                    }
                }
            }
        }
    }
    NextNumber(next)
}
