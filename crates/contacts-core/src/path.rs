//! Vault-relative path normalisation.
//!
//! Vault paths always use `/`, never start or end with a separator, and the
//! vault root is written `/`.

/// Normalise a vault-relative path.
pub fn normalize_path(path: &str) -> String {
    let cleaned: String = path
        .chars()
        .map(|c| match c {
            '\\' => '/',
            '\u{00A0}' | '\u{202F}' => ' ',
            other => other,
        })
        .collect();
    let joined = cleaned
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        "/".to_string()
    } else {
        joined
    }
}

/// Join a folder and a child name, then normalise.
pub fn join_path(folder: &str, name: &str) -> String {
    normalize_path(&format!("{folder}/{name}"))
}

/// Whether a normalised path names the vault root.
pub fn is_root(path: &str) -> bool {
    normalize_path(path) == "/"
}
