//! URL helpers.
//!
//! Relative paths are joined by plain concatenation onto the directory prefix of
//! the document they came from; no dot-segment normalization is attempted.

/// Everything up to and including the final `/`.
///
/// `http://site.example/dir/file.json` -> `http://site.example/dir/`
pub fn directory_prefix(url: &str) -> &str {
    match url.rfind('/') {
        Some(pos) => &url[..=pos],
        None => "",
    }
}

/// Whether `path` starts with a URL scheme (`http://`, `https://`, ...).
pub fn is_absolute(path: &str) -> bool {
    let Some((scheme, _)) = path.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Resolve `path` against the directory of `base_url` unless it is already absolute.
pub fn resolve_against(base_url: &str, path: &str) -> String {
    if is_absolute(path) {
        path.to_string()
    } else {
        format!("{}{}", directory_prefix(base_url), path)
    }
}
