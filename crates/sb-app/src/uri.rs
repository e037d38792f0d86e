//! Turning command-line and address-bar input into loadable URIs.

use std::path::{Path, PathBuf};

/// Schemes that are written without `//`.
const OPAQUE_SCHEMES: &[&str] = &["about:", "data:", "file:"];

/// Normalize user input into a URI the engine can load.
///
/// - input with a scheme is kept as-is
/// - absolute, `./`, `../` and `~/` paths, and relative paths that exist,
///   become `file://` URIs
/// - anything else is taken as a bare host and gets `http://`
pub fn normalize_uri(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() || has_scheme(input) {
        return input.to_string();
    }
    match local_path(input) {
        Some(path) => file_uri(&path),
        None => format!("http://{input}"),
    }
}

/// What the first tab loads: the command-line URI if given, else the home
/// page.
pub fn initial_uri(arg: Option<&str>, home_page: &str) -> String {
    match arg.map(normalize_uri) {
        Some(uri) if !uri.is_empty() => uri,
        _ => home_page.to_string(),
    }
}

fn has_scheme(input: &str) -> bool {
    if OPAQUE_SCHEMES
        .iter()
        .any(|s| input.get(..s.len()).is_some_and(|p| p.eq_ignore_ascii_case(s)))
    {
        return true;
    }
    match input.split_once("://") {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Resolve `input` to an absolute path if it names a local file.
fn local_path(input: &str) -> Option<PathBuf> {
    if let Some(rest) = input.strip_prefix("~/") {
        return dirs::home_dir().map(|home| home.join(rest));
    }
    let path = Path::new(input);
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }
    if input.starts_with("./") || input.starts_with("../") || path.exists() {
        let cwd = std::env::current_dir().ok()?;
        let joined = cwd.join(input.strip_prefix("./").unwrap_or(input));
        return Some(std::fs::canonicalize(&joined).unwrap_or(joined));
    }
    None
}

fn file_uri(path: &Path) -> String {
    url::Url::from_file_path(path)
        .map(String::from)
        .unwrap_or_else(|()| format!("file://{}", path.display()))
}
