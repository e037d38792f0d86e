//! Download destination naming.

use std::path::{Path, PathBuf};

const FALLBACK_NAME: &str = "download";

/// File name for a download of `uri`: the last non-empty path segment,
/// or `"download"` when the URI has none.
pub fn file_name_from_uri(uri: &str) -> String {
    url::Url::parse(uri)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|segments| segments.filter(|s| !s.is_empty()).last().map(String::from))
        })
        .map(|name| {
            urlencoding::decode(&name)
                .map(|d| d.into_owned())
                .unwrap_or(name)
        })
        .filter(|name| !name.is_empty() && name != "." && name != "..")
        .map(|name| name.replace(['/', '\\'], "_"))
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/// Destination path inside `dir` for a download of `uri`. An existing file
/// is never overwritten: `name (1).ext`, `name (2).ext`, ... are tried.
pub fn destination_for(dir: &Path, uri: &str) -> PathBuf {
    let name = file_name_from_uri(uri);
    let candidate = dir.join(&name);
    if !candidate.exists() {
        return candidate;
    }

    let path = Path::new(&name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.clone());
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());

    (1..)
        .map(|n| match &ext {
            Some(ext) => dir.join(format!("{stem} ({n}).{ext}")),
            None => dir.join(format!("{stem} ({n})")),
        })
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_last_path_segment() {
        assert_eq!(
            file_name_from_uri("https://example.com/files/report.pdf?x=1"),
            "report.pdf"
        );
        assert_eq!(file_name_from_uri("https://example.com/dir/"), "dir");
    }

    #[test]
    fn percent_escapes_are_decoded() {
        assert_eq!(
            file_name_from_uri("https://example.com/my%20file.txt"),
            "my file.txt"
        );
    }

    #[test]
    fn fallback_name_without_path() {
        assert_eq!(file_name_from_uri("https://example.com/"), "download");
        assert_eq!(file_name_from_uri("not a uri"), "download");
    }

    #[test]
    fn existing_files_get_numbered() {
        let dir = tempfile::tempdir().unwrap();
        let first = destination_for(dir.path(), "https://example.com/a.zip");
        assert_eq!(first, dir.path().join("a.zip"));

        std::fs::write(&first, b"x").unwrap();
        let second = destination_for(dir.path(), "https://example.com/a.zip");
        assert_eq!(second, dir.path().join("a (1).zip"));
    }
}
