const NEW_TAB: &str = "New Tab";
const ELLIPSIS: char = '…';

/// Tab label: the title, else the URI, else "New Tab", cut to `max_chars`
/// characters (the last one an ellipsis when cut).
pub fn tab_label(title: &str, uri: &str, max_chars: usize) -> String {
    let text = [title.trim(), uri.trim()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or(NEW_TAB);

    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_title() {
        assert_eq!(tab_label("Example", "https://example.com/", 24), "Example");
    }

    #[test]
    fn falls_back_to_uri_then_new_tab() {
        assert_eq!(tab_label("", "https://a.b/", 24), "https://a.b/");
        assert_eq!(tab_label("  ", "", 24), "New Tab");
    }

    #[test]
    fn truncates_with_ellipsis() {
        let label = tab_label("A very long page title indeed", "", 10);
        assert_eq!(label, "A very lo…");
        assert_eq!(label.chars().count(), 10);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(tab_label("ééééé", "", 5), "ééééé");
        assert_eq!(tab_label("éééééé", "", 5), "éééé…");
    }
}
