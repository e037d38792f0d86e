/// Product name appended to window titles.
pub const APP_NAME: &str = "sb";

/// Window title for a page title and load progress.
///
/// `"{title} - sb"`, with `" (N%)"` while loading. An untitled page shows
/// just the product name.
pub fn window_title(title: &str, progress: u8) -> String {
    let mut out = if title.is_empty() {
        APP_NAME.to_string()
    } else {
        format!("{title} - {APP_NAME}")
    };
    if progress < 100 {
        out.push_str(&format!(" ({progress}%)"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_page_has_no_percentage() {
        assert_eq!(window_title("Example", 100), "Example - sb");
    }

    #[test]
    fn loading_page_shows_percentage() {
        assert_eq!(window_title("Example", 0), "Example - sb (0%)");
        assert_eq!(window_title("Example", 42), "Example - sb (42%)");
        assert_eq!(window_title("Example", 99), "Example - sb (99%)");
    }

    #[test]
    fn untitled_page() {
        assert_eq!(window_title("", 100), "sb");
        assert_eq!(window_title("", 10), "sb (10%)");
    }
}
