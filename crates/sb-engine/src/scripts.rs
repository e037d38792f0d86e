//! JavaScript snippets for commands that engines expose only through
//! script evaluation.

use sb_common::EditCommand;

use crate::engine::SearchOptions;

fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

pub fn history_back() -> &'static str {
    "history.back();"
}

pub fn history_forward() -> &'static str {
    "history.forward();"
}

/// `window.find(text, caseSensitive, backwards, wrapAround)`.
pub fn find(query: &str, options: SearchOptions) -> String {
    format!(
        "window.find({}, {}, {}, {});",
        js_string(query),
        options.case_sensitive,
        !options.forward,
        options.wrap
    )
}

pub fn edit(command: EditCommand) -> String {
    format!("document.execCommand({});", js_string(command.exec_command()))
}

/// Text-only zoom: scales the root font size and leaves images alone.
pub fn text_zoom(level: f64) -> String {
    format!(
        "document.documentElement.style.fontSize = '{}%';",
        (level * 100.0).round()
    )
}

/// Toggle smooth scrolling through a dedicated style element.
pub fn smooth_scrolling(enabled: bool) -> String {
    let behavior = if enabled { "smooth" } else { "auto" };
    format!(
        r#"(function() {{
    var id = 'sb-scroll-behavior';
    var el = document.getElementById(id);
    if (!el) {{
        el = document.createElement('style');
        el.id = id;
        (document.head || document.documentElement).appendChild(el);
    }}
    el.textContent = 'html, body {{ scroll-behavior: {behavior} !important; }}';
}})();"#
    )
}

/// Initialization script that applies smooth scrolling once the document
/// exists.
pub fn smooth_scrolling_on_load(enabled: bool) -> String {
    format!(
        "document.addEventListener('DOMContentLoaded', function() {{ {} }});",
        smooth_scrolling(enabled)
    )
}
