//! Status-bar message stack.

/// Who pushed a status entry. Popping only removes entries of the same
/// context, so link hover never removes a download message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusContext {
    LinkHover,
    Download,
    /// One-off messages from the app (errors, about text).
    Notice,
}

/// Stack of status messages. The status bar shows the most recent entry
/// of any context.
#[derive(Debug, Default)]
pub struct StatusStack {
    entries: Vec<(StatusContext, String)>,
}

impl StatusStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, context: StatusContext, text: impl Into<String>) {
        self.entries.push((context, text.into()));
    }

    /// Remove the most recent entry of `context`. Underflow is a no-op.
    pub fn pop(&mut self, context: StatusContext) -> Option<String> {
        let idx = self.entries.iter().rposition(|(c, _)| *c == context)?;
        Some(self.entries.remove(idx).1)
    }

    /// Remove every entry of `context`.
    pub fn clear(&mut self, context: StatusContext) {
        self.entries.retain(|(c, _)| *c != context);
    }

    /// Replace every entry of `context` with `text`.
    pub fn replace(&mut self, context: StatusContext, text: impl Into<String>) {
        self.clear(context);
        self.push(context, text);
    }

    pub fn top(&self) -> Option<&str> {
        self.entries.last().map(|(_, t)| t.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_sequence_underflows_quietly() {
        let mut s = StatusStack::new();
        s.push(StatusContext::LinkHover, "a");
        s.push(StatusContext::LinkHover, "b");
        assert_eq!(s.top(), Some("b"));
        assert_eq!(s.pop(StatusContext::LinkHover).as_deref(), Some("b"));
        assert_eq!(s.top(), Some("a"));
        s.pop(StatusContext::LinkHover);
        assert_eq!(s.pop(StatusContext::LinkHover), None);
        assert!(s.is_empty());
        assert_eq!(s.top(), None);
    }

    #[test]
    fn pop_only_touches_its_context() {
        let mut s = StatusStack::new();
        s.push(StatusContext::Download, "Downloading a.zip");
        s.push(StatusContext::LinkHover, "https://x/");
        s.pop(StatusContext::Download);
        assert_eq!(s.top(), Some("https://x/"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn top_is_most_recent_of_any_context() {
        let mut s = StatusStack::new();
        s.push(StatusContext::LinkHover, "link");
        s.push(StatusContext::Download, "dl");
        assert_eq!(s.top(), Some("dl"));
        s.pop(StatusContext::LinkHover);
        assert_eq!(s.top(), Some("dl"));
    }

    #[test]
    fn replace_drops_older_entries_of_context() {
        let mut s = StatusStack::new();
        s.push(StatusContext::Notice, "one");
        s.push(StatusContext::LinkHover, "link");
        s.replace(StatusContext::Notice, "two");
        assert_eq!(s.len(), 2);
        assert_eq!(s.top(), Some("two"));
    }
}
