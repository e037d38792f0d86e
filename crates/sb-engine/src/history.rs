//! Back/forward history for engines that cannot be queried for it.
//!
//! The backend records every committed URI. A back or forward command
//! marks a pending traversal first, so the commit it causes moves the
//! cursor instead of truncating forward entries.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Traversal {
    Back,
    Forward,
}

#[derive(Debug, Default)]
pub struct NavigationHistory {
    entries: Vec<String>,
    /// Index of the current entry. `None` before the first commit.
    current: Option<usize>,
    pending: Option<Traversal>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.map(|i| self.entries[i].as_str())
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.current, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.current, Some(i) if i + 1 < self.entries.len())
    }

    /// Mark a back traversal as in flight. Returns `false` when there is
    /// nothing to go back to.
    pub fn begin_back(&mut self) -> bool {
        if self.can_go_back() {
            self.pending = Some(Traversal::Back);
            true
        } else {
            false
        }
    }

    /// Mark a forward traversal as in flight. Returns `false` when there is
    /// nothing to go forward to.
    pub fn begin_forward(&mut self) -> bool {
        if self.can_go_forward() {
            self.pending = Some(Traversal::Forward);
            true
        } else {
            false
        }
    }

    /// Record a committed navigation.
    pub fn commit(&mut self, uri: &str) {
        let pending = self.pending.take();

        if let Some(i) = self.current {
            let target = match pending {
                Some(Traversal::Back) => i.checked_sub(1),
                Some(Traversal::Forward) => Some(i + 1).filter(|&n| n < self.entries.len()),
                None => None,
            };
            if let Some(t) = target {
                if self.entries[t] == uri {
                    self.current = Some(t);
                    return;
                }
            }
            // Reload or same-document commit.
            if self.entries[i] == uri {
                return;
            }
            self.entries.truncate(i + 1);
        }

        self.entries.push(uri.to_string());
        self.current = Some(self.entries.len() - 1);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
