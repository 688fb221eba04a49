//! Which post has its comments panel open.
//!
//! At most one post is expanded. The state travels in the `expanded` query
//! parameter, so every toggle link carries the state it leads to.

/// Expanded-post selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandState {
    expanded: Option<String>,
}

impl ExpandState {
    /// Nothing expanded.
    #[must_use]
    pub const fn collapsed() -> Self {
        Self { expanded: None }
    }

    /// Restore from a query value. Only an absent value means nothing is
    /// expanded; an empty value selects a post whose id is empty.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        Self {
            expanded: value.map(str::to_string),
        }
    }

    #[must_use]
    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// Toggle `id`: collapse it if it is open, otherwise open it and close
    /// whatever was open before.
    pub fn toggle(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    /// The state a toggle on `id` would produce.
    #[must_use]
    pub fn toggled(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }
}
