use crate::models::country::RawCountryRecord;

/// One visited country screen. `state` holds the record once it has been
/// loaded, so reopening the entry skips the primary fetch.
#[derive(Debug, Clone)]
pub struct NavigationEntry {
    pub country: String,
    pub state: Option<RawCountryRecord>,
}

impl NavigationEntry {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            state: None,
        }
    }
}

/// Explicit history of visited country screens.
#[derive(Debug, Default)]
pub struct NavigationStack {
    entries: Vec<NavigationEntry>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: NavigationEntry) {
        self.entries.push(entry);
    }

    /// Leaves the current screen and returns the one below it. The root
    /// entry is never popped, so going back from it returns `None`.
    pub fn back(&mut self) -> Option<&NavigationEntry> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        self.entries.last()
    }

    pub fn current(&self) -> Option<&NavigationEntry> {
        self.entries.last()
    }

    /// Keeps the record loaded for the current screen so returning to it
    /// later skips the primary fetch.
    pub fn remember_state(&mut self, state: RawCountryRecord) {
        if let Some(entry) = self.entries.last_mut() {
            entry.state = Some(state);
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
