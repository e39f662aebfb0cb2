//! Stage autocomplete state.
//!
//! DESIGN
//! ======
//! Loading is tracked separately from data presence: the input stays mounted
//! and only switches to a skeleton style while the first fetch is in flight.
//! A refetch with data already present keeps showing the old list.

#[cfg(test)]
#[path = "stage_search_test.rs"]
mod stage_search_test;

use copilot::{Level, StageIndex};

/// Level list, fetch status, and the current query.
#[derive(Clone, Debug, Default)]
pub struct StageSearchState {
    pub index: StageIndex,
    /// A fetch is in flight.
    pub validating: bool,
    /// Last fetch error, if any.
    pub error: Option<String>,
    pub query: String,
}

impl StageSearchState {
    /// Mark a fetch as started.
    pub fn begin_fetch(&mut self) {
        self.validating = true;
    }

    /// Store the fetched level list.
    pub fn finish_fetch(&mut self, levels: Vec<Level>) {
        self.index = StageIndex::new(levels);
        self.validating = false;
        self.error = None;
    }

    /// Record a failed fetch, keeping any previously loaded levels.
    pub fn fail_fetch(&mut self, error: impl Into<String>) {
        self.validating = false;
        self.error = Some(error.into());
    }

    /// Show the skeleton only when there is nothing to show yet.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.validating && self.index.is_empty()
    }

    /// Suggestions for the current query.
    #[must_use]
    pub fn suggestions(&self) -> Vec<Level> {
        self.index.search(&self.query).into_iter().cloned().collect()
    }

    /// Label for the selected stage id, falling back to the raw id for stages
    /// missing from the list.
    #[must_use]
    pub fn label_for(&self, level_id: &str) -> String {
        self.index
            .find_by_id(level_id)
            .map_or_else(|| level_id.to_owned(), Level::display_label)
    }
}
