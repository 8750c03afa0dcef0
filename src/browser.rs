// Browser session: load state plus criteria, recomputed into a view on demand

use crate::engine::{self, FilterCriteria};
use crate::feed::{LoadState, VersionEntry};

/// What the presentation layer should show right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    Loading,
    Failed(&'a str),
    /// Nothing to show; `total` is the size of the loaded feed
    Empty {
        total: usize,
        criteria: &'a FilterCriteria,
    },
    Results {
        total: usize,
        entries: Vec<VersionEntry>,
        criteria: &'a FilterCriteria,
    },
}

pub struct Browser {
    state: LoadState,
    criteria: FilterCriteria,
}

impl Browser {
    pub fn new(state: LoadState) -> Self {
        Self::with_criteria(state, FilterCriteria::default())
    }

    pub fn with_criteria(state: LoadState, criteria: FilterCriteria) -> Self {
        Self { state, criteria }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Swap in a complete new set of criteria
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Late results only land while still loading
    pub fn finish_loading(&mut self, state: LoadState) {
        if self.state == LoadState::Loading {
            self.state = state;
        }
    }

    pub fn view(&self) -> View<'_> {
        match &self.state {
            LoadState::Loading => View::Loading,
            LoadState::Failed(message) => View::Failed(message),
            LoadState::Loaded(all) => {
                let entries = engine::derive(all, &self.criteria);
                if entries.is_empty() {
                    View::Empty {
                        total: all.len(),
                        criteria: &self.criteria,
                    }
                } else {
                    View::Results {
                        total: all.len(),
                        entries,
                        criteria: &self.criteria,
                    }
                }
            }
        }
    }
}
