// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowState {
    #[default]
    Viewing,
    Editing,
    ConfirmingDelete,
}

/// Per-row UI state, keyed by record identifier. Rows without an entry are
/// `Viewing`. Invariant: at most one row is `Editing` at any time; starting
/// an edit elsewhere reverts the previous editor to `Viewing` (its in-place
/// edits stay applied). Any number of rows may be `ConfirmingDelete`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowStates {
    states: BTreeMap<String, RowState>,
}

impl RowStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state_of(&self, id: &str) -> RowState {
        self.states.get(id).copied().unwrap_or_default()
    }

    pub fn editing_row(&self) -> Option<&str> {
        self.states
            .iter()
            .find(|(_, state)| **state == RowState::Editing)
            .map(|(id, _)| id.as_str())
    }

    pub fn start_edit(&mut self, id: &str) {
        self.states
            .retain(|_, state| *state != RowState::Editing);
        self.states.insert(id.to_owned(), RowState::Editing);
    }

    pub fn save_edit(&mut self, id: &str) {
        if self.state_of(id) == RowState::Editing {
            self.states.remove(id);
        }
    }

    pub fn request_delete(&mut self, id: &str) {
        self.states.insert(id.to_owned(), RowState::ConfirmingDelete);
    }

    pub fn cancel_delete(&mut self, id: &str) {
        if self.state_of(id) == RowState::ConfirmingDelete {
            self.states.remove(id);
        }
    }

    /// Drop any state for the row; used when the record itself goes away.
    pub fn clear(&mut self, id: &str) {
        self.states.remove(id);
    }
}
