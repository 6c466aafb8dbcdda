//! Station selection resolution.
//!
//! The explorer has two ways to pick stations: selecting markers on the map
//! and picking entries in the multi-select dropdown. Exactly one source is
//! authoritative at a time: the most recent map selection wins while it is
//! non-empty, otherwise the dropdown's current value applies.
//!
//! Nothing is recomputed while the user is still picking; only the show
//! action resolves the pending inputs into a bounded, deduplicated station
//! list and writes that list back into the dropdown so the UI reflects the
//! effective selection.

use itertools::Itertools;

/// Which input currently drives the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// No input received yet.
    Idle,
    /// A non-empty map selection is pending and will win at resolve time.
    MapSelectionPending,
    /// The dropdown value is the pending selection.
    DropdownOnly,
    /// A show action produced the current resolved selection.
    Resolved,
}

/// Merges map and dropdown input into one bounded station list.
#[derive(Debug, Clone)]
pub struct SelectionResolver {
    selected_max: usize,
    map_selection: Option<Vec<i64>>,
    dropdown: Vec<i64>,
    phase: SelectionPhase,
}

impl SelectionResolver {
    pub fn new(selected_max: usize) -> Self {
        SelectionResolver {
            selected_max,
            map_selection: None,
            dropdown: Vec::new(),
            phase: SelectionPhase::Idle,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// The dropdown's current value (after a show action, the resolved
    /// selection that was written back).
    pub fn dropdown_value(&self) -> &[i64] {
        &self.dropdown
    }

    /// A map selection event. An empty point list clears the map selection
    /// and hands authority back to the dropdown.
    pub fn on_map_select(&mut self, station_ids: Vec<i64>) {
        if station_ids.is_empty() {
            self.map_selection = None;
            self.phase = SelectionPhase::DropdownOnly;
        } else {
            self.map_selection = Some(station_ids);
            self.phase = SelectionPhase::MapSelectionPending;
        }
    }

    /// A dropdown change event. Does not displace an active map selection.
    pub fn on_dropdown_change(&mut self, station_ids: Vec<i64>) {
        self.dropdown = station_ids;
        if self.map_selection.is_none() {
            self.phase = SelectionPhase::DropdownOnly;
        }
    }

    /// The show action: resolve the authoritative source into a unique,
    /// ordered list truncated to the configured maximum, and write it back
    /// into the dropdown value.
    ///
    /// This is the only place truncation happens.
    pub fn on_show_clicked(&mut self) -> Vec<i64> {
        let source = match &self.map_selection {
            Some(ids) => ids.clone(),
            None => self.dropdown.clone(),
        };
        let resolved: Vec<i64> = source
            .into_iter()
            .unique()
            .take(self.selected_max)
            .collect();
        self.dropdown = resolved.clone();
        self.phase = SelectionPhase::Resolved;
        resolved
    }
}
