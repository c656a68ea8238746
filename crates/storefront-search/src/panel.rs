//! Open/results state of a search container.

use serde::Serialize;

use crate::listener::{ClickEvent, ContainerId};

/// Visibility flags of the search box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PanelState {
    /// The input is expanded (toggled by clicking it).
    pub open: bool,
    /// The results list is visible.
    pub showing_results: bool,
}

impl PanelState {
    /// Clicking the input toggles the expanded state.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// React to a body click. Clicks inside `container` reveal the results
    /// list; clicks elsewhere collapse everything.
    pub fn on_body_click(&mut self, event: &ClickEvent, container: ContainerId) {
        if event.is_inside(container) {
            self.showing_results = true;
            return;
        }
        self.open = false;
        self.showing_results = false;
    }

    /// Hide the results list, e.g. after navigating to another page.
    pub fn collapse_results(&mut self) {
        self.showing_results = false;
    }
}
