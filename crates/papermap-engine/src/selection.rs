//! Lock/hover selection state machine.
//!
//! Two states: `Unlocked` and `Locked(id)`. Hover is orthogonal, transient,
//! and only consulted while unlocked; once a record is locked, no sequence
//! of hover/unhover events changes the highlight or the detail panel. Only
//! an explicit click can change or clear the lock.
//!
//! Clicks arrive with the surface's synchronous hit-test result, so a point
//! click and a background click are one unambiguous event rather than two
//! racing handlers.

use serde::{Deserialize, Serialize};

/// The lock state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Unlocked,
    Locked { paper_id: String },
}

/// What the surface and detail panel should do after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEffect {
    /// Nothing changed; the event was ignored.
    None,
    /// Show the record: move the highlight to it and render its details.
    Focus { paper_id: String },
    /// Hide the highlight marker.
    ClearHighlight,
}

/// Selection state plus the transient hover target.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Selection {
    state: SelectionState,
    hovered: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The locked record id, if any.
    pub fn locked_id(&self) -> Option<&str> {
        match &self.state {
            SelectionState::Unlocked => None,
            SelectionState::Locked { paper_id } => Some(paper_id),
        }
    }

    /// The hovered record id; never set while locked.
    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked_id().is_some()
    }

    /// Pointer moved over a point. `hidden` is the record's current filter
    /// state; hovering a hidden record is ignored entirely, as is any hover
    /// while locked.
    pub fn on_hover(&mut self, paper_id: &str, hidden: bool) -> SelectionEffect {
        if self.is_locked() || hidden {
            return SelectionEffect::None;
        }
        self.hovered = Some(paper_id.to_string());
        SelectionEffect::Focus {
            paper_id: paper_id.to_string(),
        }
    }

    /// Pointer left whatever it was hovering.
    pub fn on_unhover(&mut self) -> SelectionEffect {
        if self.is_locked() {
            return SelectionEffect::None;
        }
        self.hovered = None;
        SelectionEffect::ClearHighlight
    }

    /// Click on a point. Clicking a hidden record is a no-op; clicking a
    /// visible one locks onto it, also while already locked elsewhere.
    pub fn on_click(&mut self, paper_id: &str, hidden: bool) -> SelectionEffect {
        if hidden {
            return SelectionEffect::None;
        }
        self.hovered = None;
        self.state = SelectionState::Locked {
            paper_id: paper_id.to_string(),
        };
        SelectionEffect::Focus {
            paper_id: paper_id.to_string(),
        }
    }

    /// Click on empty background: releases a lock, otherwise nothing.
    pub fn on_background_click(&mut self) -> SelectionEffect {
        match self.state {
            SelectionState::Locked { .. } => {
                self.state = SelectionState::Unlocked;
                SelectionEffect::ClearHighlight
            }
            SelectionState::Unlocked => SelectionEffect::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus(id: &str) -> SelectionEffect {
        SelectionEffect::Focus {
            paper_id: id.to_string(),
        }
    }

    #[test]
    fn hover_focuses_while_unlocked() {
        let mut sel = Selection::new();
        assert_eq!(sel.on_hover("a", false), focus("a"));
        assert_eq!(sel.hovered_id(), Some("a"));
        assert_eq!(sel.on_unhover(), SelectionEffect::ClearHighlight);
        assert_eq!(sel.hovered_id(), None);
    }

    #[test]
    fn hover_on_hidden_record_is_ignored() {
        let mut sel = Selection::new();
        assert_eq!(sel.on_hover("a", true), SelectionEffect::None);
        assert_eq!(sel.hovered_id(), None);
    }

    #[test]
    fn click_locks_and_lock_dominates_hover() {
        let mut sel = Selection::new();
        assert_eq!(sel.on_click("a", false), focus("a"));
        assert_eq!(sel.locked_id(), Some("a"));

        // No hover/unhover sequence may move the highlight while locked.
        assert_eq!(sel.on_hover("b", false), SelectionEffect::None);
        assert_eq!(sel.on_unhover(), SelectionEffect::None);
        assert_eq!(sel.locked_id(), Some("a"));
        assert_eq!(sel.hovered_id(), None);
    }

    #[test]
    fn click_on_hidden_record_is_a_no_op() {
        let mut sel = Selection::new();
        assert_eq!(sel.on_click("a", true), SelectionEffect::None);
        assert!(!sel.is_locked());

        sel.on_click("b", false);
        assert_eq!(sel.on_click("c", true), SelectionEffect::None);
        assert_eq!(sel.locked_id(), Some("b"));
    }

    #[test]
    fn clicking_another_point_relocks() {
        let mut sel = Selection::new();
        sel.on_click("a", false);
        assert_eq!(sel.on_click("b", false), focus("b"));
        assert_eq!(sel.locked_id(), Some("b"));
    }

    #[test]
    fn background_click_unlocks() {
        let mut sel = Selection::new();
        sel.on_click("a", false);
        assert_eq!(sel.on_background_click(), SelectionEffect::ClearHighlight);
        assert!(!sel.is_locked());

        // And does nothing when already unlocked.
        assert_eq!(sel.on_background_click(), SelectionEffect::None);
    }
}
