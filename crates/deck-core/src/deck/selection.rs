//! Transient Selection State
//!
//! Which modal is open, the form draft, the pending delete mark and the
//! drag state. None of this is persisted.

use crate::domain::{Card, CardDraft, CardId};

/// Open dialog
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Modal {
    #[default]
    Closed,
    /// New-card form
    Creating { draft: CardDraft },
    /// Detail view of one card
    Viewing { card_id: CardId },
    /// Edit form for an existing card
    Editing { card_id: CardId, draft: CardDraft },
    About,
}

impl Modal {
    pub fn is_closed(&self) -> bool {
        matches!(self, Modal::Closed)
    }

    pub fn draft(&self) -> Option<&CardDraft> {
        match self {
            Modal::Creating { draft } | Modal::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn viewing(&self) -> Option<CardId> {
        match self {
            Modal::Viewing { card_id } => Some(*card_id),
            _ => None,
        }
    }
}

/// Screen point the detail modal grows from
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragState {
    pub dragged: Option<CardId>,
    pub over: Option<CardId>,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    modal: Modal,
    anchor: Option<Anchor>,
    pending_delete: Option<CardId>,
    drag: DragState,
}

impl Selection {
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    pub fn pending_delete(&self) -> Option<CardId> {
        self.pending_delete
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn open_create(&mut self) {
        self.modal = Modal::Creating {
            draft: CardDraft::default(),
        };
    }

    /// Open the detail view. Ignored while a drag is in progress, since the
    /// click that ends a drag is not a request to view.
    pub fn open_view(&mut self, card_id: CardId, anchor: Option<Anchor>) -> bool {
        if self.drag.is_active() {
            return false;
        }
        self.modal = Modal::Viewing { card_id };
        self.anchor = anchor;
        true
    }

    /// Replace the detail view with the edit form for the same card
    pub fn open_edit(&mut self, card: &Card) {
        self.modal = Modal::Editing {
            card_id: card.id,
            draft: CardDraft::from_card(card),
        };
        self.pending_delete = None;
    }

    pub fn open_about(&mut self) {
        self.modal = Modal::About;
    }

    /// Close whatever is open, dropping unsaved drafts and the delete mark
    pub fn close(&mut self) {
        self.modal = Modal::Closed;
        self.anchor = None;
        self.pending_delete = None;
    }

    pub fn draft_mut(&mut self) -> Option<&mut CardDraft> {
        match &mut self.modal {
            Modal::Creating { draft } | Modal::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub(crate) fn mark_delete(&mut self, card_id: CardId) {
        self.pending_delete = Some(card_id);
    }

    pub(crate) fn clear_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn begin_drag(&mut self, card_id: CardId) {
        self.drag = DragState {
            dragged: Some(card_id),
            over: None,
        };
    }

    pub fn drag_enter(&mut self, card_id: CardId) {
        if self.drag.is_active() {
            self.drag.over = Some(card_id);
        }
    }

    pub fn drag_leave(&mut self) {
        self.drag.over = None;
    }

    /// Clear the drag state, returning what was being dragged
    pub fn end_drag(&mut self) -> Option<CardId> {
        std::mem::take(&mut self.drag).dragged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardColor;
    use chrono::{TimeZone, Utc};

    fn card(id: CardId) -> Card {
        Card::new(id, "Lucky", "reroll", "three luck points", CardColor::Green, Utc.timestamp_millis_opt(0).unwrap())
    }

    #[test]
    fn test_create_flow() {
        let mut s = Selection::default();
        s.open_create();
        assert_eq!(s.modal().draft(), Some(&CardDraft::default()));
        s.draft_mut().unwrap().title = "x".into();
        s.close();
        assert!(s.modal().is_closed());
        assert!(s.draft_mut().is_none());
    }

    #[test]
    fn test_view_then_edit_clears_delete_mark() {
        let mut s = Selection::default();
        assert!(s.open_view(3, Some(Anchor { x: 10.0, y: 20.0 })));
        s.mark_delete(3);
        s.open_edit(&card(3));
        assert_eq!(s.pending_delete(), None);
        match s.modal() {
            Modal::Editing { card_id, draft } => {
                assert_eq!(*card_id, 3);
                assert_eq!(draft.title, "Lucky");
                assert_eq!(draft.color, CardColor::Green);
            }
            other => panic!("unexpected modal {:?}", other),
        }
    }

    #[test]
    fn test_close_discards_everything() {
        let mut s = Selection::default();
        s.open_view(3, Some(Anchor::default()));
        s.mark_delete(3);
        s.close();
        assert_eq!(s.pending_delete(), None);
        assert_eq!(s.anchor(), None);
        assert!(s.modal().is_closed());
    }

    #[test]
    fn test_view_ignored_while_dragging() {
        let mut s = Selection::default();
        s.begin_drag(1);
        assert!(!s.open_view(2, None));
        assert!(s.modal().is_closed());
    }

    #[test]
    fn test_drag_state_independent_of_modal() {
        let mut s = Selection::default();
        s.open_about();
        s.begin_drag(1);
        s.drag_enter(2);
        assert_eq!(s.drag(), DragState { dragged: Some(1), over: Some(2) });
        s.drag_leave();
        assert_eq!(s.drag().over, None);
        assert_eq!(s.end_drag(), Some(1));
        assert!(!s.drag().is_active());
        assert_eq!(s.modal(), &Modal::About);
    }

    #[test]
    fn test_drag_enter_without_drag() {
        let mut s = Selection::default();
        s.drag_enter(2);
        assert_eq!(s.drag(), DragState::default());
    }
}
