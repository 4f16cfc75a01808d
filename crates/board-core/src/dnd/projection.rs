//! Drag View
//!
//! Read-only questions the board asks while rendering, answered from a
//! [`DndState`] snapshot. Nothing here can change drag state.

use super::gesture::{DndState, DragKind, IndicatorPosition};

#[derive(Clone, Copy, Debug)]
pub struct DragView<'a> {
    state: &'a DndState,
}

impl<'a> DragView<'a> {
    pub fn new(state: &'a DndState) -> Self {
        Self { state }
    }

    fn is_active(&self, kind: DragKind, id: &str) -> bool {
        self.state.kind() == Some(kind) && self.state.active_id() == Some(id)
    }

    /// Column is the one being carried
    pub fn is_column_dragging(&self, column_id: &str) -> bool {
        self.is_active(DragKind::Column, column_id)
    }

    /// Column is highlighted as the landing slot of a column drag
    pub fn is_column_drop_target(&self, column_id: &str) -> bool {
        self.state.kind() == Some(DragKind::Column)
            && self.state.drag_over.as_deref() == Some(column_id)
            && !self.is_column_dragging(column_id)
    }

    /// Card is being appended into this column's body
    pub fn is_item_dropping_inside(&self, column_id: &str) -> bool {
        self.state.kind() == Some(DragKind::Item)
            && self
                .state
                .indicator
                .as_ref()
                .map_or(false, |ind| ind.target_id == column_id && ind.position == IndicatorPosition::Inside)
    }

    pub fn is_item_dragging(&self, item_id: &str) -> bool {
        self.is_active(DragKind::Item, item_id)
    }

    /// Which edge of the card gets the insertion line, if any
    pub fn insertion_line(&self, item_id: &str) -> Option<IndicatorPosition> {
        if self.state.kind() != Some(DragKind::Item) || self.is_item_dragging(item_id) {
            return None;
        }
        self.state
            .indicator
            .as_ref()
            .filter(|ind| ind.target_id == item_id && ind.position != IndicatorPosition::Inside)
            .map(|ind| ind.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnd::gesture::{DropIndicator, Gesture};

    #[test]
    fn test_idle_view_is_quiet() {
        let state = DndState::default();
        let view = DragView::new(&state);
        assert!(!view.is_column_dragging("x"));
        assert!(!view.is_column_drop_target("x"));
        assert!(!view.is_item_dropping_inside("x"));
        assert_eq!(view.insertion_line("a"), None);
    }

    #[test]
    fn test_column_drag_view() {
        let state = DndState {
            gesture: Some(Gesture::column("x")),
            drag_over: Some("y".to_string()),
            indicator: None,
        };
        let view = DragView::new(&state);
        assert!(view.is_column_dragging("x"));
        assert!(!view.is_column_dragging("y"));
        assert!(view.is_column_drop_target("y"));
        assert!(!view.is_item_dragging("x"));
    }

    #[test]
    fn test_item_drag_view() {
        let state = DndState {
            gesture: Some(Gesture::item("a", "x")),
            drag_over: Some("c".to_string()),
            indicator: Some(DropIndicator::new("c", IndicatorPosition::After)),
        };
        let view = DragView::new(&state);
        assert!(view.is_item_dragging("a"));
        assert_eq!(view.insertion_line("c"), Some(IndicatorPosition::After));
        assert_eq!(view.insertion_line("b"), None);
        assert!(!view.is_item_dropping_inside("x"));
        // an item drag never highlights columns as column targets
        assert!(!view.is_column_drop_target("c"));

        let inside = DndState {
            gesture: Some(Gesture::item("a", "x")),
            drag_over: Some("x".to_string()),
            indicator: Some(DropIndicator::new("x", IndicatorPosition::Inside)),
        };
        let view = DragView::new(&inside);
        assert!(view.is_item_dropping_inside("x"));
        assert_eq!(view.insertion_line("x"), None);
    }
}
