//! Drop-Target Resolver
//!
//! Pure hover resolution: given the current drag state and the node under
//! the pointer, decide the next highlight/indicator, or that nothing changes.
//!
//! Rules, first match wins:
//! 1. no gesture                -> nothing
//! 2. column over column        -> highlight the candidate (no sub-position)
//! 3. item over column          -> `inside`, only for the item's own column
//! 4. item over item            -> `before`/`after` by vertical midpoint,
//!                                 only for items of the item's own column
//!
//! Column over item is ignored.

use super::gesture::{DndState, DragKind, DropIndicator, Gesture, IndicatorPosition};
use crate::board::owner_of;
use crate::domain::Column;

/// Vertical extent of a candidate, in the same space as the pointer
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// The node under the pointer during a hover event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverCandidate<'a> {
    pub id: &'a str,
    pub kind: DragKind,
    pub pointer_y: f64,
    pub bounds: Bounds,
}

/// New hover state to store
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverUpdate {
    pub drag_over: String,
    pub indicator: Option<DropIndicator>,
}

/// Compute the next hover state; `None` leaves the current one untouched.
pub fn resolve_hover(state: &DndState, candidate: HoverCandidate<'_>, columns: &[Column]) -> Option<HoverUpdate> {
    let gesture = state.gesture.as_ref()?;

    match (gesture, candidate.kind) {
        (Gesture::Column { .. }, DragKind::Column) => {
            if state.drag_over.as_deref() == Some(candidate.id) {
                return None;
            }
            Some(HoverUpdate {
                drag_over: candidate.id.to_string(),
                indicator: None,
            })
        }
        (Gesture::Column { .. }, DragKind::Item) => None,
        (Gesture::Item { source_column_id, .. }, DragKind::Column) => {
            if candidate.id != source_column_id.as_str() || state.drag_over.as_deref() == Some(candidate.id) {
                return None;
            }
            Some(HoverUpdate {
                drag_over: candidate.id.to_string(),
                indicator: Some(DropIndicator::new(candidate.id, IndicatorPosition::Inside)),
            })
        }
        (Gesture::Item { source_column_id, .. }, DragKind::Item) => {
            let owner = owner_of(columns, candidate.id)?;
            if owner.id != *source_column_id {
                return None;
            }
            let position = if candidate.pointer_y < candidate.bounds.midpoint() {
                IndicatorPosition::Before
            } else {
                IndicatorPosition::After
            };
            let unchanged = state
                .indicator
                .as_ref()
                .map_or(false, |ind| ind.target_id == candidate.id && ind.position == position);
            if unchanged {
                return None;
            }
            Some(HoverUpdate {
                drag_over: candidate.id.to_string(),
                indicator: Some(DropIndicator::new(candidate.id, position)),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnColor, Item};

    fn columns() -> Vec<Column> {
        let mut x = Column::new("x", "X", ColumnColor::Blue);
        x.items = vec![Item::leaf("a", "A", "s"), Item::leaf("c", "C", "s")];
        let mut y = Column::new("y", "Y", ColumnColor::Green);
        y.items = vec![Item::leaf("b", "B", "s")];
        vec![x, y]
    }

    fn item_state() -> DndState {
        DndState {
            gesture: Some(Gesture::item("a", "x")),
            ..DndState::default()
        }
    }

    fn over(id: &str, kind: DragKind, pointer_y: f64) -> HoverCandidate<'_> {
        HoverCandidate { id, kind, pointer_y, bounds: Bounds::new(100.0, 40.0) }
    }

    #[test]
    fn test_no_gesture_is_noop() {
        let cols = columns();
        assert!(resolve_hover(&DndState::default(), over("x", DragKind::Column, 0.0), &cols).is_none());
        assert!(resolve_hover(&DndState::default(), over("a", DragKind::Item, 0.0), &cols).is_none());
    }

    #[test]
    fn test_column_over_column() {
        let cols = columns();
        let mut state = DndState { gesture: Some(Gesture::column("x")), ..DndState::default() };
        let update = resolve_hover(&state, over("y", DragKind::Column, 0.0), &cols).unwrap();
        assert_eq!(update.drag_over, "y");
        assert_eq!(update.indicator, None);

        state.drag_over = Some("y".to_string());
        assert!(resolve_hover(&state, over("y", DragKind::Column, 500.0), &cols).is_none());
    }

    #[test]
    fn test_column_over_item_ignored() {
        let cols = columns();
        let state = DndState { gesture: Some(Gesture::column("x")), ..DndState::default() };
        assert!(resolve_hover(&state, over("b", DragKind::Item, 0.0), &cols).is_none());
    }

    #[test]
    fn test_item_over_own_column_is_inside() {
        let cols = columns();
        let update = resolve_hover(&item_state(), over("x", DragKind::Column, 0.0), &cols).unwrap();
        assert_eq!(update.indicator, Some(DropIndicator::new("x", IndicatorPosition::Inside)));
    }

    #[test]
    fn test_item_over_foreign_column_ignored() {
        let cols = columns();
        assert!(resolve_hover(&item_state(), over("y", DragKind::Column, 0.0), &cols).is_none());
    }

    #[test]
    fn test_item_over_item_midpoint() {
        let cols = columns();
        let above = resolve_hover(&item_state(), over("c", DragKind::Item, 119.0), &cols).unwrap();
        assert_eq!(above.indicator.unwrap().position, IndicatorPosition::Before);
        let at_mid = resolve_hover(&item_state(), over("c", DragKind::Item, 120.0), &cols).unwrap();
        assert_eq!(at_mid.indicator.unwrap().position, IndicatorPosition::After);
    }

    #[test]
    fn test_item_over_item_only_on_change() {
        let cols = columns();
        let mut state = item_state();
        state.drag_over = Some("c".to_string());
        state.indicator = Some(DropIndicator::new("c", IndicatorPosition::Before));
        assert!(resolve_hover(&state, over("c", DragKind::Item, 101.0), &cols).is_none());
        assert!(resolve_hover(&state, over("c", DragKind::Item, 139.0), &cols).is_some());
    }

    #[test]
    fn test_cross_column_item_never_indicates() {
        let cols = columns();
        assert!(resolve_hover(&item_state(), over("b", DragKind::Item, 101.0), &cols).is_none());
        assert!(resolve_hover(&item_state(), over("b", DragKind::Item, 139.0), &cols).is_none());
    }

    #[test]
    fn test_unknown_item_ignored() {
        let cols = columns();
        assert!(resolve_hover(&item_state(), over("ghost", DragKind::Item, 101.0), &cols).is_none());
    }
}
