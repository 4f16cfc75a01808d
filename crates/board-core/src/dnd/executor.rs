//! Commit/Reorder Executor
//!
//! Turns a drop into a validated reorder plan and applies it through the
//! board store's two move entry points. Every rejection leaves the store
//! untouched; the controller resets drag state regardless.

use log::{info, warn};

use super::gesture::{DndState, DragKind, Gesture, IndicatorPosition};
use crate::access::AccessGate;
use crate::board::{owner_of, BoardStore};
use crate::domain::{Column, ColumnId};

/// A validated move, in store index coordinates
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReorderPlan {
    Column { from: usize, to: usize },
    /// `to` is an index into the column's items after removal of `from`
    Item { column_id: ColumnId, from: usize, to: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    /// Drop without an active gesture
    NoGesture,
    /// Edit permission missing
    ReadOnly,
    /// Column dropped on itself
    SameTarget,
    /// Dragged node no longer exists
    UnknownSource,
    /// Drop target no longer exists
    UnknownTarget,
    /// Item drop resolved to another column
    CrossColumn,
    /// Column dropped on an item
    KindMismatch,
}

/// Outcome of one drop
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Committed(ReorderPlan),
    Aborted(AbortReason),
}

impl DropOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, DropOutcome::Committed(_))
    }
}

/// Validate a drop against the current columns without mutating anything.
pub fn plan_drop(
    state: &DndState,
    target_id: &str,
    target_kind: DragKind,
    columns: &[Column],
) -> Result<ReorderPlan, AbortReason> {
    let gesture = state.gesture.as_ref().ok_or(AbortReason::NoGesture)?;

    match gesture {
        Gesture::Column { column_id } => {
            if target_kind != DragKind::Column {
                return Err(AbortReason::KindMismatch);
            }
            if column_id == target_id {
                return Err(AbortReason::SameTarget);
            }
            let from = columns
                .iter()
                .position(|c| c.id == *column_id)
                .ok_or(AbortReason::UnknownSource)?;
            let to = columns
                .iter()
                .position(|c| c.id == target_id)
                .ok_or(AbortReason::UnknownTarget)?;
            Ok(ReorderPlan::Column { from, to })
        }
        Gesture::Item { item_id, source_column_id } => {
            let source = columns
                .iter()
                .find(|c| c.id == *source_column_id)
                .ok_or(AbortReason::UnknownSource)?;
            let from = source.position_of(item_id).ok_or(AbortReason::UnknownSource)?;
            // Indices below are in the source column after `from` is taken out.
            let remaining = source.items.len() - 1;

            let (dest_id, to) = match target_kind {
                DragKind::Column => {
                    let dest = columns
                        .iter()
                        .find(|c| c.id == target_id)
                        .ok_or(AbortReason::UnknownTarget)?;
                    let len = if dest.id == source.id { remaining } else { dest.items.len() };
                    (dest.id.as_str(), len)
                }
                DragKind::Item => {
                    if target_id == item_id {
                        // the target vanishes from the working copy with the removal
                        return Err(AbortReason::UnknownTarget);
                    }
                    let dest = owner_of(columns, target_id).ok_or(AbortReason::UnknownTarget)?;
                    let target_index = dest.position_of(target_id).ok_or(AbortReason::UnknownTarget)?;
                    let target_index = if dest.id == source.id && target_index > from {
                        target_index - 1
                    } else {
                        target_index
                    };
                    let after = state
                        .indicator
                        .as_ref()
                        .map_or(false, |ind| ind.position == IndicatorPosition::After);
                    (dest.id.as_str(), target_index + usize::from(after))
                }
            };

            if dest_id != source_column_id.as_str() {
                return Err(AbortReason::CrossColumn);
            }
            Ok(ReorderPlan::Item {
                column_id: source_column_id.clone(),
                from,
                to,
            })
        }
    }
}

/// Validate and apply a drop. Gated: without edit permission nothing moves.
pub fn commit_drop(
    state: &DndState,
    target_id: &str,
    target_kind: DragKind,
    store: &mut BoardStore,
    gate: &impl AccessGate,
) -> DropOutcome {
    if !gate.can_edit() {
        return DropOutcome::Aborted(AbortReason::ReadOnly);
    }
    let plan = match plan_drop(state, target_id, target_kind, store.as_slice()) {
        Ok(plan) => plan,
        Err(reason) => {
            warn!(
                "[DND] Drop aborted: active={:?}, target={}, reason={:?}",
                state.active_id(),
                target_id,
                reason
            );
            return DropOutcome::Aborted(reason);
        }
    };
    let applied = match &plan {
        ReorderPlan::Column { from, to } => store.move_column(*from, *to),
        ReorderPlan::Item { column_id, from, to } => store.move_item_within_column(column_id, *from, *to),
    };
    if !applied {
        return DropOutcome::Aborted(AbortReason::UnknownSource);
    }
    info!("[DND] Reorder committed: {:?}", plan);
    DropOutcome::Committed(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnd::gesture::DropIndicator;
    use crate::domain::{ColumnColor, Item};

    fn store() -> BoardStore {
        let mut x = Column::new("x", "X", ColumnColor::Blue);
        x.items = ["a", "b", "c"].iter().map(|id| Item::leaf(*id, id.to_uppercase(), "s")).collect();
        let mut y = Column::new("y", "Y", ColumnColor::Green);
        y.items = vec![Item::leaf("d", "D", "s")];
        let z = Column::new("z", "Z", ColumnColor::Orange);
        BoardStore::new(vec![x, y, z])
    }

    fn dragging_item(item: &str, from_col: &str, indicator: Option<(&str, IndicatorPosition)>) -> DndState {
        DndState {
            gesture: Some(Gesture::item(item, from_col)),
            drag_over: indicator.map(|(t, _)| t.to_string()),
            indicator: indicator.map(|(t, p)| DropIndicator::new(t, p)),
        }
    }

    #[test]
    fn test_plan_column() {
        let store = store();
        let state = DndState { gesture: Some(Gesture::column("x")), ..DndState::default() };
        assert_eq!(
            plan_drop(&state, "z", DragKind::Column, store.as_slice()),
            Ok(ReorderPlan::Column { from: 0, to: 2 })
        );
        assert_eq!(plan_drop(&state, "x", DragKind::Column, store.as_slice()), Err(AbortReason::SameTarget));
        assert_eq!(plan_drop(&state, "a", DragKind::Item, store.as_slice()), Err(AbortReason::KindMismatch));
        assert_eq!(plan_drop(&state, "gone", DragKind::Column, store.as_slice()), Err(AbortReason::UnknownTarget));
    }

    #[test]
    fn test_plan_item_indices_after_removal() {
        let store = store();
        let before_c = dragging_item("a", "x", Some(("c", IndicatorPosition::Before)));
        assert_eq!(
            plan_drop(&before_c, "c", DragKind::Item, store.as_slice()),
            Ok(ReorderPlan::Item { column_id: "x".to_string(), from: 0, to: 1 })
        );
        let after_c = dragging_item("a", "x", Some(("c", IndicatorPosition::After)));
        assert_eq!(
            plan_drop(&after_c, "c", DragKind::Item, store.as_slice()),
            Ok(ReorderPlan::Item { column_id: "x".to_string(), from: 0, to: 2 })
        );
        let upward = dragging_item("c", "x", Some(("a", IndicatorPosition::Before)));
        assert_eq!(
            plan_drop(&upward, "a", DragKind::Item, store.as_slice()),
            Ok(ReorderPlan::Item { column_id: "x".to_string(), from: 2, to: 0 })
        );
    }

    #[test]
    fn test_plan_item_into_column_body_appends() {
        let store = store();
        let state = dragging_item("a", "x", Some(("x", IndicatorPosition::Inside)));
        assert_eq!(
            plan_drop(&state, "x", DragKind::Column, store.as_slice()),
            Ok(ReorderPlan::Item { column_id: "x".to_string(), from: 0, to: 2 })
        );
    }

    #[test]
    fn test_plan_item_rejections() {
        let store = store();
        let state = dragging_item("a", "x", None);
        assert_eq!(plan_drop(&state, "d", DragKind::Item, store.as_slice()), Err(AbortReason::CrossColumn));
        assert_eq!(plan_drop(&state, "z", DragKind::Column, store.as_slice()), Err(AbortReason::CrossColumn));
        assert_eq!(plan_drop(&state, "a", DragKind::Item, store.as_slice()), Err(AbortReason::UnknownTarget));
        assert_eq!(plan_drop(&state, "ghost", DragKind::Item, store.as_slice()), Err(AbortReason::UnknownTarget));

        let stale = dragging_item("ghost", "x", None);
        assert_eq!(plan_drop(&stale, "b", DragKind::Item, store.as_slice()), Err(AbortReason::UnknownSource));
        let stale_col = dragging_item("a", "gone", None);
        assert_eq!(plan_drop(&stale_col, "b", DragKind::Item, store.as_slice()), Err(AbortReason::UnknownSource));
        assert_eq!(plan_drop(&DndState::default(), "b", DragKind::Item, store.as_slice()), Err(AbortReason::NoGesture));
    }

    #[test]
    fn test_commit_read_only() {
        let mut store = store();
        let before = store.columns();
        let state = DndState { gesture: Some(Gesture::column("x")), ..DndState::default() };
        let outcome = commit_drop(&state, "z", DragKind::Column, &mut store, &false);
        assert_eq!(outcome, DropOutcome::Aborted(AbortReason::ReadOnly));
        assert!(store.is_same(&before));
    }

    #[test]
    fn test_commit_rejected_keeps_same_array() {
        let mut store = store();
        let before = store.columns();
        let state = dragging_item("a", "x", Some(("d", IndicatorPosition::Before)));
        let outcome = commit_drop(&state, "d", DragKind::Item, &mut store, &true);
        assert_eq!(outcome, DropOutcome::Aborted(AbortReason::CrossColumn));
        assert!(store.is_same(&before));
    }
}
