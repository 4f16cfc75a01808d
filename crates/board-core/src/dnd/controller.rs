//! Drag-and-Drop Controller
//!
//! Owns the drag state for one board and is the only thing allowed to
//! change it. Presentation code reads [`DndController::state`] snapshots.

use log::debug;

use super::executor::{commit_drop, AbortReason, DropOutcome};
use super::gesture::{DndState, DragKind, DragStart, Gesture, PointerOrigin, SuppressReason};
use super::resolver::{resolve_hover, Bounds, HoverCandidate};
use crate::access::AccessGate;
use crate::board::BoardStore;
use crate::domain::Column;

/// Where the controller is in the gesture lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// No gesture
    Idle,
    /// Gesture started, nothing resolved yet
    Dragging,
    /// Gesture has a resolved drop target
    Targeting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DndController {
    state: DndState,
}

impl DndController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DndState {
        &self.state
    }

    pub fn phase(&self) -> DragPhase {
        match (&self.state.gesture, &self.state.drag_over) {
            (None, _) => DragPhase::Idle,
            (Some(_), None) => DragPhase::Dragging,
            (Some(_), Some(_)) => DragPhase::Targeting,
        }
    }

    /// Any phase -> Dragging, when the pointer went down on a grip.
    /// A gesture still held here never saw its dragend; it is dropped.
    pub fn begin_drag(&mut self, gesture: Gesture, origin: PointerOrigin, gate: &impl AccessGate) -> DragStart {
        if !self.state.is_idle() {
            debug!("[DND] Discarding stale gesture {:?}", self.state.active_id());
            self.state.clear();
        }
        let reason = if !gate.can_edit() {
            Some(SuppressReason::ReadOnly)
        } else if origin.on_interactive_control {
            Some(SuppressReason::InteractiveControl)
        } else if !origin.on_handle {
            Some(SuppressReason::OutsideHandle)
        } else {
            None
        };
        if let Some(reason) = reason {
            debug!("[DND] Drag start suppressed for {}: {:?}", gesture.active_id(), reason);
            return DragStart::Suppressed(reason);
        }
        debug!("[DND] Drag start: {:?}", gesture);
        self.state = DndState {
            gesture: Some(gesture),
            drag_over: None,
            indicator: None,
        };
        DragStart::Started
    }

    /// Dragging/Targeting -> Targeting; returns whether the state changed
    pub fn hover(
        &mut self,
        candidate_id: &str,
        candidate_kind: DragKind,
        pointer_y: f64,
        bounds: Bounds,
        columns: &[Column],
    ) -> bool {
        let candidate = HoverCandidate {
            id: candidate_id,
            kind: candidate_kind,
            pointer_y,
            bounds,
        };
        match resolve_hover(&self.state, candidate, columns) {
            Some(update) => {
                self.state.drag_over = Some(update.drag_over);
                self.state.indicator = update.indicator;
                true
            }
            None => false,
        }
    }

    /// Any phase -> Idle, committing the move if it validates
    pub fn drop_on(
        &mut self,
        target_id: &str,
        target_kind: DragKind,
        store: &mut BoardStore,
        gate: &impl AccessGate,
    ) -> DropOutcome {
        let outcome = if self.state.gesture.is_some() {
            commit_drop(&self.state, target_id, target_kind, store, gate)
        } else {
            DropOutcome::Aborted(AbortReason::NoGesture)
        };
        self.end_drag();
        outcome
    }

    /// Any phase -> Idle; drop, cancel and unexpected termination all land here
    pub fn end_drag(&mut self) {
        if !self.state.is_idle() {
            debug!("[DND] Drag end: {:?}", self.state.active_id());
        }
        self.state.clear();
    }
}
