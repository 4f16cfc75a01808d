//! Drag-and-Drop Engine
//!
//! Column and card reordering for one board, independent of any UI toolkit.
//!
//! Transitions, all owned by [`DndController`]:
//!
//! ```text
//! any       --begin_drag(handle, editable)--> Dragging   (stale gesture discarded)
//! Dragging  --hover(valid candidate)--------> Targeting
//! Targeting --hover(other candidate)--------> Targeting
//! any       --drop_on--> Committed | Aborted --> Idle
//! any       --end_drag----------------------> Idle
//! ```

mod controller;
mod executor;
mod gesture;
mod projection;
mod resolver;

pub use controller::{DndController, DragPhase};
pub use executor::{commit_drop, plan_drop, AbortReason, DropOutcome, ReorderPlan};
pub use gesture::{
    DndState, DragKind, DragStart, DropIndicator, Gesture, IndicatorPosition, PointerOrigin, SuppressReason,
};
pub use projection::DragView;
pub use resolver::{resolve_hover, Bounds, HoverCandidate, HoverUpdate};
