//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop bindings for the board reorder engine.
//! The handlers here only translate DOM events (grip detection, pointer
//! geometry, event cancellation); every decision is made by
//! [`DndController`].

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;

use board_core::dnd::{AbortReason, DragView};
use board_core::{AccessGate, BoardStore, Bounds, DndController, DragKind, DragStart, DropOutcome, Gesture, PointerOrigin};

/// Grip sub-region a drag has to start from
pub const HANDLE_SELECTOR: &str = ".drag-handle";
/// Controls that must never start a drag
pub const INTERACTIVE_SELECTOR: &str = "button, input, textarea, select";
/// Element used as the drag ghost, when present around the grip
pub const DRAG_ROOT_SELECTOR: &str = "[data-drag-root]";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub controller_read: ReadSignal<DndController>,
    pub controller_write: WriteSignal<DndController>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (controller_read, controller_write) = signal(DndController::new());
    DndSignals {
        controller_read,
        controller_write,
    }
}

/// Read the current drag state through a [`DragView`] (tracked)
pub fn with_view<R>(dnd: &DndSignals, f: impl FnOnce(DragView<'_>) -> R) -> R {
    dnd.controller_read.with(|ctl| f(DragView::new(ctl.state())))
}

/// Reset the gesture; a no-op when already idle
pub fn end_drag(dnd: &DndSignals) {
    if !dnd.controller_read.with_untracked(|ctl| ctl.state().is_idle()) {
        dnd.controller_write.update(|ctl| ctl.end_drag());
    }
}

fn closest(target: Option<web_sys::EventTarget>, selector: &str) -> Option<web_sys::Element> {
    let el = target?.dyn_into::<web_sys::Element>().ok()?;
    el.closest(selector).ok().flatten()
}

/// Classify where the drag started: on the grip, and/or on a control
pub fn pointer_origin(ev: &web_sys::Event) -> PointerOrigin {
    PointerOrigin {
        on_handle: closest(ev.target(), HANDLE_SELECTOR).is_some(),
        on_interactive_control: closest(ev.target(), INTERACTIVE_SELECTOR).is_some(),
    }
}

fn current_bounds(ev: &web_sys::DragEvent) -> Bounds {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            Bounds::new(rect.top(), rect.height())
        })
        .unwrap_or_default()
}

/// Whether a drag start must stay away from enclosing grips.
/// A card's start bubbling to its column would restart the gesture as a
/// column drag.
pub fn isolated_from_parent(kind: DragKind) -> bool {
    match kind {
        DragKind::Item => true,
        DragKind::Column => false,
    }
}

/// Create dragstart handler for a draggable grip.
/// A refused start cancels the native drag.
pub fn make_on_dragstart(
    dnd: DndSignals,
    gesture: Gesture,
    can_edit: Signal<bool>,
) -> impl Fn(web_sys::DragEvent) + Clone + 'static {
    move |ev: web_sys::DragEvent| {
        if isolated_from_parent(gesture.kind()) {
            ev.stop_propagation();
        }
        let origin = pointer_origin(&ev);
        let mut ctl = dnd.controller_read.get_untracked();
        match ctl.begin_drag(gesture.clone(), origin, &can_edit.get_untracked()) {
            DragStart::Started => {
                if let Some(dt) = ev.data_transfer() {
                    dt.set_effect_allowed("move");
                    let _ = dt.set_data("text/plain", gesture.active_id());
                    if let Some(root) = closest(ev.target(), DRAG_ROOT_SELECTOR) {
                        dt.set_drag_image(&root, 16, 16);
                    }
                }
                dnd.controller_write.set(ctl);
            }
            DragStart::Suppressed(reason) => {
                debug!("[DND] Native drag cancelled for {}: {:?}", gesture.active_id(), reason);
                ev.prevent_default();
            }
        }
    }
}

/// Create dragover handler for a drop candidate.
/// Always accepts the event so the browser will deliver a drop.
pub fn make_on_dragover(
    dnd: DndSignals,
    candidate_id: String,
    kind: DragKind,
    board: Signal<BoardStore>,
) -> impl Fn(web_sys::DragEvent) + Clone + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if dnd.controller_read.with_untracked(|ctl| ctl.state().is_idle()) {
            return;
        }
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        let bounds = current_bounds(&ev);
        let pointer_y = f64::from(ev.client_y());
        let mut ctl = dnd.controller_read.get_untracked();
        let changed = board.with_untracked(|b| ctl.hover(&candidate_id, kind, pointer_y, bounds, b.as_slice()));
        if changed {
            dnd.controller_write.set(ctl);
        }
    }
}

/// Create drop handler. `on_drop` is expected to call [`drop_into`] on the
/// live board; the gesture is reset afterwards whatever it did.
pub fn make_on_drop<F>(dnd: DndSignals, target_id: String, kind: DragKind, on_drop: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(&str, DragKind) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        on_drop(&target_id, kind);
        end_drag(&dnd);
    }
}

/// Create dragend handler; covers cancelled drags and drops outside any target
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        end_drag(&dnd);
    }
}

/// Commit the pending gesture against `board`
pub fn drop_into(
    dnd: &DndSignals,
    target_id: &str,
    kind: DragKind,
    board: &mut BoardStore,
    gate: &impl AccessGate,
) -> DropOutcome {
    let mut ctl = dnd.controller_read.get_untracked();
    let outcome = if ctl.state().is_idle() {
        DropOutcome::Aborted(AbortReason::NoGesture)
    } else {
        ctl.drop_on(target_id, kind, board, gate)
    };
    dnd.controller_write.set(ctl);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_start_does_not_bubble_to_column() {
        assert!(isolated_from_parent(DragKind::Item));
        assert!(!isolated_from_parent(DragKind::Column));
    }

    #[test]
    fn test_bubbled_column_start_would_replace_card_gesture() {
        // the column grip handler runs the same begin_drag; only the stopped
        // propagation keeps the card gesture alive
        let mut ctl = DndController::new();
        let card = Gesture::item("a", "x");
        assert_eq!(ctl.begin_drag(card, PointerOrigin::handle(), &true), DragStart::Started);
        assert_eq!(ctl.state().kind(), Some(DragKind::Item));
        assert_eq!(
            ctl.begin_drag(Gesture::column("x"), PointerOrigin::handle(), &true),
            DragStart::Started
        );
        assert_eq!(ctl.state().kind(), Some(DragKind::Column));
    }
}
