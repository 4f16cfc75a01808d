//! Board View Component
//!
//! Column grid with drag-and-drop reordering of columns and of cards
//! inside their column.

use leptos::prelude::*;
use log::debug;

use board_core::{DragKind, DropOutcome};
use leptos_dragdrop::drop_into;

use crate::components::ColumnCard;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BoardView() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    // Drops land on the live board of the open page
    let on_drop = Callback::new(move |(target_id, kind): (String, DragKind)| {
        let gate = ctx.gate();
        let binding = store.book();
        let mut book = binding.write();
        let Some(page) = book.current_mut() else {
            return;
        };
        match drop_into(&ctx.dnd, &target_id, kind, &mut page.columns, &gate) {
            DropOutcome::Committed(plan) => debug!("[DND] Applied {:?}", plan),
            DropOutcome::Aborted(reason) => debug!("[DND] Drop on {} ignored: {:?}", target_id, reason),
        }
    });

    let column_ids = move || ctx.board.with(|b| b.as_slice().iter().map(|c| c.id.clone()).collect::<Vec<_>>());

    view! {
        <div class="board-grid">
            <For
                each=column_ids
                key=|id| id.clone()
                children=move |id| view! { <ColumnCard column_id=id on_drop=on_drop /> }
            />
            <Show when=move || ctx.board.with(|b| b.is_empty())>
                <p class="board-empty">"Sin grupos"</p>
            </Show>
        </div>
    }
}
