//! Status Manager Component
//!
//! Edits the status vocabulary of one column. Changes are drafted locally
//! and applied on save.

use leptos::prelude::*;

use board_core::config::NEW_STATUS_LABEL;
use board_core::domain::unique_id;
use board_core::{StatusCategory, TailwindColor};

use crate::context::AppContext;
use crate::store::{now_ms, store_edit_board, use_app_store};

#[component]
pub fn StatusManager(column_id: String) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let initial = ctx
        .board
        .with_untracked(|b| b.column(&column_id).map(|c| (c.title.clone(), c.status_categories.clone())));
    let (column_title, categories) = initial.unwrap_or_default();
    let draft = RwSignal::new(categories);

    let update = move |id: &str, f: &dyn Fn(&mut StatusCategory)| {
        draft.update(|cats| {
            if let Some(cat) = cats.iter_mut().find(|c| c.id == id) {
                f(cat);
            }
        });
    };

    let add = move |_: web_sys::MouseEvent| {
        draft.update(|cats| {
            let id = unique_id("status", now_ms(), |candidate| cats.iter().any(|c| c.id == candidate));
            cats.push(StatusCategory::new(id, NEW_STATUS_LABEL, TailwindColor::Slate));
        });
    };

    let save = {
        let column_id = column_id.clone();
        move |_: web_sys::MouseEvent| {
            let categories = draft.get_untracked();
            store_edit_board(&store, &ctx.gate(), |editor| editor.set_status_categories(&column_id, categories));
            ctx.close_status_manager();
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| ctx.close_status_manager()>
            <div class="modal status-manager" on:click=|ev| ev.stop_propagation()>
                <h2>"Estados de " {column_title}</h2>
                <For
                    each=move || draft.get()
                    key=|cat| cat.id.clone()
                    children=move |cat| {
                        let id = cat.id.clone();
                        let (dot_id, label_id, color_id, delete_id) = (id.clone(), id.clone(), id.clone(), id);
                        let color = cat.color;
                        let dot_class = move || {
                            let current = draft.with(|cats| cats.iter().find(|c| c.id == dot_id).map(|c| c.color));
                            format!("status-dot status-{}", current.unwrap_or(color).as_str())
                        };
                        view! {
                            <div class="status-row">
                                <span class=dot_class></span>
                                <input
                                    type="text"
                                    value=cat.label.clone()
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        update(&label_id, &|c| c.label = value.clone());
                                    }
                                />
                                <select on:change=move |ev| {
                                    let value = TailwindColor::from_str(&event_target_value(&ev));
                                    update(&color_id, &|c| c.color = value);
                                }>
                                    {TailwindColor::ALL.into_iter().map(|option| view! {
                                        <option value=option.as_str() selected=option == color>{option.label()}</option>
                                    }).collect_view()}
                                </select>
                                <button
                                    type="button"
                                    class="status-delete-btn"
                                    on:click=move |_| draft.update(|cats| cats.retain(|c| c.id != delete_id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
                <div class="modal-actions">
                    <button type="button" on:click=add>"+ Nuevo estado"</button>
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.close_status_manager()>"Cancelar"</button>
                    <button type="button" class="primary" on:click=save>"Guardar"</button>
                </div>
            </div>
        </div>
    }
}
