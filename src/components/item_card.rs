//! Item Card Component
//!
//! A card or section header inside a column, with its own grip.

use leptos::prelude::*;

use board_core::domain::{ItemField, StatusBadge};
use board_core::{DragKind, Gesture, IndicatorPosition, Item, StatusCategory};
use leptos_dragdrop::*;

use crate::components::{DeleteConfirmButton, EditableText};
use crate::context::AppContext;
use crate::store::{store_edit_board, use_app_store};

/// Glyph and class of the decoration shown before a card's label
fn item_icon(item: &Item) -> Option<(&'static str, &'static str)> {
    if item.is_external_link {
        return Some(("🔗", "icon-link"));
    }
    match item.has_icon.as_deref()? {
        "dollar" => Some(("$", "icon-dollar")),
        "bulb" => Some(("💡", "icon-bulb")),
        "refresh" => Some(("↻", "icon-refresh")),
        _ => None,
    }
}

#[component]
pub fn ItemCard(
    column_id: String,
    item: Item,
    categories: Signal<Vec<StatusCategory>>,
    on_drop: Callback<(String, DragKind)>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let dnd = ctx.dnd;
    let can_edit = ctx.can_edit_signal();
    let id = item.id.clone();

    // Visual state
    let is_dragging = {
        let id = id.clone();
        move || with_view(&dnd, |view| view.is_item_dragging(&id))
    };
    let line = {
        let id = id.clone();
        move || with_view(&dnd, |view| view.insertion_line(&id))
    };
    let line_before = {
        let line = line.clone();
        move || line() == Some(IndicatorPosition::Before)
    };
    let line_after = move || line() == Some(IndicatorPosition::After);

    let edit_field = {
        let (column_id, id) = (column_id.clone(), id.clone());
        move |field: ItemField| {
            let (column_id, id) = (column_id.clone(), id.clone());
            Callback::new(move |value: String| {
                store_edit_board(&store, &ctx.gate(), |editor| editor.update_item(&column_id, &id, field, value));
            })
        }
    };
    let delete_item = {
        let (column_id, id) = (column_id.clone(), id.clone());
        Callback::new(move |_: ()| {
            store_edit_board(&store, &ctx.gate(), |editor| editor.delete_item(&column_id, &id));
        })
    };
    let on_drop_fn = move |target: &str, kind: DragKind| on_drop.run((target.to_string(), kind));

    let handle = view! {
        <span
            class="drag-handle"
            title="Arrastrar para reordenar"
            draggable=move || if can_edit.get() { "true" } else { "false" }
            on:dragstart=make_on_dragstart(dnd, Gesture::item(id.clone(), column_id.clone()), can_edit)
            on:dragend=make_on_dragend(dnd)
        >
            "⠿"
        </span>
    };

    let body = if item.is_section_header() {
        view! {
            <div class="section-header">
                {handle}
                <EditableText
                    value=item.label.clone()
                    on_save=edit_field(ItemField::Label)
                    editable=can_edit
                    class="section-label"
                    placeholder="SECCION"
                />
                <Show when=move || can_edit.get()>
                    <DeleteConfirmButton button_class="item-delete-btn" on_confirm=delete_item />
                </Show>
            </div>
        }
        .into_any()
    } else {
        let status = item.status.clone();
        let shows_status = item.shows_status();
        let badge = {
            let status = status.clone().unwrap_or_default();
            move || {
                categories.with(|cats| {
                    let badge = StatusBadge::resolve(cats, &status);
                    (badge.label().to_string(), badge.color().as_str())
                })
            }
        };
        let cycle = {
            let (column_id, id) = (column_id.clone(), id.clone());
            move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                store_edit_board(&store, &ctx.gate(), |editor| editor.cycle_item_status(&column_id, &id));
            }
        };
        let choose = {
            let (column_id, id) = (column_id.clone(), id.clone());
            move |ev: web_sys::Event| {
                let next = event_target_value(&ev);
                store_edit_board(&store, &ctx.gate(), |editor| editor.set_item_status(&column_id, &id, &next));
            }
        };
        let save_date = edit_field(ItemField::Date);
        let icon = item_icon(&item);

        view! {
            <div class=format!("item-card kind-{}", item.kind.as_str())>
                {handle}
                {icon.map(|(glyph, class)| view! { <span class=format!("item-icon {}", class)>{glyph}</span> })}
                <div class="item-content">
                    <EditableText
                        value=item.label.clone()
                        on_save=edit_field(ItemField::Label)
                        editable=can_edit
                        class="item-label"
                        placeholder="Nombre"
                    />
                    <EditableText
                        value=item.description.clone().unwrap_or_default()
                        on_save=edit_field(ItemField::Description)
                        editable=can_edit
                        multiline=true
                        class="item-description"
                        placeholder="Descripcion"
                    />
                    <div class="item-meta">
                        {shows_status.then(|| {
                            let badge = badge.clone();
                            let current = status.clone().unwrap_or_default();
                            view! {
                                <button
                                    type="button"
                                    class={
                                        let badge = badge.clone();
                                        move || format!("status-badge status-{}", badge().1)
                                    }
                                    title="Cambiar estado"
                                    disabled=move || !can_edit.get()
                                    on:click=cycle.clone()
                                >
                                    {
                                        let badge = badge.clone();
                                        move || badge().0
                                    }
                                </button>
                                <select
                                    class="status-select"
                                    disabled=move || !can_edit.get()
                                    on:change=choose.clone()
                                >
                                    {move || categories.get().into_iter().map(|cat| {
                                        let selected = cat.id == current;
                                        view! { <option value=cat.id.clone() selected=selected>{cat.label.clone()}</option> }
                                    }).collect_view()}
                                </select>
                            }
                        })}
                        <input
                            type="date"
                            class="item-date"
                            prop:value=item.date.clone().unwrap_or_default()
                            disabled=move || !can_edit.get()
                            on:change=move |ev| save_date.run(event_target_value(&ev))
                        />
                    </div>
                </div>
                <Show when=move || can_edit.get()>
                    <DeleteConfirmButton button_class="item-delete-btn" on_confirm=delete_item />
                </Show>
            </div>
        }
        .into_any()
    };

    view! {
        <Show when=line_before.clone()>
            <div class="insertion-line"></div>
        </Show>
        <div
            class=move || if is_dragging() { "item-slot dragging" } else { "item-slot" }
            data-drag-root=""
            on:dragover=make_on_dragover(dnd, id.clone(), DragKind::Item, ctx.board_signal())
            on:drop=make_on_drop(dnd, id.clone(), DragKind::Item, on_drop_fn)
        >
            {body}
        </div>
        <Show when=line_after.clone()>
            <div class="insertion-line"></div>
        </Show>
    }
}
