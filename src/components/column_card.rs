//! Column Card Component
//!
//! One column: header with grip, color picker, status settings and delete;
//! body with its cards.

use leptos::prelude::*;

use board_core::{ColumnColor, DragKind, Gesture, Item, StatusCategory};
use leptos_dragdrop::*;

use crate::components::{DeleteConfirmButton, EditableText, ItemCard};
use crate::context::AppContext;
use crate::store::{store_edit_board, use_app_store};

fn color_label(color: ColumnColor) -> &'static str {
    match color {
        ColumnColor::Blue => "Azul",
        ColumnColor::Orange => "Naranja",
        ColumnColor::Purple => "Morado",
        ColumnColor::Green => "Verde",
        ColumnColor::Slate => "Gris",
    }
}

#[component]
pub fn ColumnCard(column_id: String, on_drop: Callback<(String, DragKind)>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let dnd = ctx.dnd;
    let (picking_color, set_picking_color) = signal(false);

    let column = {
        let id = column_id.clone();
        Memo::new(move |_| ctx.board.with(|b| b.column(&id).cloned()))
    };
    let title = Signal::derive(move || column.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default()));
    let description = Signal::derive(move || column.with(|c| c.as_ref().map(|c| c.description.clone()).unwrap_or_default()));
    let color = move || column.with(|c| c.as_ref().map(|c| c.color).unwrap_or_default());
    let categories: Signal<Vec<StatusCategory>> =
        Signal::derive(move || column.with(|c| c.as_ref().map(|c| c.status_categories.clone()).unwrap_or_default()));
    let items = move || column.with(|c| c.as_ref().map(|c| c.items.clone()).unwrap_or_default());
    let footer_text = move || column.with(|c| c.as_ref().and_then(|c| c.footer_text.clone()));
    let can_edit = ctx.can_edit_signal();

    // Visual state
    let class = {
        let id = column_id.clone();
        move || {
            let mut c = format!("column-card color-{}", color().as_str());
            with_view(&dnd, |view| {
                if view.is_column_dragging(&id) { c.push_str(" dragging"); }
                if view.is_column_drop_target(&id) { c.push_str(" drop-target"); }
                if view.is_item_dropping_inside(&id) { c.push_str(" dropping-inside"); }
            });
            c
        }
    };

    let on_drop_fn = move |target: &str, kind: DragKind| on_drop.run((target.to_string(), kind));

    let save_title = {
        let id = column_id.clone();
        Callback::new(move |value: String| {
            store_edit_board(&store, &ctx.gate(), |editor| editor.update_column_title(&id, value));
        })
    };
    let save_description = {
        let id = column_id.clone();
        Callback::new(move |value: String| {
            store_edit_board(&store, &ctx.gate(), |editor| editor.update_column_description(&id, value));
        })
    };
    let delete_column = {
        let id = column_id.clone();
        Callback::new(move |_: ()| {
            store_edit_board(&store, &ctx.gate(), |editor| editor.delete_column(&id));
        })
    };
    let add_item = {
        let id = column_id.clone();
        move |_: web_sys::MouseEvent| {
            store_edit_board(&store, &ctx.gate(), |editor| editor.add_item(&id));
        }
    };
    let add_section = {
        let id = column_id.clone();
        move |_: web_sys::MouseEvent| {
            store_edit_board(&store, &ctx.gate(), |editor| editor.add_section_header(&id));
        }
    };
    let open_statuses = {
        let id = column_id.clone();
        move |_: web_sys::MouseEvent| ctx.open_status_manager(id.clone())
    };
    let pick_color = {
        let id = column_id.clone();
        move |next: ColumnColor| {
            store_edit_board(&store, &ctx.gate(), |editor| editor.update_column_color(&id, next));
            set_picking_color.set(false);
        }
    };

    let empty_class = {
        let id = column_id.clone();
        move || {
            if with_view(&dnd, |view| view.is_item_dropping_inside(&id)) {
                "column-empty active"
            } else {
                "column-empty"
            }
        }
    };

    view! {
        <div
            class=class
            data-drag-root=""
            on:dragover=make_on_dragover(dnd, column_id.clone(), DragKind::Column, ctx.board_signal())
            on:drop=make_on_drop(dnd, column_id.clone(), DragKind::Column, on_drop_fn)
        >
            <div class="column-header">
                <div class="column-tools">
                    <span
                        class="drag-handle"
                        title="Arrastrar para reordenar"
                        draggable=move || if can_edit.get() { "true" } else { "false" }
                        on:dragstart=make_on_dragstart(dnd, Gesture::column(column_id.clone()), can_edit)
                        on:dragend=make_on_dragend(dnd)
                    >
                        "⠿"
                    </span>
                    <Show when=move || can_edit.get()>
                        <button
                            type="button"
                            class="column-tool-btn"
                            title="Cambiar color del grupo"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_picking_color.update(|v| *v = !*v);
                            }
                        >
                            "🎨"
                        </button>
                        <button type="button" class="column-tool-btn" title="Estados" on:click=open_statuses.clone()>
                            "⚙"
                        </button>
                        <DeleteConfirmButton
                            button_class="column-tool-btn"
                            prompt="¿Eliminar grupo?"
                            on_confirm=delete_column
                        />
                    </Show>
                </div>
                <div class="column-title">
                    <EditableText value=title on_save=save_title editable=can_edit placeholder="Titulo del grupo" />
                </div>
                <div class="column-description">
                    <EditableText
                        value=description
                        on_save=save_description
                        editable=can_edit
                        multiline=true
                        placeholder="Descripcion del grupo"
                    />
                </div>
            </div>

            <Show when=move || picking_color.get()>
                <div class="color-picker">
                    {ColumnColor::ALL.into_iter().map(|option| {
                        let pick_color = pick_color.clone();
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if color() == option {
                                        format!("color-swatch color-{} selected", option.as_str())
                                    } else {
                                        format!("color-swatch color-{}", option.as_str())
                                    }
                                }
                                title=color_label(option)
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    pick_color(option);
                                }
                            />
                        }
                    }).collect_view()}
                </div>
            </Show>

            <div class="column-body">
                <Show when=move || items().is_empty()>
                    <div class=empty_class.clone()>"Sin elementos"</div>
                </Show>
                <For
                    each=items
                    key=|item: &Item| {
                        (
                            item.id.clone(),
                            item.label.clone(),
                            item.kind.as_str(),
                            item.status.clone(),
                            item.description.clone(),
                            item.date.clone(),
                        )
                    }
                    children={
                        let column_id = column_id.clone();
                        move |item| view! {
                            <ItemCard
                                column_id=column_id.clone()
                                item=item
                                categories=categories
                                on_drop=on_drop
                            />
                        }
                    }
                />
                {move || footer_text().map(|text| view! { <div class="column-footer">{text}</div> })}
                <Show when=move || can_edit.get()>
                    <div class="column-add-row">
                        <button type="button" class="add-card-btn" on:click=add_item.clone()>"+ Anadir Tarjeta"</button>
                        <button type="button" class="add-card-btn" on:click=add_section.clone()>"+ Seccion"</button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
