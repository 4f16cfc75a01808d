//! Page Header Component
//!
//! Editable page identifier/title/description and the session actions.

use leptos::prelude::*;

use board_core::domain::PageField;

use crate::components::EditableText;
use crate::context::AppContext;
use crate::store::{store_edit_board, store_sign_out, use_app_store, AppStateStoreFields};

#[component]
pub fn PageHeader(
    show_admin: WriteSignal<bool>,
    show_history: RwSignal<bool>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let config_field = move |field: PageField| {
        Signal::derive(move || {
            store.book().with(|book| {
                book.current()
                    .map(|p| p.page_config.field(field).to_string())
                    .unwrap_or_default()
            })
        })
    };
    let save_field = move |field: PageField| {
        Callback::new(move |value: String| {
            store_edit_board(&store, &ctx.gate(), |editor| editor.update_page_config(field, value));
        })
    };
    let can_edit = ctx.can_edit_signal();

    let add_column = move |_: web_sys::MouseEvent| {
        store_edit_board(&store, &ctx.gate(), |editor| editor.add_column());
    };

    view! {
        <header class="page-header">
            <div class="page-heading">
                <div class="page-identifier-chip">
                    <EditableText
                        value=config_field(PageField::Identifier)
                        on_save=save_field(PageField::Identifier)
                        editable=can_edit
                        placeholder="ID-PROYECTO"
                    />
                </div>
                <div class="page-title">
                    <EditableText
                        value=config_field(PageField::Title)
                        on_save=save_field(PageField::Title)
                        editable=can_edit
                        placeholder="Titulo de la pagina"
                    />
                </div>
                <div class="page-description">
                    <EditableText
                        value=config_field(PageField::Description)
                        on_save=save_field(PageField::Description)
                        editable=can_edit
                        placeholder="Descripcion o subtitulo"
                    />
                </div>
            </div>

            <div class="page-actions">
                <div class="session-info">
                    <span class="session-label">"Sesion"</span>
                    <span class="session-email">{move || store.session_email().get().unwrap_or_default()}</span>
                </div>
                <button class="header-btn" on:click=move |_| show_history.update(|v| *v = !*v)>
                    "Historial"
                </button>
                <Show when=move || ctx.is_admin()>
                    <button class="header-btn" on:click=move |_| show_admin.set(true)>
                        "Administrar usuarios"
                    </button>
                </Show>
                <button class="header-btn" on:click=move |_| store_sign_out(&store)>
                    "Cerrar sesion"
                </button>
                <button
                    class="header-btn primary"
                    disabled=move || !ctx.can_edit()
                    on:click=add_column
                >
                    "+ Nuevo Grupo"
                </button>
            </div>
        </header>
    }
}
