//! New Page Form Component
//!
//! Form for creating a page from the template (administrators only).

use leptos::prelude::*;
use log::warn;

use crate::context::AppContext;
use crate::store::{now_ms, use_app_store, AppStateStoreFields};

#[component]
pub fn NewPageForm(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let (identifier, set_identifier) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let create_page = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let is_admin = ctx.current_user.with_untracked(|u| u.as_ref().map_or(false, |u| u.is_admin));
        let result = store
            .book()
            .write()
            .create_page(&identifier.get_untracked(), &title.get_untracked(), is_admin, now_ms());
        match result {
            Ok(_) => {
                set_identifier.set(String::new());
                set_title.set(String::new());
                set_error.set(None);
                on_done.run(());
            }
            Err(e) => {
                warn!("[PAGES] Page not created: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <form class="new-page-form" on:submit=create_page>
            <input
                type="text"
                placeholder="Identificador (ej. OPS-2026)"
                prop:value=move || identifier.get()
                on:input=move |ev| set_identifier.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Titulo de la pagina"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <p class="form-note">"La nueva pagina se creara basada en la plantilla actual."</p>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <div class="form-actions">
                <button type="submit">"Crear"</button>
                <button type="button" class="cancel-btn" on:click=move |_| on_done.run(())>"Cancelar"</button>
            </div>
        </form>
    }
}
