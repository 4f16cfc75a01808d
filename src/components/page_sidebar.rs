//! Page Sidebar Component
//!
//! Page list for switching between pages; administrators also create and
//! delete pages here.

use leptos::prelude::*;
use log::warn;

use crate::components::{DeleteConfirmButton, NewPageForm};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PageSidebar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let (adding, set_adding) = signal(false);

    let collapsed = move || store.sidebar_collapsed().get();
    let pages = Memo::new(move |_| {
        store.book().with(|book| {
            book.pages()
                .iter()
                .enumerate()
                .map(|(i, p)| (p.id.clone(), p.page_config.identifier.clone(), p.page_config.title.clone(), i == 0))
                .collect::<Vec<_>>()
        })
    });
    let current = move || store.book().with(|book| book.current_id().map(str::to_string));

    view! {
        <aside class=move || if collapsed() { "page-sidebar collapsed" } else { "page-sidebar" }>
            <button
                class="sidebar-toggle"
                on:click=move |_| store.sidebar_collapsed().update(|c| *c = !*c)
            >
                {move || if collapsed() { "»" } else { "«" }}
            </button>

            <Show when=move || !collapsed()>
                <h2 class="sidebar-title">"Paginas"</h2>
                <For
                    each=move || pages.get()
                    key=|page| page.clone()
                    children=move |(id, identifier, title, is_template)| {
                        let page_id = id.clone();
                        let is_active = {
                            let id = id.clone();
                            move || current().as_deref() == Some(id.as_str())
                        };
                        let select = move |_| {
                            if let Err(e) = store.book().write().select_page(&page_id) {
                                warn!("[PAGES] {}", e);
                            }
                        };
                        let delete_id = id.clone();
                        let on_delete = Callback::new(move |_: ()| {
                            let is_admin = ctx.current_user.with_untracked(|u| u.as_ref().map_or(false, |u| u.is_admin));
                            if let Err(e) = store.book().write().delete_page(&delete_id, is_admin) {
                                warn!("[PAGES] {}", e);
                            }
                        });

                        view! {
                            <div class=move || if is_active() { "page-entry active" } else { "page-entry" }>
                                <button class="page-link" on:click=select>
                                    <span class="page-identifier">{identifier}</span>
                                    <span class="page-title">{title}</span>
                                    {is_template.then(|| view! { <span class="template-badge">"plantilla"</span> })}
                                </button>
                                <Show when=move || ctx.is_admin()>
                                    <DeleteConfirmButton
                                        button_class="page-delete-btn"
                                        prompt="¿Eliminar pagina?"
                                        on_confirm=on_delete
                                    />
                                </Show>
                            </div>
                        }
                    }
                />

                <Show when=move || ctx.is_admin()>
                    {move || if adding.get() {
                        view! { <NewPageForm on_done=move |_| set_adding.set(false) /> }.into_any()
                    } else {
                        view! {
                            <button class="page-add-btn" on:click=move |_| set_adding.set(true)>
                                "+ Nueva pagina"
                            </button>
                        }.into_any()
                    }}
                </Show>
            </Show>
        </aside>
    }
}
