//! Status Board Frontend App
//!
//! Sidebar of pages on the left, the open page's board on the right.
//! Every store change is written back to localStorage.

use leptos::prelude::*;
use log::{info, warn};
use reactive_stores::Store;

use board_core::access::page_permission;
use board_core::repository::{PageRepository, PreferenceRepository, UserRepository};
use board_core::BoardStore;
use leptos_dragdrop::create_dnd_signals;

use crate::components::{
    AuthPanel, BoardView, ChangeHistory, PageFooter, PageHeader, PageSidebar, RecentChanges, StatusManager, UserAdminPanel,
};
use crate::context::AppContext;
use crate::storage::local_storage;
use crate::store::{store_current_user, store_sign_out, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::load());
    provide_context(store);

    let dnd = create_dnd_signals();
    let current_user = Memo::new(move |_| store_current_user(&store));
    let permission = Memo::new(move |_| {
        let user = current_user.get();
        store.book().with(|book| page_permission(user.as_ref(), book.current_id()))
    });
    let board = Memo::new(move |_| {
        store
            .book()
            .with(|book| book.current().map(|page| page.columns.clone()).unwrap_or_else(BoardStore::default))
    });
    let status_column = signal(None::<String>);
    let ctx = AppContext::new(dnd, current_user, permission, board, status_column);
    provide_context(ctx);

    let (show_admin, set_show_admin) = signal(false);
    let show_history = RwSignal::new(false);

    info!(
        "[APP] Loaded {} pages, {} accounts",
        store.book().with_untracked(|b| b.pages().len()),
        store.users().with_untracked(|u| u.users().len())
    );

    // Persistence
    Effect::new(move |_| {
        let result = store.book().with(|book| match local_storage() {
            Some(storage) => PageRepository::new(&storage).save(book),
            None => Ok(()),
        });
        if let Err(e) = result {
            warn!("[APP] Failed to save pages: {}", e);
        }
    });

    Effect::new(move |_| {
        let result = store.users().with(|users| match local_storage() {
            Some(storage) => UserRepository::new(&storage).save(users),
            None => Ok(()),
        });
        if let Err(e) = result {
            warn!("[APP] Failed to save accounts: {}", e);
        }
    });

    Effect::new(move |_| {
        let email = store.session_email().get();
        let Some(storage) = local_storage() else {
            return;
        };
        let repo = UserRepository::new(&storage);
        let result = match email.as_deref() {
            Some(email) => repo.save_session(email),
            None => repo.clear_session(),
        };
        if let Err(e) = result {
            warn!("[APP] Failed to save session: {}", e);
        }
    });

    Effect::new(move |_| {
        let collapsed = store.sidebar_collapsed().get();
        if let Some(storage) = local_storage() {
            if let Err(e) = PreferenceRepository::new(&storage).set_sidebar_collapsed(collapsed) {
                warn!("[APP] Failed to save sidebar state: {}", e);
            }
        }
    });

    // A session whose account was deleted ends
    Effect::new(move |_| {
        if store.session_email().with(|e| e.is_some()) && current_user.with(|u| u.is_none()) {
            info!("[APP] Session account no longer exists, signing out");
            store_sign_out(&store);
        }
    });

    let signed_in = move || current_user.with(|u| u.is_some());
    let can_view = move || permission.get().can_view;
    let has_page = move || store.book().with(|b| b.current().is_some());

    view! {
        <Show when=signed_in fallback=|| view! { <AuthPanel /> }>
            <div class="app-layout">
                <PageSidebar />

                <main class="main-content">
                    <Show
                        when=has_page
                        fallback=|| view! { <p class="empty-state">"No hay paginas. Crea una desde la barra lateral."</p> }
                    >
                        <PageHeader show_admin=set_show_admin show_history=show_history />
                        <Show
                            when=can_view
                            fallback=|| view! { <p class="no-access">"No tienes acceso a esta pagina."</p> }
                        >
                            <BoardView />
                            <RecentChanges />
                            <PageFooter />
                        </Show>
                    </Show>
                </main>
            </div>

            <Show when=move || show_history.get()>
                <ChangeHistory on_close=move |_| show_history.set(false) />
            </Show>

            {move || {
                ctx.status_column.get().map(|column_id| view! { <StatusManager column_id=column_id /> })
            }}

            <Show when=move || show_admin.get() && ctx.is_admin()>
                <UserAdminPanel on_close=move |_| set_show_admin.set(false) />
            </Show>
        </Show>
    }
}
