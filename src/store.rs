//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use log::warn;
use reactive_stores::Store;

use board_core::repository::{PageRepository, PreferenceRepository, UserRepository};
use board_core::{AccessGate, BoardEditor, PageBook, UserAccount, UserDirectory};

use crate::storage::local_storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every page plus the open one
    pub book: PageBook,
    /// Local accounts
    pub users: UserDirectory,
    /// Email of the signed-in account
    pub session_email: Option<String>,
    pub sidebar_collapsed: bool,
}

impl AppState {
    /// Restore the last session from browser storage
    pub fn load() -> Self {
        let Some(storage) = local_storage() else {
            warn!("[APP] localStorage unavailable, changes will not persist");
            return Self {
                book: PageBook::seeded(now_ms()),
                ..Default::default()
            };
        };
        let users = UserRepository::new(&storage);
        let session_email = users.load_session().unwrap_or_else(|e| {
            warn!("[APP] Session unreadable: {}", e);
            None
        });
        Self {
            book: PageRepository::new(&storage).load_or_seed(now_ms()),
            users: users.load(),
            session_email,
            sidebar_collapsed: PreferenceRepository::new(&storage).sidebar_collapsed(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Wall clock in unix millis
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

// ========================
// Store Helper Functions
// ========================

/// Account behind the session email (tracked)
pub fn store_current_user(store: &AppStore) -> Option<UserAccount> {
    let email = store.session_email().get()?;
    store.users().with(|users| users.find_by_email(&email).cloned())
}

/// Run one gated edit against the open page
pub fn store_edit_board<R>(
    store: &AppStore,
    gate: &impl AccessGate,
    f: impl FnOnce(&mut BoardEditor<'_>) -> R,
) -> Option<R> {
    let now = now_ms();
    let binding = store.book();
    let mut book = binding.write();
    let page = book.current_mut()?;
    let mut editor = BoardEditor::new(page, gate, now);
    Some(f(&mut editor))
}

pub fn store_sign_in(store: &AppStore, email: String) {
    store.session_email().set(Some(email));
}

pub fn store_sign_out(store: &AppStore) {
    store.session_email().set(None);
}
