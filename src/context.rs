//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use board_core::{BoardStore, PagePermission, UserAccount};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Drag-and-drop controller
    pub dnd: DndSignals,
    /// Signed-in account
    pub current_user: Memo<Option<UserAccount>>,
    /// Permission on the open page
    pub permission: Memo<PagePermission>,
    /// Columns of the open page
    pub board: Memo<BoardStore>,
    /// Column whose status categories are being edited - read
    pub status_column: ReadSignal<Option<String>>,
    /// Column whose status categories are being edited - write
    set_status_column: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        dnd: DndSignals,
        current_user: Memo<Option<UserAccount>>,
        permission: Memo<PagePermission>,
        board: Memo<BoardStore>,
        status_column: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            dnd,
            current_user,
            permission,
            board,
            status_column: status_column.0,
            set_status_column: status_column.1,
        }
    }

    pub fn can_edit(&self) -> bool {
        self.permission.get().can_edit
    }

    pub fn can_edit_signal(&self) -> Signal<bool> {
        let permission = self.permission;
        Signal::derive(move || permission.get().can_edit)
    }

    /// Untracked permission snapshot, for event handlers
    pub fn gate(&self) -> PagePermission {
        self.permission.get_untracked()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user.with(|user| user.as_ref().map_or(false, |u| u.is_admin))
    }

    pub fn board_signal(&self) -> Signal<BoardStore> {
        self.board.into()
    }

    pub fn open_status_manager(&self, column_id: String) {
        self.set_status_column.set(Some(column_id));
    }

    pub fn close_status_manager(&self) {
        self.set_status_column.set(None);
    }
}
