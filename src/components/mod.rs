//! UI Components
//!
//! Reusable Leptos components.

mod editable_text;
mod delete_confirm_button;
mod auth_panel;
mod new_page_form;
mod page_sidebar;
mod page_header;
mod page_footer;
mod board_view;
mod column_card;
mod item_card;
mod status_manager;
mod change_history;
mod user_admin_panel;

pub use editable_text::EditableText;
pub use delete_confirm_button::DeleteConfirmButton;
pub use auth_panel::AuthPanel;
pub use new_page_form::NewPageForm;
pub use page_sidebar::PageSidebar;
pub use page_header::PageHeader;
pub use page_footer::PageFooter;
pub use board_view::BoardView;
pub use column_card::ColumnCard;
pub use item_card::ItemCard;
pub use status_manager::StatusManager;
pub use change_history::{ChangeHistory, RecentChanges};
pub use user_admin_panel::UserAdminPanel;
