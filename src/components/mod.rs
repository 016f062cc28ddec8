//! UI Components
//!
//! Thin Leptos glue over the stores.

mod delete_confirm_button;
mod inline_edit;
mod item_row;
mod list_detail;
mod new_item_form;
mod new_list_form;
mod sidebar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use inline_edit::InlineEdit;
pub use item_row::ItemRow;
pub use list_detail::ListDetail;
pub use new_item_form::NewItemForm;
pub use new_list_form::NewListForm;
pub use sidebar::Sidebar;

/// Delay before resetting drag state after a reload, so the fresh rows
/// have rendered by the time the gesture signals are cleared.
pub(crate) const REBIND_DELAY_MS: u32 = 50;
