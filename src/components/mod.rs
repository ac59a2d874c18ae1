//! UI Components
//!
//! Leptos components for the deck view and its dialogs.

mod header_bar;
mod card_grid;
mod card_tile;
mod card_form_modal;
mod card_detail_modal;
mod delete_confirm_button;
mod about_modal;
mod notice_bar;
mod modal_backdrop;

pub use header_bar::HeaderBar;
pub use card_grid::CardGrid;
pub use card_tile::CardTile;
pub use card_form_modal::CardFormModal;
pub use card_detail_modal::CardDetailModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use about_modal::AboutModal;
pub use notice_bar::NoticeBar;
pub use modal_backdrop::ModalBackdrop;
