//! UI Components
//!
//! Reusable Leptos components and the per-resource screens.

mod complaint_form;
mod complaint_screen;
mod delete_confirm_button;
mod facility_form;
mod facility_screen;
mod flash_bar;
mod modal;
mod pager;
mod room_form;
mod room_screen;
mod room_type_form;
mod room_type_screen;
mod tab_bar;

pub use complaint_form::ComplaintFormModal;
pub use complaint_screen::ComplaintScreen;
pub use delete_confirm_button::DeleteConfirmButton;
pub use facility_form::FacilityFormModal;
pub use facility_screen::FacilityScreen;
pub use flash_bar::{Flash, FlashBar};
pub use modal::Modal;
pub use pager::Pager;
pub use room_form::RoomFormModal;
pub use room_screen::RoomScreen;
pub use room_type_form::RoomTypeFormModal;
pub use room_type_screen::RoomTypeScreen;
pub use tab_bar::TabBar;
