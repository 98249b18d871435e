pub mod alert;
pub mod button;
pub mod card;
pub mod footer;
pub mod form_group;
pub mod navbar;
pub mod text_area;
pub mod text_input;
