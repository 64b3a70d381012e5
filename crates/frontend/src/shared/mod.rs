pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod form_utils;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
