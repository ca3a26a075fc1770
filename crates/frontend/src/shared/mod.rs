pub mod api_utils;
pub mod components;
pub mod form_session;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod pagination;
pub mod selection;
