pub mod confirm_dialog;
pub mod pagination_controls;
pub mod status_banner;
pub mod table;
