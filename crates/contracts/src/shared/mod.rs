pub mod api_message;
pub mod validation;
