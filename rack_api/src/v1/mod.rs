pub mod api_models;
pub mod error;
pub mod handlers;
pub mod router;
