pub mod http_api;
pub mod models;
pub mod session_store;
