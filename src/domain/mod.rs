pub mod catalog;
pub mod errors;
pub mod insights;
pub mod order;
pub mod ports;
pub mod pricing;
pub mod profile;
pub mod quantity;
pub mod session;
