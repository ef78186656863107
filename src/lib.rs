pub mod booking;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod session;
pub mod templates_structs;
