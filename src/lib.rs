pub mod core;
pub mod models;
pub mod api;
pub mod sweeper;
