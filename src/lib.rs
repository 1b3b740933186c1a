pub mod api;
pub mod cli;
pub mod core;
pub mod planning;
pub mod store;
pub mod tasks;
