pub mod config;
pub mod cover;
pub mod types;
