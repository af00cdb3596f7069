pub mod config;
pub mod loader;
pub mod pipeline;
pub mod types;
