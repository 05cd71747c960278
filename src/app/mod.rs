pub mod api;
pub mod cli;
pub mod commands;
pub mod configuration;
mod context;
pub mod logging;

pub use context::AppContext;
