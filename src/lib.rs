pub mod analyzer;
pub mod config;
pub mod consts;
pub mod error;
pub mod logging;
pub mod server;
pub mod text;
