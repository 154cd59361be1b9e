pub mod checker;
pub mod config;
pub mod http_client;
pub mod loader;
pub mod probe;
pub mod report;
