pub mod config;
pub mod server_config;
