use serde::{Deserialize, Serialize};
use crate::structs::config::server_config::ServerConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}
