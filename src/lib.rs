//! Configure and test a Synology Chat webhook channel through the WeRSS settings API.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
