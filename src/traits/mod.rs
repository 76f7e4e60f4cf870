pub mod settings_api;
