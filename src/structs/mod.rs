pub mod cli;
pub mod config;
pub mod config_value_request;
pub mod send_result;
pub mod synochat_config;
pub mod synochat_state;
pub mod synochat_test_request;
pub mod validation_result;
