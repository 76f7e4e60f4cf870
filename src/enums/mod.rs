pub mod commands;
pub mod message_type;
pub mod session_command;
pub mod test_error;
