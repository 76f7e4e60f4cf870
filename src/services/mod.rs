pub mod bootstrap;
pub mod notifier;
pub mod synochat_api;
pub mod synochat_controller;
pub mod synochat_sender;
pub mod wx_client;

#[cfg(test)]
pub(crate) mod test_support;
