use std::fmt;
use serde::{Deserialize, Serialize};

/// Origin of a pushed message, stored as a small integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MessageType {
    Message,
    WebHook,
    SynologyChat,
}

impl MessageType {
    pub const ALL: [MessageType; 3] = [Self::Message, Self::WebHook, Self::SynologyChat];

    pub fn code(&self) -> u8 {
        match self {
            Self::Message => 0,
            Self::WebHook => 1,
            Self::SynologyChat => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Message => "Message",
            Self::WebHook => "WebHook",
            Self::SynologyChat => "Synology Chat",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Message => "blue",
            Self::WebHook => "orange",
            Self::SynologyChat => "green",
        }
    }
}

impl TryFrom<u8> for MessageType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Message),
            1 => Ok(Self::WebHook),
            2 => Ok(Self::SynologyChat),
            other => Err(format!("unknown message type code: {}", other)),
        }
    }
}

impl From<MessageType> for u8 {
    fn from(message_type: MessageType) -> Self {
        message_type.code()
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
