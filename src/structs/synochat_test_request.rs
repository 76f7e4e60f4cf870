use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynochatTestRequest {
    pub webhook: String,
    pub verify_ssl: bool,
}
