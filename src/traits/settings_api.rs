use async_trait::async_trait;
use crate::enums::test_error::TestError;
use crate::errors::SynochatResult;
use crate::structs::send_result::SendResult;
use crate::structs::synochat_test_request::SynochatTestRequest;

/// Remote key/value settings store plus the server-side test hook.
#[async_trait]
pub trait SettingsApi: Send + Sync {

    /// `Ok(None)` when the key has never been stored.
    async fn get_config_value(&self, key: &str) -> SynochatResult<Option<String>>;

    async fn put_config_value(&self, key: &str, value: &str) -> SynochatResult<()>;

    async fn test_synochat(&self, request: SynochatTestRequest) -> Result<SendResult, TestError>;
}
