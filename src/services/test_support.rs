use async_trait::async_trait;
use mockall::mock;

use crate::enums::test_error::TestError;
use crate::errors::SynochatResult;
use crate::structs::send_result::SendResult;
use crate::structs::synochat_test_request::SynochatTestRequest;
use crate::traits::settings_api::SettingsApi;

mock! {
    pub SettingsApi {}

    #[async_trait]
    impl SettingsApi for SettingsApi {
        async fn get_config_value(&self, key: &str) -> SynochatResult<Option<String>>;
        async fn put_config_value(&self, key: &str, value: &str) -> SynochatResult<()>;
        async fn test_synochat(&self, request: SynochatTestRequest) -> Result<SendResult, TestError>;
    }
}
