use crate::{
    domain::{requests::CreateMerchantRequest, responses::MerchantResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMerchantCommandService = Arc<dyn MerchantCommandServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MerchantCommandServiceTrait {
    async fn create(&self, request: &CreateMerchantRequest)
    -> Result<MerchantResponse, ServiceError>;
}
