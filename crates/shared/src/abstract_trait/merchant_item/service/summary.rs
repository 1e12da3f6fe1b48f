use crate::{domain::responses::MerchantSummaryResponse, errors::ServiceError};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMerchantSummaryService = Arc<dyn MerchantSummaryServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MerchantSummaryServiceTrait {
    async fn find_summary(&self, user_id: &str) -> Result<MerchantSummaryResponse, ServiceError>;
}
