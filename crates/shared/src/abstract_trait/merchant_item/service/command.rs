use crate::{
    domain::{requests::ReplaceMerchantItemsRequest, responses::MerchantItemsResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMerchantItemCommandService = Arc<dyn MerchantItemCommandServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MerchantItemCommandServiceTrait {
    async fn replace_items(
        &self,
        user_id: &str,
        req: &ReplaceMerchantItemsRequest,
    ) -> Result<MerchantItemsResponse, ServiceError>;
}
