use crate::{
    domain::responses::MerchantItemsResponse, errors::ServiceError, model::item::Item,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMerchantItemQueryService = Arc<dyn MerchantItemQueryServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MerchantItemQueryServiceTrait {
    async fn find_details(&self, user_id: &str) -> Result<MerchantItemsResponse, ServiceError>;
    async fn find_items(&self, user_id: &str) -> Result<Vec<Item>, ServiceError>;
}
