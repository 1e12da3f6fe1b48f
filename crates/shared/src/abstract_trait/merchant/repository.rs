use crate::{
    domain::requests::CreateMerchantRequest, errors::RepositoryError,
    model::merchant::MerchantModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMerchantCommandRepository = Arc<dyn MerchantCommandRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MerchantCommandRepositoryTrait {
    /// Inserts a registry record unless one with the same `merchant_id`
    /// already exists, in which case `RepositoryError::AlreadyExists` is returned.
    async fn create(&self, request: &CreateMerchantRequest)
    -> Result<MerchantModel, RepositoryError>;
}
