use crate::{errors::RepositoryError, model::user::MerchantUserModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMerchantItemQueryRepository = Arc<dyn MerchantItemQueryRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MerchantItemQueryRepositoryTrait {
    /// Looks up a user holding the merchant role.
    async fn find_merchant(&self, user_id: &str) -> Result<MerchantUserModel, RepositoryError>;
    /// Looks up a user regardless of role.
    async fn find_user(&self, user_id: &str) -> Result<MerchantUserModel, RepositoryError>;
}
