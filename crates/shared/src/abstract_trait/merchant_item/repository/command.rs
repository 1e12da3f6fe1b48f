use crate::{
    errors::RepositoryError,
    model::{item::Item, user::MerchantUserModel},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMerchantItemCommandRepository =
    Arc<dyn MerchantItemCommandRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MerchantItemCommandRepositoryTrait {
    async fn replace_items(
        &self,
        user_id: &str,
        items: &[Item],
    ) -> Result<MerchantUserModel, RepositoryError>;
}
