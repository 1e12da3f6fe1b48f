use crate::{errors::RepositoryError, model::transaction::TransactionModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    /// All purchase transactions whose `merchant_id` matches.
    async fn find_purchases_by_merchant(
        &self,
        merchant_id: &str,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;
}
