use crate::{
    abstract_trait::transaction::repository::TransactionQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::transaction::{PURCHASE_TYPE, TransactionModel},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn find_purchases_by_merchant(
        &self,
        merchant_id: &str,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        info!("🧾 Fetching purchases for merchant_id={merchant_id}");

        let transactions = sqlx::query_as::<_, TransactionModel>(
            r#"
            SELECT id, type, merchant_id, items, created_at
            FROM transactions
            WHERE merchant_id = $1
              AND type = $2
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(merchant_id)
        .bind(PURCHASE_TYPE)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch purchases for merchant_id={merchant_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Found {} purchases for merchant_id={merchant_id}",
            transactions.len()
        );

        Ok(transactions)
    }
}
