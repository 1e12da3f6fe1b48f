use crate::{
    abstract_trait::merchant_item::repository::command::MerchantItemCommandRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{
        item::Item,
        user::{MERCHANT_ROLE, MerchantUserModel},
    },
};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::types::Json;
use tracing::{error, info};

pub struct MerchantItemCommandRepository {
    db: ConnectionPool,
}

impl MerchantItemCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MerchantItemCommandRepositoryTrait for MerchantItemCommandRepository {
    async fn replace_items(
        &self,
        user_id: &str,
        items: &[Item],
    ) -> Result<MerchantUserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        info!(
            "🔄 Replacing items for merchant user_id={user_id} ({} items)",
            items.len()
        );

        // Update and read back in one statement.
        let merchant = sqlx::query_as::<_, MerchantUserModel>(
            r#"
            WITH updated AS (
                UPDATE users
                SET items = $2,
                    updated_at = NOW()
                WHERE user_id = $1
                  AND role = $3
                RETURNING id, user_id, role, items, wallet_id, created_at, updated_at
            )
            SELECT
                u.id,
                u.user_id,
                u.role,
                u.items,
                u.wallet_id,
                w.balance AS wallet_balance,
                u.created_at,
                u.updated_at
            FROM updated u
            LEFT JOIN wallets w ON w.id = u.wallet_id
            "#,
        )
        .bind(user_id)
        .bind(Json(items))
        .bind(MERCHANT_ROLE)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to replace items for user_id={user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        merchant.ok_or(RepositoryError::NotFound)
    }
}
