use crate::{
    abstract_trait::merchant_item::repository::query::MerchantItemQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::user::{MERCHANT_ROLE, MerchantUserModel},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

const SELECT_MERCHANT_USER: &str = r#"
    SELECT
        u.id,
        u.user_id,
        u.role,
        u.items,
        u.wallet_id,
        w.balance AS wallet_balance,
        u.created_at,
        u.updated_at
    FROM users u
    LEFT JOIN wallets w ON w.id = u.wallet_id
"#;

pub struct MerchantItemQueryRepository {
    db: ConnectionPool,
}

impl MerchantItemQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MerchantItemQueryRepositoryTrait for MerchantItemQueryRepository {
    async fn find_merchant(&self, user_id: &str) -> Result<MerchantUserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        info!("🔍 Fetching merchant user_id={user_id}");

        let sql = format!("{SELECT_MERCHANT_USER} WHERE u.user_id = $1 AND u.role = $2");

        let merchant = sqlx::query_as::<_, MerchantUserModel>(&sql)
            .bind(user_id)
            .bind(MERCHANT_ROLE)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch merchant user_id={user_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        merchant.ok_or(RepositoryError::NotFound)
    }

    async fn find_user(&self, user_id: &str) -> Result<MerchantUserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        info!("🔍 Fetching user user_id={user_id}");

        let sql = format!("{SELECT_MERCHANT_USER} WHERE u.user_id = $1");

        let user = sqlx::query_as::<_, MerchantUserModel>(&sql)
            .bind(user_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch user user_id={user_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        user.ok_or(RepositoryError::NotFound)
    }
}
