use crate::{
    abstract_trait::merchant::repository::MerchantCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CreateMerchantRequest,
    errors::RepositoryError,
    model::merchant::MerchantModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct MerchantCommandRepository {
    db: ConnectionPool,
}

impl MerchantCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MerchantCommandRepositoryTrait for MerchantCommandRepository {
    async fn create(
        &self,
        request: &CreateMerchantRequest,
    ) -> Result<MerchantModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        info!("🆕 Creating merchant record: {}", request.merchant_id);

        let merchant = sqlx::query_as::<_, MerchantModel>(
            r#"
            INSERT INTO merchants (
                merchant_id,
                merchant_name,
                wallet_id,
                items,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, '[]'::jsonb, NOW(), NOW())
            ON CONFLICT (merchant_id) DO NOTHING
            RETURNING
                id,
                merchant_id,
                merchant_name,
                wallet_id,
                items,
                created_at,
                updated_at
            "#,
        )
        .bind(&request.merchant_id)
        .bind(&request.merchant_name)
        .bind(&request.wallet_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create merchant {}: {e:?}", request.merchant_id);
            RepositoryError::from(e)
        })?;

        match merchant {
            Some(merchant) => Ok(merchant),
            None => {
                warn!("📦 Merchant {} already exists", request.merchant_id);
                Err(RepositoryError::AlreadyExists(format!(
                    "merchant_id={}",
                    request.merchant_id
                )))
            }
        }
    }
}
