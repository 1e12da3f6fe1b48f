use crate::{
    abstract_trait::merchant_item::{
        repository::query::DynMerchantItemQueryRepository,
        service::query::MerchantItemQueryServiceTrait,
    },
    domain::responses::MerchantItemsResponse,
    errors::ServiceError,
    model::item::Item,
    service::merchant_lookup_error,
    utils::{Method, Metrics, ServiceTracer},
};
use anyhow::Result;
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use tracing::{error, info};

pub struct MerchantItemQueryService {
    query: DynMerchantItemQueryRepository,
    tracer: ServiceTracer,
}

impl MerchantItemQueryService {
    pub fn new(query: DynMerchantItemQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("merchant_item_query_service", registry);

        Self {
            query,
            tracer: ServiceTracer::new("merchant-item-query-service", metrics),
        }
    }
}

#[async_trait]
impl MerchantItemQueryServiceTrait for MerchantItemQueryService {
    async fn find_details(&self, user_id: &str) -> Result<MerchantItemsResponse, ServiceError> {
        info!("📦 Fetching item details for merchant user_id={user_id}");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "find_details",
            vec![
                KeyValue::new("component", "merchant_item"),
                KeyValue::new("user_id", user_id.to_string()),
            ],
        );

        let merchant = match self.query.find_merchant(user_id).await {
            Ok(merchant) => merchant,
            Err(e) => {
                error!("❌ Failed to fetch item details for user_id={user_id}: {e:?}");
                self.tracer.complete_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to fetch item details: {e:?}"),
                );
                return Err(merchant_lookup_error(e, "Failed to fetch merchant items"));
            }
        };

        let response = MerchantItemsResponse::from(merchant);

        self.tracer.complete_success(
            &tracing_ctx,
            method,
            &format!("Fetched {} items", response.items.len()),
        );

        Ok(response)
    }

    async fn find_items(&self, user_id: &str) -> Result<Vec<Item>, ServiceError> {
        info!("📦 Fetching item array for user_id={user_id}");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "find_items",
            vec![
                KeyValue::new("component", "merchant_item"),
                KeyValue::new("user_id", user_id.to_string()),
            ],
        );

        let user = match self.query.find_user(user_id).await {
            Ok(user) => user,
            Err(e) => {
                error!("❌ Error fetching merchant items for user_id={user_id}: {e:?}");
                self.tracer.complete_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to fetch item array: {e:?}"),
                );
                return Err(merchant_lookup_error(e, "Server error"));
            }
        };

        let items = user.into_items();

        self.tracer.complete_success(
            &tracing_ctx,
            method,
            &format!("Fetched {} items", items.len()),
        );

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::merchant_item::repository::query::MockMerchantItemQueryRepositoryTrait,
        errors::RepositoryError,
        service::merchant_item::fixtures::{item, merchant},
    };
    use mockall::predicate::eq;
    use std::sync::Arc;

    fn service(repo: MockMerchantItemQueryRepositoryTrait) -> MerchantItemQueryService {
        MerchantItemQueryService::new(Arc::new(repo), &mut Registry::default())
    }

    #[tokio::test]
    async fn details_return_stored_items_in_order() {
        let stored = vec![item(Some(10.0), Some(15.0)), item(Some(5.0), None)];
        let expected = stored.clone();

        let mut repo = MockMerchantItemQueryRepositoryTrait::new();
        repo.expect_find_merchant()
            .with(eq("m-1"))
            .times(1)
            .returning(move |_| Ok(merchant("m-1", Some(stored.clone()))));

        let response = service(repo).find_details("m-1").await.expect("merchant exists");
        assert_eq!(response.items, expected);
    }

    #[tokio::test]
    async fn details_default_absent_items_to_empty() {
        let mut repo = MockMerchantItemQueryRepositoryTrait::new();
        repo.expect_find_merchant()
            .returning(|_| Ok(merchant("m-1", None)));

        let response = service(repo).find_details("m-1").await.expect("merchant exists");
        assert!(response.items.is_empty());
    }

    #[tokio::test]
    async fn details_of_unknown_merchant_is_not_found() {
        let mut repo = MockMerchantItemQueryRepositoryTrait::new();
        repo.expect_find_merchant()
            .returning(|_| Err(RepositoryError::NotFound));

        let err = service(repo).find_details("ghost").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Merchant not found"));
    }

    #[tokio::test]
    async fn details_datastore_failure_is_internal() {
        let mut repo = MockMerchantItemQueryRepositoryTrait::new();
        repo.expect_find_merchant()
            .returning(|_| Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut)));

        let err = service(repo).find_details("m-1").await.unwrap_err();
        assert!(
            matches!(err, ServiceError::InternalServerError(msg) if msg == "Failed to fetch merchant items")
        );
    }

    #[tokio::test]
    async fn item_array_ignores_role() {
        let mut repo = MockMerchantItemQueryRepositoryTrait::new();
        repo.expect_find_merchant().never();
        repo.expect_find_user()
            .with(eq("u-7"))
            .returning(|_| {
                let mut user = merchant("u-7", Some(vec![item(None, Some(3.0))]));
                user.role = "customer".to_string();
                Ok(user)
            });

        let items = service(repo).find_items("u-7").await.expect("user exists");
        assert_eq!(items, vec![item(None, Some(3.0))]);
    }

    #[tokio::test]
    async fn item_array_failure_uses_server_error_message() {
        let mut repo = MockMerchantItemQueryRepositoryTrait::new();
        repo.expect_find_user()
            .returning(|_| Err(RepositoryError::Custom("boom".into())));

        let err = service(repo).find_items("u-7").await.unwrap_err();
        assert!(matches!(err, ServiceError::InternalServerError(msg) if msg == "Server error"));
    }
}
