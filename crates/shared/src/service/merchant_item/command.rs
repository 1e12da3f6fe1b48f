use crate::{
    abstract_trait::merchant_item::{
        repository::command::DynMerchantItemCommandRepository,
        service::command::MerchantItemCommandServiceTrait,
    },
    domain::{requests::ReplaceMerchantItemsRequest, responses::MerchantItemsResponse},
    errors::ServiceError,
    service::merchant_lookup_error,
    utils::{Method, Metrics, ServiceTracer},
};
use anyhow::Result;
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use tracing::{error, info};

pub struct MerchantItemCommandService {
    command: DynMerchantItemCommandRepository,
    tracer: ServiceTracer,
}

impl MerchantItemCommandService {
    pub fn new(command: DynMerchantItemCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("merchant_item_command_service", registry);

        Self {
            command,
            tracer: ServiceTracer::new("merchant-item-command-service", metrics),
        }
    }
}

#[async_trait]
impl MerchantItemCommandServiceTrait for MerchantItemCommandService {
    async fn replace_items(
        &self,
        user_id: &str,
        req: &ReplaceMerchantItemsRequest,
    ) -> Result<MerchantItemsResponse, ServiceError> {
        info!(
            "✏️ Replacing items for merchant user_id={user_id} with {} items",
            req.items.len()
        );

        let method = Method::Put;
        let tracing_ctx = self.tracer.start(
            "replace_items",
            vec![
                KeyValue::new("component", "merchant_item"),
                KeyValue::new("user_id", user_id.to_string()),
                KeyValue::new("item_count", req.items.len() as i64),
            ],
        );

        let merchant = match self.command.replace_items(user_id, &req.items).await {
            Ok(merchant) => merchant,
            Err(e) => {
                error!("❌ Failed to update merchant items for user_id={user_id}: {e:?}");
                self.tracer.complete_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to replace items: {e:?}"),
                );
                return Err(merchant_lookup_error(e, "Failed to update items"));
            }
        };

        self.tracer
            .complete_success(&tracing_ctx, method, "Merchant items replaced");

        Ok(MerchantItemsResponse::from(merchant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::merchant_item::repository::command::MockMerchantItemCommandRepositoryTrait,
        errors::RepositoryError,
        model::item::Item,
        service::merchant_item::fixtures::{item, merchant},
    };
    use std::sync::Arc;

    fn service(repo: MockMerchantItemCommandRepositoryTrait) -> MerchantItemCommandService {
        MerchantItemCommandService::new(Arc::new(repo), &mut Registry::default())
    }

    #[tokio::test]
    async fn returns_state_written_by_repository() {
        let mut repo = MockMerchantItemCommandRepositoryTrait::new();
        repo.expect_replace_items()
            .withf(|user_id, items| user_id == "m-1" && items.len() == 1)
            .times(1)
            .returning(|user_id, items: &[Item]| Ok(merchant(user_id, Some(items.to_vec()))));

        let req = ReplaceMerchantItemsRequest {
            items: vec![item(Some(2.0), Some(4.0))],
        };
        let response = service(repo)
            .replace_items("m-1", &req)
            .await
            .expect("merchant exists");

        assert_eq!(response.items, req.items);
    }

    #[tokio::test]
    async fn empty_payload_clears_items() {
        let mut repo = MockMerchantItemCommandRepositoryTrait::new();
        repo.expect_replace_items()
            .withf(|_, items| items.is_empty())
            .returning(|user_id, _| Ok(merchant(user_id, Some(Vec::new()))));

        let req = ReplaceMerchantItemsRequest { items: Vec::new() };
        let response = service(repo)
            .replace_items("m-1", &req)
            .await
            .expect("merchant exists");

        assert!(response.items.is_empty());
    }

    #[tokio::test]
    async fn unknown_merchant_is_not_found() {
        let mut repo = MockMerchantItemCommandRepositoryTrait::new();
        repo.expect_replace_items()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let req = ReplaceMerchantItemsRequest { items: Vec::new() };
        let err = service(repo).replace_items("ghost", &req).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Merchant not found"));
    }

    #[tokio::test]
    async fn datastore_failure_is_internal() {
        let mut repo = MockMerchantItemCommandRepositoryTrait::new();
        repo.expect_replace_items()
            .returning(|_, _| Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut)));

        let req = ReplaceMerchantItemsRequest { items: Vec::new() };
        let err = service(repo).replace_items("m-1", &req).await.unwrap_err();

        assert!(
            matches!(err, ServiceError::InternalServerError(msg) if msg == "Failed to update items")
        );
    }
}
