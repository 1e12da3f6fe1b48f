use crate::{
    abstract_trait::merchant::{
        repository::DynMerchantCommandRepository, service::MerchantCommandServiceTrait,
    },
    domain::{requests::CreateMerchantRequest, responses::MerchantResponse},
    errors::{RepositoryError, ServiceError, format_validation_errors},
    utils::{Method, Metrics, ServiceTracer},
};
use anyhow::Result;
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use tracing::{error, info, warn};
use validator::Validate;

pub struct MerchantCommandService {
    command: DynMerchantCommandRepository,
    tracer: ServiceTracer,
}

impl MerchantCommandService {
    pub fn new(command: DynMerchantCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("merchant_command_service", registry);

        Self {
            command,
            tracer: ServiceTracer::new("merchant-command-service", metrics),
        }
    }
}

#[async_trait]
impl MerchantCommandServiceTrait for MerchantCommandService {
    async fn create(&self, req: &CreateMerchantRequest) -> Result<MerchantResponse, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(vec![error_msg]));
        }

        info!(
            "🆕 Creating merchant {} ({})",
            req.merchant_id, req.merchant_name
        );

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "create_merchant",
            vec![
                KeyValue::new("component", "merchant"),
                KeyValue::new("merchant_id", req.merchant_id.clone()),
            ],
        );

        let merchant = match self.command.create(req).await {
            Ok(merchant) => merchant,
            Err(RepositoryError::AlreadyExists(detail)) => {
                warn!("📦 Duplicate merchant rejected: {detail}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Merchant already exists");
                return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                    "Merchant already exists".to_string(),
                )));
            }
            Err(e) => {
                error!("💥 Failed to create merchant {}: {e:?}", req.merchant_id);
                self.tracer.complete_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to create merchant: {e:?}"),
                );
                return Err(ServiceError::InternalServerError(
                    "Failed to create merchant".to_string(),
                ));
            }
        };

        info!("✅ Merchant created successfully: id={}", merchant.id);

        self.tracer
            .complete_success(&tracing_ctx, method, "Merchant created successfully");

        Ok(MerchantResponse::from(merchant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::merchant::repository::MockMerchantCommandRepositoryTrait,
        model::merchant::MerchantModel,
    };
    use rstest::rstest;
    use sqlx::types::Json;
    use std::sync::Arc;

    fn request(merchant_id: &str, merchant_name: &str) -> CreateMerchantRequest {
        CreateMerchantRequest {
            merchant_id: merchant_id.to_string(),
            merchant_name: merchant_name.to_string(),
            wallet_id: Some("w-9".to_string()),
        }
    }

    fn service(repo: MockMerchantCommandRepositoryTrait) -> MerchantCommandService {
        MerchantCommandService::new(Arc::new(repo), &mut Registry::default())
    }

    #[tokio::test]
    async fn creates_record_with_empty_items() {
        let mut repo = MockMerchantCommandRepositoryTrait::new();
        repo.expect_create().times(1).returning(|req| {
            Ok(MerchantModel {
                id: 7,
                merchant_id: req.merchant_id.clone(),
                merchant_name: req.merchant_name.clone(),
                wallet_id: req.wallet_id.clone(),
                items: Json(Vec::new()),
                created_at: None,
                updated_at: None,
            })
        });

        let response = service(repo)
            .create(&request("m-1", "Warung Sari"))
            .await
            .expect("merchant should be created");

        assert_eq!(response.id, 7);
        assert_eq!(response.merchant_id, "m-1");
        assert_eq!(response.wallet_id.as_deref(), Some("w-9"));
        assert!(response.items.is_empty());
    }

    #[tokio::test]
    async fn duplicate_is_reported_as_already_exists() {
        let mut repo = MockMerchantCommandRepositoryTrait::new();
        repo.expect_create()
            .returning(|_| Err(RepositoryError::AlreadyExists("merchant_id=m-1".into())));

        let err = service(repo)
            .create(&request("m-1", "Warung Sari"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::AlreadyExists(msg)) if msg == "Merchant already exists"
        ));
    }

    #[tokio::test]
    async fn datastore_failure_is_internal() {
        let mut repo = MockMerchantCommandRepositoryTrait::new();
        repo.expect_create()
            .returning(|_| Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut)));

        let err = service(repo)
            .create(&request("m-1", "Warung Sari"))
            .await
            .unwrap_err();

        assert!(
            matches!(err, ServiceError::InternalServerError(msg) if msg == "Failed to create merchant")
        );
    }

    #[rstest]
    #[case("", "Warung Sari")]
    #[case("m-1", "")]
    #[tokio::test]
    async fn invalid_request_never_reaches_repository(
        #[case] merchant_id: &str,
        #[case] merchant_name: &str,
    ) {
        let mut repo = MockMerchantCommandRepositoryTrait::new();
        repo.expect_create().never();

        let err = service(repo)
            .create(&request(merchant_id, merchant_name))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
