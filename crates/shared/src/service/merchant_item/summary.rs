use crate::{
    abstract_trait::{
        merchant_item::{
            repository::query::DynMerchantItemQueryRepository,
            service::summary::MerchantSummaryServiceTrait,
        },
        transaction::repository::DynTransactionQueryRepository,
    },
    domain::responses::MerchantSummaryResponse,
    errors::ServiceError,
    service::merchant_lookup_error,
    utils::{Method, Metrics, ServiceTracer},
};
use anyhow::Result;
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use tracing::{error, info};

const SUMMARY_FAILED: &str = "Failed to fetch merchant summary";

pub struct MerchantSummaryService {
    query: DynMerchantItemQueryRepository,
    transactions: DynTransactionQueryRepository,
    tracer: ServiceTracer,
}

impl MerchantSummaryService {
    pub fn new(
        query: DynMerchantItemQueryRepository,
        transactions: DynTransactionQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register("merchant_summary_service", registry);

        Self {
            query,
            transactions,
            tracer: ServiceTracer::new("merchant-summary-service", metrics),
        }
    }
}

#[async_trait]
impl MerchantSummaryServiceTrait for MerchantSummaryService {
    async fn find_summary(&self, user_id: &str) -> Result<MerchantSummaryResponse, ServiceError> {
        info!("📊 Building summary for merchant user_id={user_id}");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "find_summary",
            vec![
                KeyValue::new("component", "merchant_summary"),
                KeyValue::new("user_id", user_id.to_string()),
            ],
        );

        let merchant = match self.query.find_merchant(user_id).await {
            Ok(merchant) => merchant,
            Err(e) => {
                error!("❌ Error in merchant summary for user_id={user_id}: {e:?}");
                self.tracer.complete_error(
                    &tracing_ctx,
                    method,
                    &format!("Merchant lookup failed: {e:?}"),
                );
                return Err(merchant_lookup_error(e, SUMMARY_FAILED));
            }
        };

        let purchases = match self.transactions.find_purchases_by_merchant(user_id).await {
            Ok(purchases) => purchases,
            Err(e) => {
                error!("❌ Error loading purchases for user_id={user_id}: {e:?}");
                self.tracer.complete_error(
                    &tracing_ctx,
                    method,
                    &format!("Purchase lookup failed: {e:?}"),
                );
                return Err(ServiceError::InternalServerError(SUMMARY_FAILED.to_string()));
            }
        };

        let summary = MerchantSummaryResponse::from_parts(&merchant, &purchases);

        info!(
            "✅ Summary for user_id={user_id}: {} items, {} sold across {} purchases",
            summary.total_items,
            summary.total_items_sold,
            purchases.len()
        );

        self.tracer
            .complete_success(&tracing_ctx, method, "Merchant summary computed");

        Ok(summary)
    }
}
