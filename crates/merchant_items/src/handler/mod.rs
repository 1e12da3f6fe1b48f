mod merchant;
mod merchant_item;
mod metrics;

use crate::state::AppState;
use anyhow::Result;
use axum::{Router, extract::DefaultBodyLimit};
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::merchant::merchant_routes;
pub use self::merchant_item::merchant_item_routes;
pub use self::metrics::metrics_routes;

const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        merchant_item::get_merchant_item_details,
        merchant_item::get_merchant_items,
        merchant_item::get_merchant_summary,
        merchant_item::replace_merchant_items,

        merchant::create_merchant,

        metrics::metrics_handler,
    ),
    tags(
        (name = "Merchant Items", description = "Merchant inventory and sales summary endpoints"),
        (name = "Merchant", description = "Standalone merchant registry endpoints"),
        (name = "Metrics", description = "Prometheus metrics"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    /// Assembles every route, the OpenAPI document and the Swagger UI.
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(merchant_item_routes(shared_state.clone()))
            .merge(merchant_routes(shared_state.clone()))
            .merge(metrics_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📈 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
