use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};
use shared::{
    abstract_trait::merchant::service::DynMerchantCommandService,
    domain::{requests::CreateMerchantRequest, responses::MerchantResponse},
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/merchant-items",
    tag = "Merchant",
    request_body = CreateMerchantRequest,
    responses(
        (status = 201, description = "Merchant record created", body = MerchantResponse),
        (status = 400, description = "Merchant already exists or invalid body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_merchant(
    Extension(service): Extension<DynMerchantCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateMerchantRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn merchant_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/merchant-items", post(create_merchant))
        .route("/api/merchant-items/", post(create_merchant))
        .layer(Extension(app_state.di_container.merchant_command.clone()))
}
