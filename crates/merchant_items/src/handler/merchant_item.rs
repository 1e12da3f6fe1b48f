use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::merchant_item::service::{
        command::DynMerchantItemCommandService, query::DynMerchantItemQueryService,
        summary::DynMerchantSummaryService,
    },
    domain::{
        requests::ReplaceMerchantItemsRequest,
        responses::{MerchantItemsResponse, MerchantSummaryResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/merchant-items/details/{user_id}",
    tag = "Merchant Items",
    params(("user_id" = String, Path, description = "User id of the merchant")),
    responses(
        (status = 200, description = "Items of the merchant", body = MerchantItemsResponse),
        (status = 404, description = "Merchant not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_merchant_item_details(
    Extension(service): Extension<DynMerchantItemQueryService>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_details(&user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/merchant-items/{user_id}/items",
    tag = "Merchant Items",
    params(("user_id" = String, Path, description = "User id, any role")),
    responses(
        (status = 200, description = "Bare array of the user's items"),
        (status = 404, description = "Merchant not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_merchant_items(
    Extension(service): Extension<DynMerchantItemQueryService>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let items = service.find_items(&user_id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/merchant-items/summary/{user_id}",
    tag = "Merchant Items",
    params(("user_id" = String, Path, description = "User id of the merchant")),
    responses(
        (status = 200, description = "Inventory and sales summary", body = MerchantSummaryResponse),
        (status = 404, description = "Merchant not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_merchant_summary(
    Extension(service): Extension<DynMerchantSummaryService>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_summary(&user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/api/merchant-items/{user_id}/items",
    tag = "Merchant Items",
    params(("user_id" = String, Path, description = "User id of the merchant")),
    request_body = ReplaceMerchantItemsRequest,
    responses(
        (status = 200, description = "Items after replacement", body = MerchantItemsResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "Merchant not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn replace_merchant_items(
    Extension(service): Extension<DynMerchantItemCommandService>,
    Path(user_id): Path<String>,
    SimpleValidatedJson(body): SimpleValidatedJson<ReplaceMerchantItemsRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.replace_items(&user_id, &body).await?;
    Ok(Json(response))
}

pub fn merchant_item_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/merchant-items/details/{user_id}",
            get(get_merchant_item_details),
        )
        .route(
            "/api/merchant-items/{user_id}/items",
            get(get_merchant_items).put(replace_merchant_items),
        )
        .route(
            "/api/merchant-items/summary/{user_id}",
            get(get_merchant_summary),
        )
        .layer(Extension(
            app_state.di_container.merchant_item_query.clone(),
        ))
        .layer(Extension(
            app_state.di_container.merchant_item_command.clone(),
        ))
        .layer(Extension(app_state.di_container.merchant_summary.clone()))
}
