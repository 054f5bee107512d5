use crate::{
    api::ApiState,
    core::{ProductPayload, product},
    entities::ProductModel,
    errors::Result,
};
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

// Extractor rejections are taken as `Result` so they surface as `Error::Rejected`
type IdPath = std::result::Result<Path<i64>, PathRejection>;
type PayloadBody = std::result::Result<Json<ProductPayload>, JsonRejection>;

/// `GET /api/product`
pub async fn list_products(State(state): State<ApiState>) -> Result<Json<Vec<ProductModel>>> {
    product::read_all(&state.database).await.map(Json)
}

/// `GET /api/product/{id}`
pub async fn read_product(
    State(state): State<ApiState>,
    path: IdPath,
) -> Result<Json<ProductModel>> {
    let Path(product_id) = path?;
    product::read_one(&state.database, product_id)
        .await
        .map(Json)
}

/// `POST /api/product`
pub async fn create_product(
    State(state): State<ApiState>,
    body: PayloadBody,
) -> Result<(StatusCode, Json<ProductModel>)> {
    let Json(payload) = body?;
    let created = product::create(&state.database, payload, state.create_policy).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/product/{id}`
pub async fn update_product(
    State(state): State<ApiState>,
    path: IdPath,
    body: PayloadBody,
) -> Result<Json<ProductModel>> {
    let Path(product_id) = path?;
    let Json(payload) = body?;
    product::update(&state.database, product_id, payload)
        .await
        .map(Json)
}

/// `DELETE /api/product/{id}`
pub async fn delete_product(
    State(state): State<ApiState>,
    path: IdPath,
) -> Result<(StatusCode, String)> {
    let Path(product_id) = path?;
    product::delete(&state.database, product_id).await?;
    Ok((StatusCode::OK, format!("Product {product_id} deleted")))
}
