use crate::api::{ApiState, handlers};
use axum::{
    Router,
    routing::{MethodRouter, get},
};
use tower_http::trace::TraceLayer;

/// Collection paths; `/api/products` is kept for the browser front-end.
const COLLECTION_PATHS: [&str; 2] = ["/api/product", "/api/products"];

/// Builds the application router with tracing attached.
pub fn create_router(state: ApiState) -> Router {
    let collection: MethodRouter<ApiState> =
        get(handlers::list_products).post(handlers::create_product);
    let member: MethodRouter<ApiState> = get(handlers::read_product)
        .put(handlers::update_product)
        .delete(handlers::delete_product);

    let mut router = Router::new();
    for path in COLLECTION_PATHS {
        router = router
            .route(path, collection.clone())
            .route(&format!("{path}/:product_id"), member.clone());
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
