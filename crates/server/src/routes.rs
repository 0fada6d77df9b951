use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::CustomerService;

pub mod customers;

/// Shared handler state. Each router owns its own store, so tests can build
/// isolated instances.
#[derive(Clone)]
pub struct ServerState {
    pub customers: CustomerService,
}

impl ServerState {
    pub fn new(customers: CustomerService) -> Self { Self { customers } }
}

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: health plus the customer CRUD routes.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let customer_routes = Router::new()
        .route("/customers", get(customers::list_customers).post(customers::create_customer))
        .route(
            "/customers/:id",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        );

    Router::new()
        .route("/health", get(health))
        .merge(customer_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
