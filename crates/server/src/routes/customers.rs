use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use service::{Customer, CustomerUpdate};

use crate::errors::ApiError;
use crate::routes::ServerState;

/// Decode a customer body. Content-Type is not checked; any decode failure
/// becomes a 400 carrying the decoder's message. Only a JSON object is a
/// customer: arrays would otherwise fill the fields positionally.
fn decode_customer(body: &[u8]) -> Result<Customer, ApiError> {
    let object: Map<String, Value> = serde_json::from_slice(body)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

/// 创建客户（同 id 直接覆盖）
pub async fn create_customer(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let customer = decode_customer(&body)?;
    let stored = state.customers.create(customer).await;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// 列出所有客户；空表返回 `[]`
pub async fn list_customers(State(state): State<ServerState>) -> Json<Vec<Customer>> {
    Json(state.customers.list().await)
}

pub async fn get_customer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.customers.get(&id).await?))
}

/// 更新客户：仅替换 nome 与 email，id 保持不变
pub async fn update_customer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Customer>, ApiError> {
    let update = CustomerUpdate::from(decode_customer(&body)?);
    Ok(Json(state.customers.update(&id, update).await?))
}

pub async fn delete_customer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.customers.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
