//! Update Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orderdesk_app::domain::orders::{data::OrderUpdate, records::OrderId};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

/// Update Order Request
///
/// Absent fields leave the stored value untouched. A body with no fields
/// returns the stored order unchanged.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderRequest {
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub shipping_address: Option<String>,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub product_name: Option<String>,

    #[serde(default)]
    pub quantity: Option<i32>,
}

impl From<UpdateOrderRequest> for OrderUpdate {
    fn from(request: UpdateOrderRequest) -> Self {
        OrderUpdate {
            full_name: request.full_name,
            email: request.email,
            shipping_address: request.shipping_address,
            phone_number: request.phone_number,
            product_name: request.product_name,
            quantity: request.quantity,
        }
    }
}

/// Update Order Handler
#[endpoint(
    tags("orders"),
    summary = "Update Order",
    responses(
        (status_code = StatusCode::OK, description = "Order updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "orders.update",
    skip(id, json, depot),
    fields(order_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<OrderId>,
    json: JsonBody<UpdateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();

    tracing::Span::current().record("order_id", tracing::field::display(id));

    let updated = state
        .app
        .orders
        .update_order(id, json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("Order not found"))?;

    tracing::info!(order_id = id, "updated order");

    Ok(Json(updated.into()))
}
