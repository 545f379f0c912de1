//! Delete Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orderdesk_app::domain::orders::records::OrderId;

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Order Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderDeletedResponse {
    /// True iff a row was actually removed
    pub deleted: bool,
}

/// Delete Order Handler
///
/// Removes an order. Repeated deletes of the same id report `deleted: false`
/// after the first.
#[endpoint(
    tags("orders"),
    summary = "Delete Order",
    responses(
        (status_code = StatusCode::OK, description = "Delete outcome"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<OrderId>,
    depot: &mut Depot,
) -> Result<Json<OrderDeletedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let deleted = state
        .app
        .orders
        .delete_order(id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrderDeletedResponse { deleted }))
}
