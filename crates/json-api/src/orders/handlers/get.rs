//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orderdesk_app::domain::orders::records::{OrderId, OrderRecord};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The database-assigned order identifier
    pub id: OrderId,

    /// The customer's full name
    pub full_name: String,

    /// The customer's email address
    pub email: String,

    /// Where the order ships to
    pub shipping_address: String,

    /// The customer's phone number
    pub phone_number: String,

    /// The ordered product
    pub product_name: String,

    /// How many units were ordered
    pub quantity: i32,

    /// The date and time the order was created
    pub created_at: String,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            id: order.id,
            full_name: order.full_name,
            email: order.email,
            shipping_address: order.shipping_address,
            phone_number: order.phone_number,
            product_name: order.product_name,
            quantity: order.quantity,
            created_at: order.created_at.to_string(),
        }
    }
}

/// Get Order Handler
///
/// Returns an order.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<OrderId>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .get_order(id.into_inner())
        .await
        .map_err(into_status_error)?;

    order
        .map(|order| Json(order.into()))
        .ok_or_else(|| StatusError::not_found().brief("Order not found"))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use orderdesk_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::test_helpers::orders_service;

    use super::{super::tests::make_order, *};

    fn make_service(repo: MockOrdersService) -> Service {
        orders_service(repo, Router::with_path("orders/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_order() -> TestResult {
        let order = make_order(1);

        let mut repo = MockOrdersService::new();

        repo.expect_get_order()
            .once()
            .withf(|id| *id == 1)
            .return_once(move |_| Ok(Some(order)));

        repo.expect_create_order().never();
        repo.expect_list_orders().never();
        repo.expect_update_order().never();
        repo.expect_delete_order().never();

        let mut res = TestClient::get("http://example.com/orders/1")
            .send(&make_service(repo))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 1);
        assert_eq!(body.full_name, "Ada Lovelace");
        assert_eq!(body.quantity, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_order_returns_404() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_get_order()
            .once()
            .withf(|id| *id == 999)
            .return_once(|_| Ok(None));

        repo.expect_create_order().never();
        repo.expect_list_orders().never();
        repo.expect_update_order().never();
        repo.expect_delete_order().never();

        let res = TestClient::get("http://example.com/orders/999")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/orders/abc")
            .send(&make_service(MockOrdersService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_storage_error_returns_500() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_get_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::get("http://example.com/orders/1")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
