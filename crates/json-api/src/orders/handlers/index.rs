//! Order Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orderdesk_app::domain::orders::data::OrderFilter;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

/// Order List Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// The list of matching orders, id ascending
    pub orders: Vec<OrderResponse>,
}

/// Order Index Handler
///
/// Returns the orders matching the optional filters.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    responses(
        (status_code = StatusCode::OK, description = "Matching orders"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    email: QueryParam<String, false>,
    product_name: QueryParam<String, false>,
    limit: QueryParam<i64, false>,
    offset: QueryParam<i64, false>,
    depot: &mut Depot,
) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = OrderFilter {
        email: email.into_inner(),
        product_name: product_name.into_inner(),
        limit: limit.into_inner(),
        offset: offset.into_inner(),
    };

    let orders = state
        .app
        .orders
        .list_orders(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use validator::{ValidationError, ValidationErrors};

    use orderdesk_app::domain::orders::{MockOrdersService, OrdersServiceError};

    use crate::test_helpers::orders_service;

    use super::{super::tests::make_order, *};

    fn make_service(repo: MockOrdersService) -> Service {
        orders_service(repo, Router::with_path("orders").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_list_orders()
            .once()
            .withf(|filter| *filter == OrderFilter::default())
            .return_once(|_| Ok(vec![]));

        repo.expect_get_order().never();
        repo.expect_create_order().never();
        repo.expect_update_order().never();
        repo.expect_delete_order().never();

        let response: OrdersResponse = TestClient::get("http://example.com/orders")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert!(response.orders.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_orders() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_list_orders()
            .once()
            .return_once(|_| Ok(vec![make_order(1), make_order(2)]));

        repo.expect_get_order().never();
        repo.expect_create_order().never();
        repo.expect_update_order().never();
        repo.expect_delete_order().never();

        let response: OrdersResponse = TestClient::get("http://example.com/orders")
            .send(&make_service(repo))
            .await
            .take_json()
            .await?;

        assert_eq!(response.orders.len(), 2, "expected two orders");
        assert_eq!(response.orders[0].id, 1);
        assert_eq!(response.orders[1].id, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_filter_query_params() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_list_orders()
            .once()
            .withf(|filter| {
                *filter
                    == OrderFilter {
                        email: Some("ada@example.com".to_string()),
                        product_name: Some("engine".to_string()),
                        limit: Some(10),
                        offset: Some(5),
                    }
            })
            .return_once(|_| Ok(vec![]));

        repo.expect_get_order().never();
        repo.expect_create_order().never();
        repo.expect_update_order().never();
        repo.expect_delete_order().never();

        let res = TestClient::get(
            "http://example.com/orders?email=ada@example.com&product_name=engine&limit=10&offset=5",
        )
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_invalid_filter_returns_400() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_list_orders().once().return_once(|_| {
            let mut errors = ValidationErrors::new();

            errors.add("limit", ValidationError::new("range"));

            Err(OrdersServiceError::Validation(errors))
        });

        let res = TestClient::get("http://example.com/orders?limit=0")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut repo = MockOrdersService::new();

        repo.expect_list_orders()
            .once()
            .return_once(|_| Err(OrdersServiceError::Sql(sqlx::Error::PoolClosed)));

        let res = TestClient::get("http://example.com/orders")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
