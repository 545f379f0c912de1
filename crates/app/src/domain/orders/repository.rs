//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::orders::{
    data::{NewOrder, OrderFilter, OrderUpdate},
    records::{OrderId, OrderRecord},
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const UPDATE_ORDER_SQL: &str = include_str!("sql/update_order.sql");
const DELETE_ORDER_SQL: &str = include_str!("sql/delete_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        pool: &PgPool,
        order: &NewOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(&order.full_name)
            .bind(&order.email)
            .bind(&order.shipping_address)
            .bind(&order.phone_number)
            .bind(&order.product_name)
            .bind(order.quantity)
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        pool: &PgPool,
        order: OrderId,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order)
            .fetch_optional(pool)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        pool: &PgPool,
        filter: &OrderFilter,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(filter.email.as_deref())
            .bind(filter.product_name.as_deref())
            .bind(filter.limit())
            .bind(filter.offset())
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn update_order(
        &self,
        pool: &PgPool,
        order: OrderId,
        update: &OrderUpdate,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(UPDATE_ORDER_SQL)
            .bind(order)
            .bind(update.full_name.as_deref())
            .bind(update.email.as_deref())
            .bind(update.shipping_address.as_deref())
            .bind(update.phone_number.as_deref())
            .bind(update.product_name.as_deref())
            .bind(update.quantity)
            .fetch_optional(pool)
            .await
    }

    pub(crate) async fn delete_order(
        &self,
        pool: &PgPool,
        order: OrderId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_SQL)
            .bind(order)
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            full_name: row.try_get("full_name")?,
            email: row.try_get("email")?,
            shipping_address: row.try_get("shipping_address")?,
            phone_number: row.try_get("phone_number")?,
            product_name: row.try_get("product_name")?,
            quantity: row.try_get("quantity")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
