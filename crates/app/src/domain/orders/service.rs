//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use validator::Validate;

use crate::domain::orders::{
    data::{NewOrder, OrderFilter, OrderUpdate},
    errors::OrdersServiceError,
    records::{OrderId, OrderRecord},
    repository::PgOrdersRepository,
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    pool: PgPool,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            repository: PgOrdersRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        order.validate()?;

        Ok(self.repository.create_order(&self.pool, &order).await?)
    }

    async fn list_orders(
        &self,
        filter: OrderFilter,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        filter.validate()?;

        Ok(self.repository.list_orders(&self.pool, &filter).await?)
    }

    async fn get_order(&self, order: OrderId) -> Result<Option<OrderRecord>, OrdersServiceError> {
        Ok(self.repository.get_order(&self.pool, order).await?)
    }

    async fn update_order(
        &self,
        order: OrderId,
        update: OrderUpdate,
    ) -> Result<Option<OrderRecord>, OrdersServiceError> {
        update.validate()?;

        // An update with no fields present is a read, not a write.
        if update.is_empty() {
            return Ok(self.repository.get_order(&self.pool, order).await?);
        }

        Ok(self
            .repository
            .update_order(&self.pool, order, &update)
            .await?)
    }

    async fn delete_order(&self, order: OrderId) -> Result<bool, OrdersServiceError> {
        let rows_affected = self.repository.delete_order(&self.pool, order).await?;

        Ok(rows_affected > 0)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validates the input and inserts one order; the database assigns
    /// `id` and `created_at`.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieves orders matching the filter, ordered by id ascending.
    async fn list_orders(
        &self,
        filter: OrderFilter,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Retrieves a single order, or `None` when the id matches no row.
    async fn get_order(&self, order: OrderId) -> Result<Option<OrderRecord>, OrdersServiceError>;

    /// Applies the present fields to the order with the given id. An empty
    /// update returns the stored record unchanged. `None` when the id
    /// matches no row, on both paths.
    async fn update_order(
        &self,
        order: OrderId,
        update: OrderUpdate,
    ) -> Result<Option<OrderRecord>, OrdersServiceError>;

    /// Removes the order with the given id. `true` iff a row was removed.
    async fn delete_order(&self, order: OrderId) -> Result<bool, OrdersServiceError>;
}
