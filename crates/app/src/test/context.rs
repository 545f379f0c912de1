//! Test context for service-level integration tests.

use crate::domain::orders::PgOrdersService;

use super::db::TestDb;

/// Bundles an isolated database with the services under test.
///
/// Isolation is database-level: every test gets its own freshly migrated
/// database, so tests never need to clean up after themselves.
pub(crate) struct TestContext {
    pub db: TestDb,
    pub orders: PgOrdersService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let db = TestDb::new().await;
        let orders = PgOrdersService::new(db.pool().clone());

        Self { db, orders }
    }
}
