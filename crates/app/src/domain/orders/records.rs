//! Order Records

use jiff::Timestamp;

/// Identifier the database assigns to an order at insert.
pub type OrderId = i32;

/// Order Record
///
/// One persisted customer purchase request. `id` and `created_at` are
/// assigned by the database and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: OrderId,
    pub full_name: String,
    pub email: String,
    pub shipping_address: String,
    pub phone_number: String,
    pub product_name: String,
    pub quantity: i32,
    pub created_at: Timestamp,
}
