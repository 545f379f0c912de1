//! Orders Data

use validator::Validate;

/// Page size applied when a list request does not specify one.
pub const DEFAULT_LIMIT: i64 = 50;

/// New Order Data
///
/// All six fields are required; validation reports every violated field,
/// not just the first.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewOrder {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,

    #[validate(email(message = "Valid email address is required"))]
    pub email: String,

    #[validate(length(min = 10, message = "Complete shipping address is required"))]
    pub shipping_address: String,

    #[validate(length(min = 10, message = "Valid phone number is required"))]
    pub phone_number: String,

    #[validate(length(min = 1, message = "Product name is required"))]
    pub product_name: String,

    #[validate(range(min = 1, message = "Quantity must be a positive number"))]
    pub quantity: i32,
}

/// Order Update Data
///
/// Absent fields leave the stored value untouched; present fields must
/// satisfy the same rule as order creation.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct OrderUpdate {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: Option<String>,

    #[validate(email(message = "Valid email address is required"))]
    pub email: Option<String>,

    #[validate(length(min = 10, message = "Complete shipping address is required"))]
    pub shipping_address: Option<String>,

    #[validate(length(min = 10, message = "Valid phone number is required"))]
    pub phone_number: Option<String>,

    #[validate(length(min = 1, message = "Product name is required"))]
    pub product_name: Option<String>,

    #[validate(range(min = 1, message = "Quantity must be a positive number"))]
    pub quantity: Option<i32>,
}

impl OrderUpdate {
    /// Returns true when no field is present, i.e. the update writes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Self {
            full_name,
            email,
            shipping_address,
            phone_number,
            product_name,
            quantity,
        } = self;

        full_name.is_none()
            && email.is_none()
            && shipping_address.is_none()
            && phone_number.is_none()
            && product_name.is_none()
            && quantity.is_none()
    }
}

/// Order List Filter
///
/// Present predicates are combined as a conjunction.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct OrderFilter {
    /// Exact match on the order email.
    #[validate(email(message = "Valid email address is required"))]
    pub email: Option<String>,

    /// Case-insensitive substring match on the product name.
    pub product_name: Option<String>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,

    #[validate(range(min = 0, message = "Offset must not be negative"))]
    pub offset: Option<i64>,
}

impl OrderFilter {
    pub(crate) fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub(crate) fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}
