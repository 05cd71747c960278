//! Cart service port definition.

use crate::domain::{AppError, Cart, CreatedCart};

/// Port for submitting carts on behalf of a customer.
pub trait CartService {
    /// Create `cart` for `customer_id`. Not idempotent.
    ///
    /// Failures are reported as [`AppError::SubmissionFailed`].
    fn create_cart(&self, customer_id: &str, cart: &Cart) -> Result<CreatedCart, AppError>;
}
