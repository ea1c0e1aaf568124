//! Domain entities representing core business objects.

pub mod order;
pub mod product;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

use chrono::{DateTime, SubsecRound, Utc};

/// Current time truncated to microseconds, the precision `created_at` is stored at
pub(crate) fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

// Re-export commonly used types
pub use order::{Order, OrderDetails, OrderStatus, CARD_SUFFIX_LENGTH};
pub use product::{NewProduct, Product};
pub use token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
pub use user::{Role, User};
