//! Simulated payment processing.
//!
//! There is no gateway: a charge is decided purely by the shape of the
//! submitted card number.

mod card;

pub use card::{
    check_card, mask_card_number, CardCheck, DECLINE_PREFIX, MAX_CARD_LENGTH, MIN_CARD_LENGTH,
};
