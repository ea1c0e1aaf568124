use crate::domain::entities::order::CARD_SUFFIX_LENGTH;
use crate::errors::{DomainError, ValidationError};

pub const MIN_CARD_LENGTH: usize = 13;
pub const MAX_CARD_LENGTH: usize = 19;

/// Card numbers with this prefix are always declined
pub const DECLINE_PREFIX: &str = "0000";

/// Outcome of checking a submitted card number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardCheck {
    /// Accepted; carries the masked suffix to store on the order
    Valid { last_four: String },
    /// Malformed input
    Invalid { reason: ValidationError },
    Declined,
}

impl CardCheck {
    /// Maps the outcome to the stored suffix or the matching domain error
    pub fn into_result(self) -> Result<String, DomainError> {
        match self {
            CardCheck::Valid { last_four } => Ok(last_four),
            CardCheck::Invalid { reason } => Err(reason.into()),
            CardCheck::Declined => Err(DomainError::PaymentDeclined),
        }
    }
}

/// Validates the card number format, then applies the decline rule.
pub fn check_card(card_number: &str) -> CardCheck {
    let length = card_number.chars().count();
    if !(MIN_CARD_LENGTH..=MAX_CARD_LENGTH).contains(&length) {
        return CardCheck::Invalid {
            reason: ValidationError::InvalidLength {
                field: "card_number".to_string(),
                min: MIN_CARD_LENGTH,
                max: MAX_CARD_LENGTH,
                actual: length,
            },
        };
    }

    if !card_number.bytes().all(|b| b.is_ascii_digit()) {
        return CardCheck::Invalid {
            reason: ValidationError::InvalidFormat {
                field: "card_number".to_string(),
            },
        };
    }

    if card_number.starts_with(DECLINE_PREFIX) {
        return CardCheck::Declined;
    }

    // All ASCII digits, so byte slicing is safe
    let last_four = &card_number[card_number.len() - CARD_SUFFIX_LENGTH..];
    CardCheck::Valid {
        last_four: last_four.to_string(),
    }
}

/// Renders a card number for logs, keeping only the last four characters
pub fn mask_card_number(card_number: &str) -> String {
    let chars: Vec<char> = card_number.chars().collect();
    if chars.len() <= CARD_SUFFIX_LENGTH {
        return "*".repeat(chars.len());
    }
    let suffix: String = chars[chars.len() - CARD_SUFFIX_LENGTH..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - CARD_SUFFIX_LENGTH), suffix)
}
