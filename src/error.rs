use crate::domain::catalog::ServiceCategory;
use crate::domain::checkout::CheckoutStep;
use crate::domain::notification::Notification;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("no items selected or payment description is blank")]
    IncompleteSelection,
    #[error("amount {amount} for '{item}' is below the minimum of {minimum}")]
    AmountBelowMinimum {
        item: &'static str,
        amount: u64,
        minimum: u64,
    },
    #[error("phone number is required")]
    MissingPhoneNumber,
    #[error("PIN must not be empty")]
    InvalidPin,
    #[error("item '{id}' does not exist in the {category} catalog")]
    UnknownItem {
        category: ServiceCategory,
        id: String,
    },
    #[error("item '{0}' does not accept a custom amount")]
    NotCustomAmount(&'static str),
    #[error("'{event}' is not allowed while {step}")]
    InvalidTransition {
        step: CheckoutStep,
        event: &'static str,
    },
    #[error("Script error: {0}")]
    ScriptError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CheckoutError {
    /// Whether the error is a user-correctable input problem that should be
    /// surfaced as a notification instead of being returned to the caller.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::IncompleteSelection
                | Self::AmountBelowMinimum { .. }
                | Self::MissingPhoneNumber
                | Self::InvalidPin
        )
    }

    /// The destructive toast shown for validation failures.
    pub fn notification(&self) -> Option<Notification> {
        let (title, description) = match self {
            Self::IncompleteSelection => (
                "Incomplete Information",
                "Please select items and add a payment description".to_string(),
            ),
            Self::AmountBelowMinimum { minimum, .. } => (
                "Amount Too Low",
                format!("Custom amounts must be at least KSh {minimum}"),
            ),
            Self::MissingPhoneNumber => (
                "Phone Number Required",
                "Please enter your phone number".to_string(),
            ),
            Self::InvalidPin => ("Invalid PIN", "Please enter your M-Pesa PIN".to_string()),
            _ => return None,
        };
        Some(Notification::destructive(title, description))
    }
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
