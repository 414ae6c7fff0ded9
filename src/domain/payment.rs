use super::amount::Amount;
use super::notification::Notification;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name shown on the simulated STK confirmation dialog.
pub const MPESA_PAYEE: &str = "Kabarak University Easy Pay";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Mpesa,
    Bank,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mpesa => "M-Pesa",
            Self::Bank => "bank transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mpesa => f.write_str("mpesa"),
            Self::Bank => f.write_str("bank"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mpesa" | "m-pesa" => Ok(Self::Mpesa),
            "bank" => Ok(Self::Bank),
            other => Err(format!("unknown payment method '{other}'")),
        }
    }
}

/// A collection account listed on the bank transfer screen.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub struct BankAccount {
    pub bank: &'static str,
    pub account_number: &'static str,
    pub account_name: &'static str,
}

pub const BANK_ACCOUNTS: [BankAccount; 3] = [
    BankAccount {
        bank: "KCB Bank",
        account_number: "1234567890",
        account_name: "Kabarak Easy Pay",
    },
    BankAccount {
        bank: "Equity Bank",
        account_number: "9876543210",
        account_name: "Kabarak Easy Pay",
    },
    BankAccount {
        bank: "Co-operative Bank",
        account_number: "5555666677",
        account_name: "Kabarak Easy Pay",
    },
];

/// Instructions displayed under the bank accounts for a given total.
pub fn bank_instructions(total: Amount) -> Vec<String> {
    vec![
        format!("Transfer exactly KSh {total} to any of the above accounts"),
        "Use your registration number as the reference".to_string(),
        "Keep your transaction receipt for verification".to_string(),
        "Payment confirmation will be sent via SMS within 24 hours".to_string(),
    ]
}

/// The prompt of the second M-Pesa PIN dialog.
pub fn stk_confirmation_prompt(total: Amount) -> String {
    format!("Do you want to pay Ksh {total} to {MPESA_PAYEE}")
}

/// Toast raised once a simulated payment settles.
pub fn success_notification(total: Amount, method: PaymentMethod) -> Notification {
    Notification::info(
        format!("Payment of Ksh {total} was successful!"),
        format!("You have paid Ksh {total} via {}.", method.label()),
    )
}
