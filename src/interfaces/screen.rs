//! Plain-text rendering of the visible checkout screen.

use crate::domain::amount::Amount;
use crate::domain::catalog::{self, ServiceCategory};
use crate::domain::checkout::{CheckoutState, CheckoutStep, MpesaStage};
use crate::domain::payment::{self, BANK_ACCOUNTS, PaymentMethod};

/// Lines describing what the student currently sees.
pub fn render(state: &CheckoutState) -> Vec<String> {
    let total = state.total();
    match (state.step(), state.category()) {
        (CheckoutStep::Browsing, _) | (_, None) => ServiceCategory::ALL
            .iter()
            .map(|c| format!("{} - {}", c.title(), c.tagline()))
            .collect(),
        (CheckoutStep::ItemSelection, Some(category)) => {
            let mut lines = vec![
                category.title().to_string(),
                category.selection_heading().to_string(),
            ];
            for item in catalog::items_for(category) {
                let mark = if state.selection().is_selected(item.id) { "[x]" } else { "[ ]" };
                let price = if item.is_custom_amount {
                    match state.selection().amount_of(item.id) {
                        Some(amount) => format!("Custom (KSh {amount})"),
                        None => "Custom".to_string(),
                    }
                } else {
                    format!("KSh {}", Amount(item.unit_price))
                };
                lines.push(format!("{mark} {} - {price}", item.name));
            }
            lines.push(format!("Total: KSh {total}"));
            lines
        }
        (CheckoutStep::Summary, Some(_)) => {
            let mut lines = vec!["Payment Summary".to_string()];
            if let Some(order) = state.order() {
                lines.extend(
                    order
                        .lines
                        .iter()
                        .map(|l| format!("{}: KSh {}", l.item.name, l.amount)),
                );
                lines.push(format!("For: {}", order.description));
            }
            lines.push(format!("Total: KSh {total}"));
            lines
        }
        (CheckoutStep::MethodChosen(PaymentMethod::Bank), Some(_)) => {
            let mut lines = vec!["Bank Transfer Details".to_string()];
            lines.extend(BANK_ACCOUNTS.iter().map(|a| {
                format!("{}: {} ({})", a.bank, a.account_number, a.account_name)
            }));
            lines.extend(payment::bank_instructions(total));
            if state.pending().is_some() {
                lines.push("Confirming payment...".to_string());
            }
            lines
        }
        (CheckoutStep::MethodChosen(PaymentMethod::Mpesa), Some(_)) => vec![
            "M-Pesa Payment".to_string(),
            format!("Enter phone number to pay KSh {total}"),
        ],
        (CheckoutStep::Simulating(stage), Some(_)) => match stage {
            MpesaStage::StkPushSent => vec![
                "Safaricom M-Pesa STK Push".to_string(),
                format!("A pop-up has been sent to {}", state.phone_number()),
            ],
            MpesaStage::PinEntry => vec!["Enter M-PESA PIN to confirm".to_string()],
            MpesaStage::Processing => vec!["Processing...".to_string()],
            MpesaStage::ConfirmPin => vec![
                payment::stk_confirmation_prompt(total),
                "Enter M-PESA PIN:".to_string(),
            ],
        },
        (CheckoutStep::Success, Some(_)) => vec![
            "Payment Successful!".to_string(),
            format!("Your payment of KSh {total} has been processed successfully."),
        ],
    }
}
