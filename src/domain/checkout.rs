use super::amount::{Amount, MIN_CUSTOM_AMOUNT};
use super::catalog::{self, CatalogItem, ServiceCategory};
use super::notification::Notification;
use super::order::Order;
use super::payment::{self, PaymentMethod};
use super::selection::Selection;
use crate::error::{CheckoutError, Result};
use serde::Serialize;
use std::fmt;

/// Sub-steps of the simulated M-Pesa STK push.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum MpesaStage {
    /// Waiting for the push to "arrive" on the phone.
    StkPushSent,
    PinEntry,
    /// Spinner between the two PIN dialogs.
    Processing,
    /// Second dialog showing payee and amount.
    ConfirmPin,
}

/// Which screen or modal of the checkout is visible.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutStep {
    #[default]
    Browsing,
    ItemSelection,
    Summary,
    MethodChosen(PaymentMethod),
    Simulating(MpesaStage),
    Success,
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Browsing => f.write_str("browsing"),
            Self::ItemSelection => f.write_str("selecting items"),
            Self::Summary => f.write_str("showing the summary"),
            Self::MethodChosen(method) => write!(f, "paying by {method}"),
            Self::Simulating(stage) => write!(f, "simulating M-Pesa ({stage:?})"),
            Self::Success => f.write_str("showing success"),
        }
    }
}

/// Delays driven by the session's scheduler.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum Timer {
    StkPush,
    PinProcessing,
    BankSettlement,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PendingTimer {
    pub ticket: u64,
    pub timer: Timer,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CheckoutEvent {
    SelectCategory(ServiceCategory),
    ToggleItem(String),
    SetCustomAmount { item: String, amount: Amount },
    SetDescription(String),
    /// "Proceed to Payment Summary".
    Proceed,
    /// Closes the open modal (overlay click or cancel button).
    Dismiss,
    ChooseMethod(PaymentMethod),
    /// "I Have Made the Payment".
    ConfirmBankPayment,
    SubmitPhone(String),
    SubmitPin(String),
    TimerElapsed(u64),
    Reset,
    /// "Back to Home".
    Leave,
}

impl CheckoutEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectCategory(_) => "select category",
            Self::ToggleItem(_) => "toggle item",
            Self::SetCustomAmount { .. } => "set custom amount",
            Self::SetDescription(_) => "set description",
            Self::Proceed => "proceed",
            Self::Dismiss => "dismiss",
            Self::ChooseMethod(_) => "choose method",
            Self::ConfirmBankPayment => "confirm bank payment",
            Self::SubmitPhone(_) => "submit phone",
            Self::SubmitPin(_) => "submit PIN",
            Self::TimerElapsed(_) => "timer elapsed",
            Self::Reset => "reset",
            Self::Leave => "leave",
        }
    }
}

/// Side effects requested by a transition, carried out by the session.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Effect {
    Notify(Notification),
    Schedule { ticket: u64, timer: Timer },
    Cancel(u64),
    NavigateHome,
}

/// Complete state of one checkout session.
#[derive(Debug, Clone, Default)]
pub struct CheckoutState {
    step: CheckoutStep,
    category: Option<ServiceCategory>,
    selection: Selection,
    description: String,
    method: Option<PaymentMethod>,
    phone_number: String,
    pending: Option<PendingTimer>,
    next_ticket: u64,
}

impl CheckoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn category(&self) -> Option<ServiceCategory> {
        self.category
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn method(&self) -> Option<PaymentMethod> {
        self.method
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn pending(&self) -> Option<PendingTimer> {
        self.pending
    }

    pub fn total(&self) -> Amount {
        self.selection.total()
    }

    pub fn order(&self) -> Option<Order> {
        self.category
            .map(|category| Order::derive(category, &self.selection, &self.description))
    }

    /// Whether the "Proceed" button would be shown.
    pub fn can_proceed(&self) -> bool {
        self.step == CheckoutStep::ItemSelection
            && !self.selection.is_empty()
            && !self.description.trim().is_empty()
    }

    /// Applies one event.
    ///
    /// On error nothing has been modified, so the caller can surface the
    /// message and let the user retry.
    pub fn apply(&mut self, event: CheckoutEvent) -> Result<Vec<Effect>> {
        let name = event.name();
        match event {
            CheckoutEvent::Reset => Ok(self.reset()),
            CheckoutEvent::Leave => {
                let mut effects = self.reset();
                effects.push(Effect::NavigateHome);
                Ok(effects)
            }
            CheckoutEvent::TimerElapsed(ticket) => Ok(self.timer_elapsed(ticket)),
            CheckoutEvent::SelectCategory(category) => match self.step {
                CheckoutStep::Browsing | CheckoutStep::ItemSelection => {
                    if self.category != Some(category) {
                        self.selection.clear();
                        self.category = Some(category);
                    }
                    self.step = CheckoutStep::ItemSelection;
                    Ok(Vec::new())
                }
                step => Err(invalid(step, name)),
            },
            CheckoutEvent::ToggleItem(id) => {
                let item = self.selecting_item(&id, name)?;
                self.selection.toggle(item);
                Ok(Vec::new())
            }
            CheckoutEvent::SetCustomAmount { item, amount } => {
                let item = self.selecting_item(&item, name)?;
                self.selection.set_custom_amount(item, amount)?;
                Ok(Vec::new())
            }
            CheckoutEvent::SetDescription(description) => {
                self.expect(CheckoutStep::ItemSelection, name)?;
                self.description = description;
                Ok(Vec::new())
            }
            CheckoutEvent::Proceed => {
                self.expect(CheckoutStep::ItemSelection, name)?;
                self.check_ready()?;
                self.step = CheckoutStep::Summary;
                Ok(Vec::new())
            }
            CheckoutEvent::ChooseMethod(method) => {
                self.expect(CheckoutStep::Summary, name)?;
                self.method = Some(method);
                self.step = CheckoutStep::MethodChosen(method);
                Ok(Vec::new())
            }
            CheckoutEvent::Dismiss => self.dismiss(name),
            CheckoutEvent::ConfirmBankPayment => {
                self.expect(CheckoutStep::MethodChosen(PaymentMethod::Bank), name)?;
                if self.pending.is_some() {
                    return Ok(Vec::new());
                }
                Ok(vec![self.schedule(Timer::BankSettlement)])
            }
            CheckoutEvent::SubmitPhone(phone) => {
                self.expect(CheckoutStep::MethodChosen(PaymentMethod::Mpesa), name)?;
                let phone = phone.trim();
                if phone.is_empty() {
                    return Err(CheckoutError::MissingPhoneNumber);
                }
                self.phone_number = phone.to_string();
                self.step = CheckoutStep::Simulating(MpesaStage::StkPushSent);
                Ok(vec![self.schedule(Timer::StkPush)])
            }
            CheckoutEvent::SubmitPin(pin) => self.submit_pin(&pin, name),
        }
    }

    fn check_ready(&self) -> Result<()> {
        if self.selection.is_empty() || self.description.trim().is_empty() {
            return Err(CheckoutError::IncompleteSelection);
        }
        let category = self.category.ok_or(CheckoutError::IncompleteSelection)?;
        for (id, amount) in self.selection.iter() {
            let custom = catalog::find(category, id).is_some_and(|item| item.is_custom_amount);
            if custom && amount < MIN_CUSTOM_AMOUNT {
                return Err(CheckoutError::AmountBelowMinimum {
                    item: id,
                    amount: amount.value(),
                    minimum: MIN_CUSTOM_AMOUNT.value(),
                });
            }
        }
        Ok(())
    }

    fn submit_pin(&mut self, pin: &str, name: &'static str) -> Result<Vec<Effect>> {
        let stage = match self.step {
            CheckoutStep::Simulating(stage @ (MpesaStage::PinEntry | MpesaStage::ConfirmPin)) => {
                stage
            }
            step => return Err(invalid(step, name)),
        };
        if pin.trim().is_empty() {
            return Err(CheckoutError::InvalidPin);
        }

        if stage == MpesaStage::PinEntry {
            self.step = CheckoutStep::Simulating(MpesaStage::Processing);
            Ok(vec![self.schedule(Timer::PinProcessing)])
        } else {
            Ok(vec![self.settle(PaymentMethod::Mpesa)])
        }
    }

    fn dismiss(&mut self, name: &'static str) -> Result<Vec<Effect>> {
        match self.step {
            CheckoutStep::Summary => {
                self.step = CheckoutStep::ItemSelection;
                Ok(Vec::new())
            }
            CheckoutStep::MethodChosen(_) | CheckoutStep::Simulating(_) => {
                let effects = self.cancel_pending();
                self.method = None;
                self.phone_number.clear();
                self.step = CheckoutStep::ItemSelection;
                Ok(effects)
            }
            step => Err(invalid(step, name)),
        }
    }

    fn timer_elapsed(&mut self, ticket: u64) -> Vec<Effect> {
        let Some(pending) = self.pending.filter(|p| p.ticket == ticket) else {
            return Vec::new();
        };
        self.pending = None;

        match (pending.timer, self.step) {
            (Timer::StkPush, CheckoutStep::Simulating(MpesaStage::StkPushSent)) => {
                self.step = CheckoutStep::Simulating(MpesaStage::PinEntry);
                Vec::new()
            }
            (Timer::PinProcessing, CheckoutStep::Simulating(MpesaStage::Processing)) => {
                self.step = CheckoutStep::Simulating(MpesaStage::ConfirmPin);
                Vec::new()
            }
            (Timer::BankSettlement, CheckoutStep::MethodChosen(PaymentMethod::Bank)) => {
                vec![self.settle(PaymentMethod::Bank)]
            }
            _ => Vec::new(),
        }
    }

    fn settle(&mut self, method: PaymentMethod) -> Effect {
        self.step = CheckoutStep::Success;
        Effect::Notify(payment::success_notification(self.total(), method))
    }

    fn reset(&mut self) -> Vec<Effect> {
        let effects = self.cancel_pending();
        // The ticket counter survives so stale timers never match a new ticket.
        *self = Self {
            next_ticket: self.next_ticket,
            ..Self::default()
        };
        effects
    }

    fn schedule(&mut self, timer: Timer) -> Effect {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.pending = Some(PendingTimer { ticket, timer });
        Effect::Schedule { ticket, timer }
    }

    fn cancel_pending(&mut self) -> Vec<Effect> {
        self.pending
            .take()
            .map(|p| Effect::Cancel(p.ticket))
            .into_iter()
            .collect()
    }

    fn expect(&self, step: CheckoutStep, name: &'static str) -> Result<()> {
        if self.step == step {
            Ok(())
        } else {
            Err(invalid(self.step, name))
        }
    }

    fn selecting_item(&self, id: &str, name: &'static str) -> Result<&'static CatalogItem> {
        self.expect(CheckoutStep::ItemSelection, name)?;
        let category = self.category.ok_or_else(|| invalid(self.step, name))?;
        catalog::find(category, id).ok_or_else(|| CheckoutError::UnknownItem {
            category,
            id: id.to_string(),
        })
    }
}

fn invalid(step: CheckoutStep, event: &'static str) -> CheckoutError {
    CheckoutError::InvalidTransition { step, event }
}
