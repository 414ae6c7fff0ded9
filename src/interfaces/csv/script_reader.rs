use crate::domain::amount::Amount;
use crate::domain::catalog::ServiceCategory;
use crate::domain::checkout::CheckoutEvent;
use crate::domain::payment::PaymentMethod;
use crate::error::{CheckoutError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptAction {
    Category,
    Toggle,
    Amount,
    Describe,
    Proceed,
    Dismiss,
    Method,
    ConfirmBank,
    Phone,
    Pin,
    Wait,
    Reset,
    Leave,
}

/// One raw line of a checkout script: `action, target, value`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ScriptRow {
    pub action: ScriptAction,
    pub target: Option<String>,
    pub value: Option<String>,
}

/// What the runner should do for a script line.
#[derive(Debug, PartialEq, Clone)]
pub enum ScriptStep {
    Dispatch(CheckoutEvent),
    /// Let the pending simulated delay elapse.
    Wait,
}

impl TryFrom<ScriptRow> for ScriptStep {
    type Error = CheckoutError;

    fn try_from(row: ScriptRow) -> Result<Self> {
        let event = match row.action {
            ScriptAction::Wait => return Ok(ScriptStep::Wait),
            ScriptAction::Category => {
                let category = required(&row)?
                    .parse::<ServiceCategory>()
                    .map_err(CheckoutError::ScriptError)?;
                CheckoutEvent::SelectCategory(category)
            }
            ScriptAction::Toggle => CheckoutEvent::ToggleItem(required(&row)?.to_string()),
            ScriptAction::Amount => {
                let item = required(&row)?.to_string();
                let raw = row.value.as_deref().unwrap_or_default();
                let amount = raw
                    .parse::<u64>()
                    .ok()
                    .filter(|value| *value > 0)
                    .map(Amount)
                    .ok_or_else(|| {
                        CheckoutError::ScriptError(format!("'{raw}' is not a positive whole amount"))
                    })?;
                CheckoutEvent::SetCustomAmount { item, amount }
            }
            ScriptAction::Describe => {
                CheckoutEvent::SetDescription(row.target.clone().unwrap_or_default())
            }
            ScriptAction::Proceed => CheckoutEvent::Proceed,
            ScriptAction::Dismiss => CheckoutEvent::Dismiss,
            ScriptAction::Method => {
                let method = required(&row)?
                    .parse::<PaymentMethod>()
                    .map_err(CheckoutError::ScriptError)?;
                CheckoutEvent::ChooseMethod(method)
            }
            ScriptAction::ConfirmBank => CheckoutEvent::ConfirmBankPayment,
            ScriptAction::Phone => CheckoutEvent::SubmitPhone(row.target.clone().unwrap_or_default()),
            ScriptAction::Pin => CheckoutEvent::SubmitPin(row.target.clone().unwrap_or_default()),
            ScriptAction::Reset => CheckoutEvent::Reset,
            ScriptAction::Leave => CheckoutEvent::Leave,
        };
        Ok(ScriptStep::Dispatch(event))
    }
}

fn required(row: &ScriptRow) -> Result<&str> {
    row.target
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| CheckoutError::ScriptError(format!("{:?} needs a target", row.action)))
}

/// Reads checkout scripts from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<ScriptStep>`.
/// Whitespace is trimmed and the `value` column may be omitted.
pub struct ScriptReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScriptReader<R> {
    /// Creates a new `ScriptReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts script lines.
    pub fn steps(self) -> impl Iterator<Item = Result<ScriptStep>> {
        self.reader.into_deserialize::<ScriptRow>().map(|result| {
            result
                .map_err(CheckoutError::from)
                .and_then(ScriptStep::try_from)
        })
    }
}
