use crate::domain::amount::Amount;
use crate::domain::catalog::ServiceCategory;
use crate::domain::checkout::{CheckoutState, CheckoutStep};
use crate::domain::notification::Notification;
use crate::domain::order::OrderLine;
use crate::domain::payment::PaymentMethod;
use crate::error::Result;
use crate::interfaces::screen;
use serde::Serialize;
use std::io::Write;

/// Snapshot of a session printed by the CLI once a script has run.
#[derive(Debug, Serialize, PartialEq)]
pub struct SessionReport {
    pub step: CheckoutStep,
    pub category: Option<ServiceCategory>,
    pub items: Vec<OrderLine>,
    pub description: String,
    pub total: Amount,
    pub method: Option<PaymentMethod>,
    pub screen: Vec<String>,
    pub notifications: Vec<Notification>,
}

impl SessionReport {
    pub fn new(state: &CheckoutState, notifications: Vec<Notification>) -> Self {
        let order = state.order();
        Self {
            step: state.step(),
            category: state.category(),
            items: order.map(|o| o.lines).unwrap_or_default(),
            description: state.description().trim().to_string(),
            total: state.total(),
            method: state.method(),
            screen: screen::render(state),
            notifications,
        }
    }
}

/// Writes session reports as pretty-printed JSON.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report(&mut self, report: &SessionReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::CheckoutEvent;

    #[test]
    fn test_report_serializes_selection() {
        let mut state = CheckoutState::new();
        state
            .apply(CheckoutEvent::SelectCategory(ServiceCategory::Cafeteria))
            .unwrap();
        state
            .apply(CheckoutEvent::ToggleItem("breakfast".to_string()))
            .unwrap();

        let mut out = Vec::new();
        ReportWriter::new(&mut out)
            .write_report(&SessionReport::new(&state, Vec::new()))
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["step"], "itemSelection");
        assert_eq!(json["category"], "cafeteria");
        assert_eq!(json["total"], 150);
        assert_eq!(json["items"][0]["item"]["id"], "breakfast");
        assert_eq!(json["items"][0]["amount"], 150);
        assert!(json["method"].is_null());
    }
}
