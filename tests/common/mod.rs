#![allow(dead_code)]

use campus_pay::application::session::CheckoutSession;
use campus_pay::config::SimulationConfig;
use campus_pay::domain::checkout::CheckoutEvent;
use campus_pay::infrastructure::in_memory::{InMemoryNavigator, InMemoryNotifier};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn session() -> (CheckoutSession, InMemoryNotifier) {
    let notifier = InMemoryNotifier::new();
    let session = CheckoutSession::new(
        SimulationConfig::default(),
        Box::new(notifier.clone()),
        Box::new(InMemoryNavigator::new()),
    );
    (session, notifier)
}

pub async fn dispatch_all(session: &mut CheckoutSession, events: Vec<CheckoutEvent>) {
    for event in events {
        session.dispatch(event).await.unwrap();
    }
}

pub fn write_script(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "action,target,value").unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}
