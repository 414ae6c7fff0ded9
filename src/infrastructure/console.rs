use crate::domain::notification::{Notification, Variant};
use crate::domain::ports::{Navigator, Notifier};
use crate::error::Result;
use async_trait::async_trait;
use std::io::Write;
use tracing::info;

/// Prints toasts to stderr, one per line.
#[derive(Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }

    fn render(notification: &Notification) -> String {
        let marker = match notification.variant {
            Variant::Default => "✓",
            Variant::Destructive => "✗",
        };
        format!(
            "{marker} {}: {}",
            notification.title, notification.description
        )
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, notification: Notification) -> Result<()> {
        let line = Self::render(&notification);
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{line}")?;
        Ok(())
    }
}

/// Logs navigation requests; the CLI has no page to go back to.
#[derive(Default, Clone, Copy)]
pub struct LoggingNavigator;

#[async_trait]
impl Navigator for LoggingNavigator {
    async fn go_home(&self) -> Result<()> {
        info!("navigating to /");
        Ok(())
    }
}
