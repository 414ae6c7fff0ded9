use crate::domain::notification::Notification;
use crate::domain::ports::{Navigator, Notifier};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A notifier that keeps every toast it receives.
///
/// Uses `Arc<RwLock<Vec<Notification>>>` so a clone handed to the session and
/// the one kept by the caller observe the same log. Meant for tests and for
/// building the CLI report.
#[derive(Default, Clone)]
pub struct InMemoryNotifier {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotifier {
    /// Creates a new, empty in-memory notifier.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, notification: Notification) -> Result<()> {
        let mut notifications = self.notifications.write().await;
        notifications.push(notification);
        Ok(())
    }
}

/// A navigator that only counts how often the checkout was left.
#[derive(Default, Clone)]
pub struct InMemoryNavigator {
    visits: Arc<RwLock<usize>>,
}

impl InMemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn visits(&self) -> usize {
        *self.visits.read().await
    }
}

#[async_trait]
impl Navigator for InMemoryNavigator {
    async fn go_home(&self) -> Result<()> {
        *self.visits.write().await += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_notifier_shares_log_between_clones() {
        let notifier = InMemoryNotifier::new();
        let handle = notifier.clone();

        notifier
            .notify(Notification::info("Paid", "You have paid Ksh 150 via M-Pesa."))
            .await
            .unwrap();

        let sent = handle.notifications().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "Paid");
    }

    #[tokio::test]
    async fn test_in_memory_navigator_counts_visits() {
        let navigator = InMemoryNavigator::new();
        navigator.go_home().await.unwrap();
        navigator.clone().go_home().await.unwrap();
        assert_eq!(navigator.visits().await, 2);
    }
}
