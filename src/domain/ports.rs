use super::notification::Notification;
use crate::error::Result;
use async_trait::async_trait;

/// Toast surface of the surrounding page.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification) -> Result<()>;
}

/// Routing collaborator used to leave the checkout.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn go_home(&self) -> Result<()>;
}

pub type NotifierBox = Box<dyn Notifier>;
pub type NavigatorBox = Box<dyn Navigator>;
