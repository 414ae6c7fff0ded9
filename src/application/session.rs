use crate::config::SimulationConfig;
use crate::domain::checkout::{CheckoutEvent, CheckoutState, Effect};
use crate::domain::ports::{NavigatorBox, NotifierBox};
use crate::error::Result;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// A single student's checkout.
///
/// `CheckoutSession` applies events to the [`CheckoutState`] one at a time and
/// performs the resulting effects: raising notifications, navigating away and
/// scheduling or cancelling the simulated payment delays.
pub struct CheckoutSession {
    state: CheckoutState,
    config: SimulationConfig,
    notifier: NotifierBox,
    navigator: NavigatorBox,
    timers: HashMap<u64, JoinHandle<()>>,
    elapsed_tx: mpsc::UnboundedSender<u64>,
    elapsed_rx: mpsc::UnboundedReceiver<u64>,
}

impl CheckoutSession {
    /// Creates a new `CheckoutSession` in the browsing step.
    ///
    /// # Arguments
    ///
    /// * `config` - Delays used by the payment simulators.
    /// * `notifier` - Where success and validation toasts go.
    /// * `navigator` - Used by the "Back to Home" action.
    pub fn new(config: SimulationConfig, notifier: NotifierBox, navigator: NavigatorBox) -> Self {
        let (elapsed_tx, elapsed_rx) = mpsc::unbounded_channel();
        Self {
            state: CheckoutState::new(),
            config,
            notifier,
            navigator,
            timers: HashMap::new(),
            elapsed_tx,
            elapsed_rx,
        }
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Applies a user event.
    ///
    /// Validation failures are reported through the notifier and leave the
    /// state untouched; only misuse (unknown items, events that make no sense
    /// on the current screen) is returned as an error.
    pub async fn dispatch(&mut self, event: CheckoutEvent) -> Result<()> {
        debug!(event = event.name(), step = %self.state.step(), "dispatching");
        match self.state.apply(event) {
            Ok(effects) => self.run_effects(effects).await,
            Err(e) => match e.notification() {
                Some(notification) => {
                    warn!(step = %self.state.step(), "rejected: {}", e);
                    self.notifier.notify(notification).await
                }
                None => Err(e),
            },
        }
    }

    /// Waits for the pending simulated delay, if any, and applies it.
    ///
    /// Returns `false` when nothing was pending.
    pub async fn wait_for_timer(&mut self) -> Result<bool> {
        while let Some(pending) = self.state.pending() {
            let Some(ticket) = self.elapsed_rx.recv().await else {
                return Ok(false);
            };
            self.timers.remove(&ticket);
            if ticket != pending.ticket {
                debug!(ticket, "discarding stale timer");
                continue;
            }
            debug!(ticket, timer = ?pending.timer, "timer elapsed");
            self.dispatch(CheckoutEvent::TimerElapsed(ticket)).await?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Waits until no simulated delay is pending anymore.
    pub async fn settle(&mut self) -> Result<()> {
        while self.wait_for_timer().await? {}
        Ok(())
    }

    async fn run_effects(&mut self, effects: Vec<Effect>) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::Notify(notification) => {
                    info!(title = %notification.title, "notifying");
                    self.notifier.notify(notification).await?;
                }
                Effect::Schedule { ticket, timer } => {
                    let delay = self.config.delay_for(timer);
                    debug!(ticket, ?timer, ?delay, "scheduling timer");
                    let tx = self.elapsed_tx.clone();
                    let handle = tokio::spawn(async move {
                        tokio::time::sleep(delay).await;
                        // The session may be gone by now.
                        let _ = tx.send(ticket);
                    });
                    self.timers.insert(ticket, handle);
                }
                Effect::Cancel(ticket) => {
                    if let Some(handle) = self.timers.remove(&ticket) {
                        debug!(ticket, "cancelling timer");
                        handle.abort();
                    }
                }
                Effect::NavigateHome => {
                    info!("leaving checkout");
                    self.navigator.go_home().await?;
                }
            }
        }
        Ok(())
    }
}

impl Drop for CheckoutSession {
    fn drop(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }
}
