//! Simulation timing configuration

use crate::domain::checkout::Timer;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delays used by the simulated payment flows, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Time for the STK push to "reach" the phone
    pub stk_push_delay_ms: u64,

    /// Spinner shown between the two M-Pesa PIN dialogs
    pub pin_processing_delay_ms: u64,

    /// Delay after "I Have Made the Payment"
    pub bank_settlement_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            stk_push_delay_ms: 3000,
            pin_processing_delay_ms: 2000,
            bank_settlement_delay_ms: 1000,
        }
    }
}

impl SimulationConfig {
    /// All delays set to zero, for scripted runs.
    pub fn instant() -> Self {
        Self {
            stk_push_delay_ms: 0,
            pin_processing_delay_ms: 0,
            bank_settlement_delay_ms: 0,
        }
    }

    pub fn delay_for(&self, timer: Timer) -> Duration {
        let ms = match timer {
            Timer::StkPush => self.stk_push_delay_ms,
            Timer::PinProcessing => self.pin_processing_delay_ms,
            Timer::BankSettlement => self.bank_settlement_delay_ms,
        };
        Duration::from_millis(ms)
    }
}
