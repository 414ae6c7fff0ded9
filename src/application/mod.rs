//! Application layer driving the checkout.
//!
//! This module defines the `CheckoutSession` which owns the checkout state, feeds
//! it events and carries out the effects it requests. Simulated delays run as
//! `tokio` tasks that report back over a channel, keyed by a ticket so that
//! abandoned timers cannot touch a reset session.

pub mod session;
