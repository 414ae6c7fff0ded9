//! Checkout domain: catalog, selection model and the step controller.
//!
//! Everything here is synchronous and free of I/O; timers and notifications
//! are requested as [`checkout::Effect`]s and carried out by the application
//! layer.

pub mod amount;
pub mod catalog;
pub mod checkout;
pub mod notification;
pub mod order;
pub mod payment;
pub mod ports;
pub mod selection;
