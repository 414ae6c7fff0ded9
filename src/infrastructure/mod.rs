//! Adapters for the checkout's outbound ports.

pub mod console;
pub mod in_memory;
