//! # Adapters
//!
//! Swappable implementations of port traits.
//!
//! - Presenter adapters: Recording (in-memory), Trace (log only)
//! - Python bindings (when enabled)
//!
//! A real view layer implements `Presenter` the same way these do.

pub mod presenter;

#[cfg(feature = "python")]
pub mod python;
