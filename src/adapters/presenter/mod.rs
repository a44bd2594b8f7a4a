//! # Presenter Adapters
//!
//! Implementations of the Presenter port.
//!
//! Available adapters:
//! - `RecordingPresenter` - In-memory record of every call (headless, tests)
//! - `TracePresenter` - Writes every call to the log

mod memory;
mod trace;

pub use memory::{PresenterCall, RecordingPresenter};
pub use trace::TracePresenter;
