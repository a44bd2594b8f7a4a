//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - Configuration is applied
//! - Platform events are forwarded to the pure state functions
//! - Results are pushed to a Presenter and to listeners

mod carousel;

pub use carousel::Carousel;
