//! # Carousel Engine
//!
//! Interaction model for an auto-centering, overlapping image carousel.
//!
//! Turns a continuous horizontal scroll offset into per-item emphasis
//! (scale, shadow, lift, draw order) and a discrete current page, and
//! snaps drag releases to the nearest item.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CAROUSEL ENGINE                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure math, no I/O)                                   │
//! │    CarouselConfig, Item, ItemVisual, CarouselState          │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Presenter, CarouselListener                              │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Presenter: Recording, Trace                              │
//! │    API: Python bindings                                      │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Carousel - forwards platform events, owns the state      │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use carousel_engine::{Carousel, CarouselConfig, RecordingPresenter};
//!
//! let mut carousel = Carousel::new(CarouselConfig::default(), RecordingPresenter::new()).unwrap();
//! carousel.configure(5).unwrap();
//! assert_eq!(carousel.current_page(), 2);
//!
//! // Toolkit reports a drag release heading for offset 410
//! let snap = carousel.end_drag(0.0, 410.0);
//! assert_eq!(snap, 480.0);
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure math, no I/O
/// Contains: CarouselConfig, Item, ItemVisual, CarouselState
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Presenter trait, CarouselListener trait
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: presenter, python submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: Carousel host struct
pub mod engine;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{CarouselState, Frame, Item, ItemVisual};
pub use crate::core::config::{CarouselConfig, ConfigError, ConfigResult, EmphasisStyle};

// Port traits
pub use crate::ports::{CarouselListener, Presenter};

// Adapters
pub use crate::adapters::presenter::{PresenterCall, RecordingPresenter, TracePresenter};

// Engine
pub use crate::engine::Carousel;
