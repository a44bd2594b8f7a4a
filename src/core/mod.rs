//! # Core
//!
//! Pure carousel math, no presentation and no I/O.
//!
//! - [`CarouselConfig`] - geometry and emphasis settings
//! - [`Item`] - an item frame at its fixed position
//! - [`ItemVisual`] - scale, shadow and lift for one item at one offset
//! - [`CarouselState`] - the interaction engine operations

pub mod config;
mod item;
mod state;

pub use config::{CarouselConfig, ConfigError, ConfigResult, EmphasisStyle};
pub use item::{Frame, Item, ItemVisual};
pub use state::CarouselState;
