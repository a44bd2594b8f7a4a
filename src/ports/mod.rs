//! # Ports
//!
//! Trait contracts between the carousel host and the outside world.
//!
//! - [`Presenter`] - the rendering surface that draws items and the page indicator
//! - [`CarouselListener`] - observers told about page changes

use crate::core::{Frame, ItemVisual};

/// A rendering surface driven by the carousel host
///
/// Implementations own the actual views. Calls arrive synchronously from a
/// single event stream and must not call back into the host.
pub trait Presenter {
    /// Replace all item views with freshly laid-out frames
    fn layout_items(&mut self, frames: &[Frame]);

    /// Size of the scrollable content
    fn set_content_size(&mut self, width: f64, height: f64);

    /// Configure the page indicator
    fn set_page_count(&mut self, count: usize);

    /// Highlight the current page in the indicator
    fn set_current_page(&mut self, page: usize);

    /// Apply per-item visuals, animated over `duration` seconds
    fn apply_visuals(&mut self, visuals: &[ItemVisual], duration: f64);

    /// Move the scroll position, optionally animating
    fn set_offset(&mut self, offset: f64, animated: bool);
}

/// Notified synchronously when the current page changes
///
/// Registration does not keep the listener alive.
pub trait CarouselListener {
    fn page_changed(&self, previous: usize, current: usize);
}
