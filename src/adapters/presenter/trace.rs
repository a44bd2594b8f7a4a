//! # Trace Presenter
//!
//! Presenter with no surface: every call becomes a log line. Useful as a
//! stand-in while the real view layer is not wired up.

use log::{info, trace};

use crate::core::{Frame, ItemVisual};
use crate::ports::Presenter;

/// Log-only presenter
#[derive(Debug, Clone)]
pub struct TracePresenter {
    target: String,
}

impl Default for TracePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl TracePresenter {
    pub fn new() -> Self {
        Self::named("carousel")
    }

    /// Prefix log lines with `name`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            target: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.target
    }
}

impl Presenter for TracePresenter {
    fn layout_items(&mut self, frames: &[Frame]) {
        info!("[{}] layout {} items", self.target, frames.len());
        for (index, frame) in frames.iter().enumerate() {
            trace!(
                "[{}] item {} at x={:.1} y={:.1} {}x{}",
                self.target,
                index,
                frame.x,
                frame.y,
                frame.width,
                frame.height
            );
        }
    }

    fn set_content_size(&mut self, width: f64, height: f64) {
        info!("[{}] content size {:.1}x{:.1}", self.target, width, height);
    }

    fn set_page_count(&mut self, count: usize) {
        info!("[{}] page count {}", self.target, count);
    }

    fn set_current_page(&mut self, page: usize) {
        trace!("[{}] current page {}", self.target, page);
    }

    fn apply_visuals(&mut self, visuals: &[ItemVisual], duration: f64) {
        match visuals.iter().find(|v| v.emphasized) {
            Some(v) => trace!(
                "[{}] {} visuals over {}s, item {} emphasized",
                self.target,
                visuals.len(),
                duration,
                v.index
            ),
            None => trace!("[{}] {} visuals over {}s", self.target, visuals.len(), duration),
        }
    }

    fn set_offset(&mut self, offset: f64, animated: bool) {
        info!(
            "[{}] offset {:.1}{}",
            self.target,
            offset,
            if animated { " (animated)" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CarouselConfig;
    use crate::engine::Carousel;

    #[test]
    fn test_trace_presenter_drives_carousel() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut carousel =
            Carousel::new(CarouselConfig::default(), TracePresenter::named("signup")).unwrap();
        carousel.configure(3).unwrap();
        carousel.scroll_to(0.0);
        carousel.select_page(2);

        assert_eq!(carousel.presenter().name(), "signup");
        assert_eq!(carousel.current_page(), 0);
    }
}
