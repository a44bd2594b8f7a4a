//! # Carousel State
//!
//! The interaction engine proper. Every operation is a pure function of the
//! current state and one input; nothing here touches a rendering surface.
//!
//! ```text
//!   offset ──► on_scroll ──► (state', [ItemVisual])
//!   release ─► on_drag_end ─► snap offset (item aligned)
//!   tap ─────► on_page_indicator_select ─► target offset
//! ```

use std::sync::Arc;

use log::{debug, trace};

use super::config::{CarouselConfig, ConfigResult};
use super::item::{Frame, Item, ItemVisual};

/// Scroll position, laid-out items and the derived page for one carousel
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    config: CarouselConfig,
    items: Arc<[Item]>,
    scroll_offset: f64,
    current_page: usize,
}

impl CarouselState {
    /// Lay out `item_count` items and centre the middle one
    ///
    /// The middle item is `item_count / 2`, so an even count favours the
    /// right-hand of the two central items.
    pub fn configure(item_count: usize, config: CarouselConfig) -> ConfigResult<Self> {
        config.validate()?;

        let items: Arc<[Item]> = (0..item_count)
            .map(|index| Item::layout(index, &config))
            .collect();

        let middle = item_count / 2;
        let state = Self {
            scroll_offset: middle as f64 * config.step(),
            current_page: middle,
            config,
            items,
        };

        debug!(
            "configured carousel: {} items, middle page {}, content width {}",
            item_count,
            middle,
            state.content_width()
        );

        Ok(state)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn item_frame(&self, index: usize) -> Option<Frame> {
        self.items.get(index).map(|item| item.frame)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total scrollable width including both side paddings
    pub fn content_width(&self) -> f64 {
        let padding = 2.0 * self.config.side_padding;
        match self.items.len() {
            0 => padding,
            n => self.config.step() * (n - 1) as f64 + self.config.item_width + padding,
        }
    }

    /// Largest offset the carousel may rest at
    pub fn max_offset(&self) -> f64 {
        (self.content_width() - self.config.viewport_width).max(0.0)
    }

    /// Clamp an offset into the resting range `[0, max_offset]`
    pub fn clamp_to_rest(&self, offset: f64) -> f64 {
        offset.max(0.0).min(self.max_offset())
    }

    /// Offset that aligns `page` with the viewport, clamping out-of-range pages
    pub fn offset_for_page(&self, page: usize) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        page.min(self.last_page()) as f64 * self.config.step()
    }

    /// Nearest page for an offset, clamped to the item range
    pub fn page_for_offset(&self, offset: f64) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        let raw = (offset / self.config.step()).round();
        raw.max(0.0).min(self.last_page() as f64) as usize
    }

    fn last_page(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    /// Visuals for the state's own offset
    pub fn visuals(&self) -> Vec<ItemVisual> {
        self.visuals_at(self.scroll_offset)
    }

    fn visuals_at(&self, offset: f64) -> Vec<ItemVisual> {
        let center = offset + self.config.viewport_width / 2.0;
        self.items
            .iter()
            .map(|item| {
                let distance = (center - item.center_x()).abs();
                ItemVisual::at_distance(item.index, distance, &self.config)
            })
            .collect()
    }

    /// Map a new scroll offset to per-item visuals and the current page
    ///
    /// Any offset is accepted, including over-scroll past either end.
    pub fn on_scroll(&self, new_offset: f64) -> (Self, Vec<ItemVisual>) {
        if self.items.is_empty() {
            let state = Self {
                scroll_offset: 0.0,
                current_page: 0,
                ..self.clone()
            };
            return (state, Vec::new());
        }

        let visuals = self.visuals_at(new_offset);
        let state = Self {
            scroll_offset: new_offset,
            current_page: self.page_for_offset(new_offset),
            ..self.clone()
        };

        trace!(
            "scroll to {:.1}: page {}",
            new_offset,
            state.current_page
        );

        (state, visuals)
    }

    /// Snap target for a drag released with the toolkit's decelerated
    /// `proposed_offset`
    ///
    /// Release velocity is accepted but does not influence the result.
    pub fn on_drag_end(&self, _velocity: f64, proposed_offset: f64) -> f64 {
        let page = self.page_for_offset(proposed_offset);
        let snap = self.offset_for_page(page);
        debug!(
            "drag released at {:.1}, snapping to page {} ({:.1})",
            proposed_offset, page, snap
        );
        snap
    }

    /// Target offset for a page indicator tap
    pub fn on_page_indicator_select(&self, page_index: usize) -> f64 {
        if !self.items.is_empty() && page_index > self.last_page() {
            debug!(
                "page {} out of range for {} items, clamping",
                page_index,
                self.items.len()
            );
        }
        self.offset_for_page(page_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ConfigError;

    fn spec_config() -> CarouselConfig {
        CarouselConfig::new(300.0, 200.0, 300.0).with_overlap(30.0)
    }

    fn create_test_state(count: usize) -> CarouselState {
        CarouselState::configure(count, spec_config()).unwrap()
    }

    #[test]
    fn test_configure_centers_middle_item() {
        let state = create_test_state(9);

        assert_eq!(state.current_page(), 4);
        assert_eq!(state.scroll_offset(), 4.0 * 270.0);
        assert_eq!(state.item_count(), 9);
        assert_eq!(state.item_frame(4).map(|f| f.x), Some(4.0 * 270.0 + 60.0));
        assert!(state.item_frame(9).is_none());
    }

    #[test]
    fn test_configure_even_count_picks_right_middle() {
        let state = create_test_state(4);

        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_configure_rejects_degenerate_spacing() {
        let config = spec_config().with_overlap(300.0);

        let result = CarouselState::configure(3, config);

        assert!(matches!(result, Err(ConfigError::DegenerateSpacing { .. })));
    }

    #[test]
    fn test_default_config_centers_middle_item_in_viewport() {
        let state = CarouselState::configure(5, CarouselConfig::default()).unwrap();
        let visuals = state.visuals();

        assert_eq!(visuals[2].distance, 0.0);
        assert_eq!(visuals[2].scale, 1.0);
        assert!(visuals[2].emphasized);
        assert!(visuals.iter().filter(|v| v.emphasized).count() == 1);
    }

    #[test]
    fn test_content_width() {
        let state = create_test_state(3);

        // 270 * 2 + 300 + 2 * 60
        assert_eq!(state.content_width(), 960.0);
        assert_eq!(state.max_offset(), 660.0);
        assert_eq!(state.clamp_to_rest(-40.0), 0.0);
        assert_eq!(state.clamp_to_rest(900.0), 660.0);
    }

    #[test]
    fn test_on_scroll_updates_page() {
        let state = create_test_state(5);

        let (next, visuals) = state.on_scroll(280.0);

        assert_eq!(next.current_page(), 1);
        assert_eq!(next.scroll_offset(), 280.0);
        assert_eq!(visuals.len(), 5);
        // Input state untouched
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_on_scroll_scales_off_center_items() {
        let state = create_test_state(5);

        // Viewport centre 480 + 150 = 630
        let (_, visuals) = state.on_scroll(480.0);

        // Item 1 centre: 270 + 60 + 150 = 480, distance 150
        assert_eq!(visuals[1].distance, 150.0);
        assert!((visuals[1].scale - (1.0 - (150.0 / 300.0) * 0.3)).abs() < 1e-9);

        // Item 2 centre: 540 + 60 + 150 = 750, distance 120
        assert_eq!(visuals[2].distance, 120.0);
        assert!((visuals[2].scale - 0.88).abs() < 1e-9);

        // Item 4 is far enough to hit the floor
        assert_eq!(visuals[4].scale, 0.8);
    }

    #[test]
    fn test_on_scroll_overscroll_clamps_page() {
        let state = create_test_state(3);

        assert_eq!(state.on_scroll(-500.0).0.current_page(), 0);
        assert_eq!(state.on_scroll(10_000.0).0.current_page(), 2);
    }

    #[test]
    fn test_on_scroll_is_idempotent() {
        let state = create_test_state(7);

        let (a_state, a) = state.on_scroll(123.4);
        let (b_state, b) = state.on_scroll(123.4);

        assert_eq!(a, b);
        assert_eq!(a_state, b_state);
    }

    #[test]
    fn test_drag_end_snaps_to_nearest() {
        let state = create_test_state(5);

        // round(410 / 270) = 2
        assert_eq!(state.on_drag_end(0.0, 410.0), 540.0);
        assert_eq!(state.on_drag_end(-3.5, 410.0), 540.0);
    }

    #[test]
    fn test_drag_end_clamps_to_item_range() {
        let state = create_test_state(3);

        assert_eq!(state.on_drag_end(0.0, -200.0), 0.0);
        assert_eq!(state.on_drag_end(0.0, 5000.0), 540.0);
    }

    #[test]
    fn test_page_indicator_select_clamps() {
        let state = create_test_state(3);

        assert_eq!(state.on_page_indicator_select(1), 270.0);
        assert_eq!(state.on_page_indicator_select(5), 2.0 * 270.0);
    }

    #[test]
    fn test_empty_carousel() {
        let state = create_test_state(0);

        assert_eq!(state.current_page(), 0);
        assert_eq!(state.scroll_offset(), 0.0);
        assert_eq!(state.content_width(), 120.0);

        let (next, visuals) = state.on_scroll(75.0);
        assert!(visuals.is_empty());
        assert_eq!(next.scroll_offset(), 0.0);
        assert_eq!(next.current_page(), 0);

        assert_eq!(state.on_drag_end(10.0, 400.0), 0.0);
        assert_eq!(state.on_page_indicator_select(3), 0.0);
    }

    #[test]
    fn test_single_item() {
        let state = create_test_state(1);

        assert_eq!(state.current_page(), 0);
        assert_eq!(state.scroll_offset(), 0.0);
        assert_eq!(state.on_drag_end(0.0, 200.0), 0.0);
    }
}
