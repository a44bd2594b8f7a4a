//! # Carousel Host
//!
//! The thin adapter between a platform's scroll events and the pure
//! interaction engine.
//!
//! This struct wires together:
//! - The single `CarouselState`
//! - A rendering surface (Presenter port)
//! - Page change listeners
//!
//! Platform delegate callbacks map onto explicit methods:
//! scroll events call [`Carousel::scroll_to`], drag release calls
//! [`Carousel::end_drag`], indicator taps call [`Carousel::select_page`].

use std::rc::{Rc, Weak};

use log::debug;

use crate::core::{CarouselConfig, CarouselState, ConfigResult, ItemVisual};
use crate::ports::{CarouselListener, Presenter};

/// A carousel bound to a presenter
pub struct Carousel<P: Presenter> {
    /// Current interaction state
    state: CarouselState,

    /// Rendering surface
    presenter: P,

    /// Weakly held page listeners
    listeners: Vec<Weak<dyn CarouselListener>>,
}

impl<P: Presenter> Carousel<P> {
    /// Create an empty carousel with the given configuration
    ///
    /// Fails if the configuration cannot be paged.
    pub fn new(config: CarouselConfig, presenter: P) -> ConfigResult<Self> {
        let state = CarouselState::configure(0, config)?;
        Ok(Self {
            state,
            presenter,
            listeners: Vec::new(),
        })
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn config(&self) -> &CarouselConfig {
        self.state.config()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn len(&self) -> usize {
        self.state.item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    /// Replace the item set and jump to the middle item
    ///
    /// The previous state is discarded entirely.
    pub fn configure(&mut self, item_count: usize) -> ConfigResult<()> {
        let previous = self.state.current_page();
        self.state = CarouselState::configure(item_count, *self.state.config())?;

        let frames: Vec<_> = self.state.items().iter().map(|item| item.frame).collect();
        self.presenter.layout_items(&frames);
        self.presenter
            .set_content_size(self.state.content_width(), self.state.config().item_height);
        self.presenter.set_page_count(item_count);
        self.presenter.set_current_page(self.state.current_page());
        self.presenter.set_offset(self.state.scroll_offset(), false);

        let visuals = self.state.visuals();
        self.present(&visuals);

        self.notify(previous);
        Ok(())
    }

    /// Replace the configuration, keeping the item count
    pub fn reconfigure(&mut self, config: CarouselConfig) -> ConfigResult<()> {
        let count = self.state.item_count();
        self.state = CarouselState::configure(0, config)?;
        self.configure(count)
    }

    // ========================================================================
    // EVENTS
    // ========================================================================

    /// Scroll position changed
    pub fn scroll_to(&mut self, offset: f64) -> Vec<ItemVisual> {
        let previous = self.state.current_page();
        let (state, visuals) = self.state.on_scroll(offset);
        self.state = state;

        self.present(&visuals);
        self.notify(previous);
        visuals
    }

    /// Drag released; returns the offset the toolkit should decelerate to
    pub fn end_drag(&self, velocity: f64, proposed_offset: f64) -> f64 {
        self.state.on_drag_end(velocity, proposed_offset)
    }

    /// Page indicator tapped; animates to the page and returns its offset
    pub fn select_page(&mut self, page: usize) -> f64 {
        let target = self.state.on_page_indicator_select(page);
        self.presenter.set_offset(target, true);
        target
    }

    // ========================================================================
    // LISTENERS
    // ========================================================================

    /// Register a page listener without taking ownership of it
    pub fn add_listener(&mut self, listener: &Rc<dyn CarouselListener>) {
        self.listeners.retain(|l| l.strong_count() > 0);
        self.listeners.push(Rc::downgrade(listener));
    }

    /// Number of listeners still alive
    pub fn listener_count(&self) -> usize {
        self.listeners.iter().filter(|l| l.strong_count() > 0).count()
    }

    fn present(&mut self, visuals: &[ItemVisual]) {
        let duration = self.state.config().emphasis.animation_duration;
        self.presenter.apply_visuals(visuals, duration);
        self.presenter.set_current_page(self.state.current_page());
    }

    fn notify(&mut self, previous: usize) {
        let current = self.state.current_page();
        if previous == current {
            return;
        }

        debug!("page changed {} -> {}", previous, current);
        self.listeners.retain(|weak| match weak.upgrade() {
            Some(listener) => {
                listener.page_changed(previous, current);
                true
            }
            None => false,
        });
    }
}
