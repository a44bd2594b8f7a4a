//! # Recording Presenter
//!
//! Keeps the last presented values plus a log of every call.
//!
//! Good for:
//! - Testing
//! - Headless hosts that poll state instead of drawing

use std::collections::VecDeque;

use crate::core::{Frame, ItemVisual};
use crate::ports::Presenter;

/// One call received through the Presenter port
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    LayoutItems(usize),
    SetContentSize { width: f64, height: f64 },
    SetPageCount(usize),
    SetCurrentPage(usize),
    ApplyVisuals { count: usize, duration: f64 },
    SetOffset { offset: f64, animated: bool },
}

/// In-memory presenter
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    frames: Vec<Frame>,
    visuals: Vec<ItemVisual>,
    content_size: (f64, f64),
    page_count: usize,
    current_page: usize,
    offset: f64,

    /// Every call in arrival order
    calls: VecDeque<PresenterCall>,

    /// Maximum number of recorded calls (0 = unlimited)
    capacity: usize,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `capacity` calls, dropping the oldest
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn visuals(&self) -> &[ItemVisual] {
        &self.visuals
    }

    pub fn content_size(&self) -> (f64, f64) {
        self.content_size
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn calls(&self) -> &VecDeque<PresenterCall> {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: PresenterCall) {
        if self.capacity > 0 && self.calls.len() >= self.capacity {
            self.calls.pop_front();
        }
        self.calls.push_back(call);
    }
}

impl Presenter for RecordingPresenter {
    fn layout_items(&mut self, frames: &[Frame]) {
        self.frames = frames.to_vec();
        self.visuals.clear();
        self.record(PresenterCall::LayoutItems(frames.len()));
    }

    fn set_content_size(&mut self, width: f64, height: f64) {
        self.content_size = (width, height);
        self.record(PresenterCall::SetContentSize { width, height });
    }

    fn set_page_count(&mut self, count: usize) {
        self.page_count = count;
        self.record(PresenterCall::SetPageCount(count));
    }

    fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
        self.record(PresenterCall::SetCurrentPage(page));
    }

    fn apply_visuals(&mut self, visuals: &[ItemVisual], duration: f64) {
        self.visuals = visuals.to_vec();
        self.record(PresenterCall::ApplyVisuals {
            count: visuals.len(),
            duration,
        });
    }

    fn set_offset(&mut self, offset: f64, animated: bool) {
        self.offset = offset;
        self.record(PresenterCall::SetOffset { offset, animated });
    }
}
