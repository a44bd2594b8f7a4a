//! # Python Bindings
//!
//! PyO3 bindings for the carousel engine, for prototyping hosts and
//! driving the interaction math from Python test harnesses.
//!
//! ## Python API
//!
//! ```python
//! from carousel_engine import Carousel, CarouselConfig
//!
//! config = CarouselConfig.for_viewport(390.0).with_overlap(30.0)
//! carousel = Carousel(config)
//! carousel.configure(9)          # centres on item 4
//!
//! for visual in carousel.scroll_to(410.0):
//!     print(visual.index, visual.scale, visual.emphasized)
//!
//! snap = carousel.end_drag(0.0, 410.0)
//! target = carousel.select_page(2)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::adapters::presenter::RecordingPresenter;
use crate::core::{CarouselConfig, ConfigError, ItemVisual};
use crate::engine::Carousel as RustCarousel;

fn config_err(e: ConfigError) -> PyErr {
    PyValueError::new_err(format!("{}", e))
}

/// Python wrapper for per-item visuals
#[pyclass(name = "ItemVisual")]
#[derive(Clone)]
pub struct PyItemVisual {
    #[pyo3(get)]
    pub index: usize,

    #[pyo3(get)]
    pub scale: f64,

    #[pyo3(get)]
    pub emphasized: bool,

    #[pyo3(get)]
    pub shadow_opacity: f64,

    #[pyo3(get)]
    pub shadow_radius: f64,

    #[pyo3(get)]
    pub vertical_offset: f64,

    #[pyo3(get)]
    pub z_position: f64,
}

impl From<&ItemVisual> for PyItemVisual {
    fn from(v: &ItemVisual) -> Self {
        Self {
            index: v.index,
            scale: v.scale,
            emphasized: v.emphasized,
            shadow_opacity: v.shadow_opacity,
            shadow_radius: v.shadow_radius,
            vertical_offset: v.vertical_offset,
            z_position: v.z_position,
        }
    }
}

#[pymethods]
impl PyItemVisual {
    fn __repr__(&self) -> String {
        format!(
            "ItemVisual(index={}, scale={:.3}, emphasized={})",
            self.index,
            self.scale,
            if self.emphasized { "True" } else { "False" }
        )
    }
}

/// Python wrapper for carousel configuration
#[pyclass(name = "CarouselConfig")]
#[derive(Clone)]
pub struct PyCarouselConfig {
    inner: CarouselConfig,
}

#[pymethods]
impl PyCarouselConfig {
    #[new]
    fn new(item_width: f64, item_height: f64, viewport_width: f64) -> Self {
        Self {
            inner: CarouselConfig::new(item_width, item_height, viewport_width),
        }
    }

    /// Sign-up screen layout for a screen width
    #[staticmethod]
    fn for_viewport(viewport_width: f64) -> Self {
        Self {
            inner: CarouselConfig::for_viewport(viewport_width),
        }
    }

    fn with_overlap(mut slf: PyRefMut<'_, Self>, overlap: f64) -> PyRefMut<'_, Self> {
        slf.inner.overlap = overlap;
        slf
    }

    fn with_minimum_scale(mut slf: PyRefMut<'_, Self>, minimum_scale: f64) -> PyRefMut<'_, Self> {
        slf.inner.minimum_scale = minimum_scale;
        slf
    }

    fn with_side_padding(mut slf: PyRefMut<'_, Self>, side_padding: f64) -> PyRefMut<'_, Self> {
        slf.inner.side_padding = side_padding;
        slf
    }

    /// Raises ValueError if the configuration cannot be paged
    fn validate(&self) -> PyResult<()> {
        self.inner.validate().map_err(config_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "CarouselConfig(item_width={:.1}, overlap={:.1}, minimum_scale={:.2}, viewport_width={:.1})",
            self.inner.item_width, self.inner.overlap, self.inner.minimum_scale, self.inner.viewport_width
        )
    }
}

/// Carousel interaction engine
///
/// Feed it scroll offsets, drag releases and indicator taps; it returns
/// item visuals and snap targets.
#[pyclass(name = "Carousel", unsendable)]
pub struct PyCarousel {
    inner: RustCarousel<RecordingPresenter>,
}

#[pymethods]
impl PyCarousel {
    #[new]
    fn new(config: &PyCarouselConfig) -> PyResult<Self> {
        let inner = RustCarousel::new(config.inner, RecordingPresenter::with_capacity(256))
            .map_err(config_err)?;
        Ok(Self { inner })
    }

    /// Lay out `item_count` items and centre the middle one
    fn configure(&mut self, item_count: usize) -> PyResult<()> {
        self.inner.configure(item_count).map_err(config_err)
    }

    /// Apply a scroll offset
    ///
    /// Returns:
    ///     List[ItemVisual]: One entry per item
    fn scroll_to(&mut self, offset: f64) -> Vec<PyItemVisual> {
        self.inner.scroll_to(offset).iter().map(PyItemVisual::from).collect()
    }

    /// Snap target for a drag release
    fn end_drag(&self, velocity: f64, proposed_offset: f64) -> f64 {
        self.inner.end_drag(velocity, proposed_offset)
    }

    /// Target offset for a page indicator tap (out-of-range pages clamp)
    fn select_page(&mut self, page: usize) -> f64 {
        self.inner.select_page(page)
    }

    #[getter]
    fn current_page(&self) -> usize {
        self.inner.current_page()
    }

    #[getter]
    fn scroll_offset(&self) -> f64 {
        self.inner.state().scroll_offset()
    }

    #[getter]
    fn content_width(&self) -> f64 {
        self.inner.state().content_width()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Carousel(items={}, page={}, offset={:.1})",
            self.inner.len(),
            self.inner.current_page(),
            self.inner.state().scroll_offset()
        )
    }
}

/// Carousel engine Python module
#[pymodule]
fn carousel_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCarousel>()?;
    m.add_class::<PyCarouselConfig>()?;
    m.add_class::<PyItemVisual>()?;

    m.add("__doc__", "Carousel interaction engine: scroll-to-visual mapping and snapping")?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
