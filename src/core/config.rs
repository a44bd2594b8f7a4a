//! # Configuration
//!
//! Geometry and emphasis settings for one carousel instance.
//!
//! Defaults reproduce the sign-up screen carousel: cards 60pt narrower
//! than the screen on each side, 250pt tall, overlapping by 30pt, shrinking
//! to 80% away from the centre.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reference screen width the defaults are derived from.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 390.0;

/// Errors raised when a configuration cannot produce a usable carousel
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("item spacing is degenerate: width {item_width} minus overlap {overlap} must be positive")]
    DegenerateSpacing { item_width: f64, overlap: f64 },

    #[error("overlap must not be negative, got {0}")]
    NegativeOverlap(f64),

    #[error("minimum scale must be in (0, 1], got {0}")]
    InvalidMinimumScale(f64),

    #[error("{field} must be positive, got {value}")]
    NonPositiveDimension { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("emphasis threshold must be positive, got {0}")]
    InvalidThreshold(f64),

    #[error("scale falloff must not be negative, got {0}")]
    NegativeFalloff(f64),

    #[error("animation duration must not be negative, got {0}")]
    NegativeDuration(f64),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// How the item nearest the viewport centre is lifted out of the row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmphasisStyle {
    /// Scale lost per full viewport width of distance from the centre
    pub scale_falloff: f64,

    /// Items closer than this to the viewport centre are emphasized
    pub threshold: f64,

    /// Upward shift applied to an emphasized item
    pub lift: f64,

    pub shadow_opacity: f64,
    pub shadow_radius: f64,
    pub emphasized_shadow_opacity: f64,
    pub emphasized_shadow_radius: f64,

    /// Vertical shadow offset, shared by both states
    pub shadow_offset_y: f64,

    /// Seconds the presenter should take to apply a visual change
    pub animation_duration: f64,
}

impl Default for EmphasisStyle {
    fn default() -> Self {
        Self {
            scale_falloff: 0.3,
            threshold: 50.0,
            lift: 10.0,
            shadow_opacity: 0.2,
            shadow_radius: 8.0,
            emphasized_shadow_opacity: 0.4,
            emphasized_shadow_radius: 12.0,
            shadow_offset_y: 2.0,
            animation_duration: 0.3,
        }
    }
}

/// Carousel configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub item_width: f64,
    pub item_height: f64,

    /// Horizontal amount adjacent item frames overlap
    pub overlap: f64,

    /// Floor for the distance-based scale
    pub minimum_scale: f64,

    pub viewport_width: f64,

    /// Leading inset of the first item, also added after the last one
    pub side_padding: f64,

    /// Vertical inset of every item inside the scroll area
    pub item_top: f64,

    pub emphasis: EmphasisStyle,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::for_viewport(DEFAULT_VIEWPORT_WIDTH)
    }
}

impl CarouselConfig {
    /// Create a configuration with explicit item and viewport geometry
    pub fn new(item_width: f64, item_height: f64, viewport_width: f64) -> Self {
        Self {
            item_width,
            item_height,
            overlap: 30.0,
            minimum_scale: 0.8,
            viewport_width,
            side_padding: 60.0,
            item_top: 15.0,
            emphasis: EmphasisStyle::default(),
        }
    }

    /// The sign-up screen layout for a given screen width
    pub fn for_viewport(viewport_width: f64) -> Self {
        Self::new(viewport_width - 120.0, 250.0, viewport_width)
    }

    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap;
        self
    }

    pub fn with_minimum_scale(mut self, minimum_scale: f64) -> Self {
        self.minimum_scale = minimum_scale;
        self
    }

    pub fn with_side_padding(mut self, side_padding: f64) -> Self {
        self.side_padding = side_padding;
        self
    }

    pub fn with_item_top(mut self, item_top: f64) -> Self {
        self.item_top = item_top;
        self
    }

    pub fn with_emphasis(mut self, emphasis: EmphasisStyle) -> Self {
        self.emphasis = emphasis;
        self
    }

    /// Distance between the leading edges of adjacent items
    pub fn step(&self) -> f64 {
        self.item_width - self.overlap
    }

    /// Check that this configuration lays out and pages without dividing by zero
    pub fn validate(&self) -> ConfigResult<()> {
        let finite = [
            ("item_width", self.item_width),
            ("item_height", self.item_height),
            ("overlap", self.overlap),
            ("minimum_scale", self.minimum_scale),
            ("viewport_width", self.viewport_width),
            ("side_padding", self.side_padding),
            ("item_top", self.item_top),
            ("emphasis.scale_falloff", self.emphasis.scale_falloff),
            ("emphasis.threshold", self.emphasis.threshold),
            ("emphasis.lift", self.emphasis.lift),
            ("emphasis.shadow_opacity", self.emphasis.shadow_opacity),
            ("emphasis.shadow_radius", self.emphasis.shadow_radius),
            ("emphasis.emphasized_shadow_opacity", self.emphasis.emphasized_shadow_opacity),
            ("emphasis.emphasized_shadow_radius", self.emphasis.emphasized_shadow_radius),
            ("emphasis.shadow_offset_y", self.emphasis.shadow_offset_y),
            ("emphasis.animation_duration", self.emphasis.animation_duration),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }

        for (field, value) in [
            ("item_width", self.item_width),
            ("item_height", self.item_height),
            ("viewport_width", self.viewport_width),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension { field, value });
            }
        }

        if self.overlap < 0.0 {
            return Err(ConfigError::NegativeOverlap(self.overlap));
        }

        if self.step() <= 0.0 {
            return Err(ConfigError::DegenerateSpacing {
                item_width: self.item_width,
                overlap: self.overlap,
            });
        }

        if !(self.minimum_scale > 0.0 && self.minimum_scale <= 1.0) {
            return Err(ConfigError::InvalidMinimumScale(self.minimum_scale));
        }

        let style = &self.emphasis;
        if style.threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(style.threshold));
        }
        if style.scale_falloff < 0.0 {
            return Err(ConfigError::NegativeFalloff(style.scale_falloff));
        }
        if style.animation_duration < 0.0 {
            return Err(ConfigError::NegativeDuration(style.animation_duration));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CarouselState;

    #[test]
    fn test_default_matches_signup_screen() {
        let config = CarouselConfig::default();

        assert_eq!(config.item_width, 270.0);
        assert_eq!(config.item_height, 250.0);
        assert_eq!(config.overlap, 30.0);
        assert_eq!(config.step(), 240.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overlap_equal_to_width_rejected() {
        let config = CarouselConfig::new(300.0, 200.0, 300.0).with_overlap(300.0);

        match config.validate() {
            Err(ConfigError::DegenerateSpacing { item_width, overlap }) => {
                assert_eq!(item_width, 300.0);
                assert_eq!(overlap, 300.0);
            }
            other => panic!("Expected DegenerateSpacing, got {:?}", other),
        }
    }

    #[test]
    fn test_minimum_scale_bounds() {
        let base = CarouselConfig::new(300.0, 200.0, 300.0);

        assert!(base.with_minimum_scale(1.0).validate().is_ok());
        assert!(matches!(
            base.with_minimum_scale(0.0).validate(),
            Err(ConfigError::InvalidMinimumScale(_))
        ));
        assert!(matches!(
            base.with_minimum_scale(1.5).validate(),
            Err(ConfigError::InvalidMinimumScale(_))
        ));
    }

    #[test]
    fn test_rejects_negative_overlap_and_nan() {
        let base = CarouselConfig::new(300.0, 200.0, 300.0);

        assert_eq!(
            base.with_overlap(-1.0).validate(),
            Err(ConfigError::NegativeOverlap(-1.0))
        );
        assert_eq!(
            base.with_side_padding(f64::NAN).validate(),
            Err(ConfigError::NonFinite { field: "side_padding" })
        );
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        let style = EmphasisStyle {
            threshold: 0.0,
            ..EmphasisStyle::default()
        };
        let config = CarouselConfig::default().with_emphasis(style);

        assert_eq!(config.validate(), Err(ConfigError::InvalidThreshold(0.0)));
        assert!(CarouselState::configure(5, config).is_err());
    }

    #[test]
    fn test_rejects_negative_falloff() {
        let style = EmphasisStyle {
            scale_falloff: -0.1,
            ..EmphasisStyle::default()
        };
        let config = CarouselConfig::default().with_emphasis(style);

        assert_eq!(config.validate(), Err(ConfigError::NegativeFalloff(-0.1)));
    }

    #[test]
    fn test_rejects_negative_animation_duration() {
        let style = EmphasisStyle {
            animation_duration: -1.0,
            ..EmphasisStyle::default()
        };
        let config = CarouselConfig::default().with_emphasis(style);

        assert_eq!(config.validate(), Err(ConfigError::NegativeDuration(-1.0)));
    }

    #[test]
    fn test_rejects_non_finite_emphasis() {
        let style = EmphasisStyle {
            threshold: -1.0,
            scale_falloff: f64::NAN,
            ..EmphasisStyle::default()
        };
        let config = CarouselConfig::default().with_emphasis(style);

        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "emphasis.scale_falloff" })
        );
        assert!(CarouselState::configure(5, config).is_err());
    }

    #[test]
    fn test_zero_viewport_rejected() {
        let config = CarouselConfig::new(300.0, 200.0, 0.0);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDimension { field: "viewport_width", .. })
        ));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{"item_width": 300.0, "viewport_width": 300.0}"#).unwrap();

        assert_eq!(config.item_width, 300.0);
        assert_eq!(config.overlap, 30.0);
        assert_eq!(config.emphasis.threshold, 50.0);

        let text = serde_json::to_string(&config).unwrap();
        let back: CarouselConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
