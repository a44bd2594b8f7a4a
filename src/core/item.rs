//! Laid-out items and the visual parameters computed for them.

use super::config::CarouselConfig;

/// Rectangle in scroll-content coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }
}

/// One carousel entry at its fixed position
///
/// Items never move once laid out; scrolling only changes how they are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub index: usize,
    pub frame: Frame,
}

impl Item {
    /// Lay out the item at `index` for the given configuration
    pub fn layout(index: usize, config: &CarouselConfig) -> Self {
        Self {
            index,
            frame: Frame {
                x: index as f64 * config.step() + config.side_padding,
                y: config.item_top,
                width: config.item_width,
                height: config.item_height,
            },
        }
    }

    pub fn center_x(&self) -> f64 {
        self.frame.mid_x()
    }
}

/// How a single item should be drawn for the current scroll offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemVisual {
    pub index: usize,

    /// Uniform scale, always within `[minimum_scale, 1]`
    pub scale: f64,

    /// Nearest-to-centre treatment: stronger shadow and a lift
    pub emphasized: bool,

    pub shadow_opacity: f64,
    pub shadow_radius: f64,

    /// Vertical translation, negative is up
    pub vertical_offset: f64,

    /// Draw order; items closer to the centre sit on top
    pub z_position: f64,

    /// Distance from the item centre to the viewport centre
    pub distance: f64,
}

impl ItemVisual {
    /// Visual for an item whose centre is `distance` away from the viewport centre
    pub fn at_distance(index: usize, distance: f64, config: &CarouselConfig) -> Self {
        let style = &config.emphasis;
        let scale = (1.0 - (distance / config.viewport_width) * style.scale_falloff)
            .max(config.minimum_scale)
            .min(1.0);
        let emphasized = distance < style.threshold;

        let (shadow_opacity, shadow_radius, vertical_offset) = if emphasized {
            (style.emphasized_shadow_opacity, style.emphasized_shadow_radius, -style.lift)
        } else {
            (style.shadow_opacity, style.shadow_radius, 0.0)
        };

        Self {
            index,
            scale,
            emphasized,
            shadow_opacity,
            shadow_radius,
            vertical_offset,
            z_position: -distance,
            distance,
        }
    }
}
