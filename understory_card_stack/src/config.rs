// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack configuration with defaults.
//!
//! One [`StackConfig`] is built when a stack is created and read by every
//! computation afterwards. Fields are public; override what you need with
//! struct update syntax:
//!
//! ```
//! use understory_card_stack::config::{LayerConfig, StackConfig};
//!
//! let config = StackConfig {
//!     dist_drag: 90.0,
//!     infinite: true,
//!     layers: LayerConfig { layer_count: 4, ..LayerConfig::default() },
//!     ..StackConfig::default()
//! };
//! assert!(config.validate(10).is_ok());
//! ```

use core::time::Duration;

use kurbo::{Size, Vec2};
use understory_motion::easing::Easing;
use understory_motion::spring::SpringConfig;

use crate::directions::Directions;
use crate::error::ConfigError;

/// Viewport assumed by [`StackConfig::default`] when the host has not supplied one.
pub const NOMINAL_VIEWPORT: Size = Size::new(390.0, 844.0);

/// Fraction of the viewport a card covers by default.
pub const VIEWPORT_FRACTION: f64 = 0.8;

/// Where `go_back` places the returning card before it settles.
///
/// Fixed rather than derived from the layer geometry.
pub const GO_BACK_OFFSET: Vec2 = Vec2::new(0.0, -100.0);

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; `0` is fully transparent.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Construct from components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Geometry of the visible layers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayerConfig {
    /// Number of visible layers `N`.
    pub layer_count: usize,
    /// Front-card rotation in degrees at a full-range horizontal drag.
    pub rotate_degree: f64,
    /// Per-depth rotation factor (geometric).
    pub reduce_degree_by: f64,
    /// Per-depth scale step (linear).
    pub reduce_scale_by: f64,
    /// Per-depth opacity step (linear).
    pub reduce_opacity_by: f64,
    /// Per-depth translation factor (geometric).
    pub reduce_transform_by: f64,
    /// Vertical stagger between layers, in pixels.
    pub stack_effect_height: f64,
    /// Card box size.
    pub item_size: Size,
    /// Fill behind each card.
    pub background: Rgba8,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            layer_count: 3,
            rotate_degree: 10.0,
            reduce_degree_by: 0.65,
            reduce_scale_by: 0.05,
            reduce_opacity_by: 0.2,
            reduce_transform_by: 0.7,
            stack_effect_height: 5.0,
            item_size: NOMINAL_VIEWPORT * VIEWPORT_FRACTION,
            background: Rgba8::TRANSPARENT,
        }
    }
}

/// Full stack configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StackConfig {
    /// Distance in pixels a drag must exceed to count as a swipe.
    pub dist_drag: f64,
    /// Initially enabled directions. Can be changed later on the stack.
    pub directions: Directions,
    /// Keep cycling after the last item instead of ending the stack.
    pub infinite: bool,
    /// Front item when the stack is created.
    pub initial_index: usize,
    /// Layer geometry.
    pub layers: LayerConfig,
    /// Spring used for settle and commit-exit animations.
    pub spring: SpringConfig,
    /// Duration of a programmatic move.
    pub move_duration: Duration,
    /// Easing of a programmatic move.
    pub move_easing: Easing,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            dist_drag: 70.0,
            directions: Directions::all(),
            infinite: false,
            initial_index: 0,
            layers: LayerConfig::default(),
            spring: SpringConfig::default(),
            move_duration: Duration::from_millis(400),
            move_easing: Easing::Exponential,
        }
    }
}

impl StackConfig {
    /// Defaults with cards sized to 80% of `viewport`.
    pub fn for_viewport(viewport: Size) -> Self {
        Self {
            layers: LayerConfig {
                item_size: viewport * VIEWPORT_FRACTION,
                ..LayerConfig::default()
            },
            ..Self::default()
        }
    }

    /// Check that this config can drive a deck of `len` items.
    pub fn validate(&self, len: usize) -> Result<(), ConfigError> {
        let layers = &self.layers;
        if layers.layer_count == 0 {
            return Err(ConfigError::NoLayers);
        }
        if !self.dist_drag.is_finite() || self.dist_drag < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.dist_drag));
        }
        let Size { width, height } = layers.item_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidItemSize { width, height });
        }
        for (name, value) in [
            ("rotate_degree", layers.rotate_degree),
            ("reduce_degree_by", layers.reduce_degree_by),
            ("reduce_scale_by", layers.reduce_scale_by),
            ("reduce_opacity_by", layers.reduce_opacity_by),
            ("reduce_transform_by", layers.reduce_transform_by),
            ("stack_effect_height", layers.stack_effect_height),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if !self.spring.is_settling() {
            return Err(ConfigError::InvalidSpring(self.spring));
        }
        if len > 0 && self.initial_index >= len {
            return Err(ConfigError::InitialIndexOutOfRange {
                index: self.initial_index,
                len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(StackConfig::default().validate(5), Ok(()));
        // An empty deck is valid; it simply renders nothing.
        assert_eq!(StackConfig::default().validate(0), Ok(()));
    }

    #[test]
    fn viewport_sizing() {
        let c = StackConfig::for_viewport(Size::new(500.0, 1000.0));
        assert_eq!(c.layers.item_size, Size::new(400.0, 800.0));
    }

    #[test]
    fn rejects_bad_values() {
        let no_layers = StackConfig {
            layers: LayerConfig {
                layer_count: 0,
                ..LayerConfig::default()
            },
            ..StackConfig::default()
        };
        assert_eq!(no_layers.validate(3), Err(ConfigError::NoLayers));

        let negative = StackConfig {
            dist_drag: -1.0,
            ..StackConfig::default()
        };
        assert_eq!(negative.validate(3), Err(ConfigError::InvalidThreshold(-1.0)));

        let flat = StackConfig {
            layers: LayerConfig {
                item_size: Size::new(100.0, 0.0),
                ..LayerConfig::default()
            },
            ..StackConfig::default()
        };
        assert!(matches!(
            flat.validate(3),
            Err(ConfigError::InvalidItemSize { .. })
        ));

        let nan = StackConfig {
            layers: LayerConfig {
                reduce_transform_by: f64::NAN,
                ..LayerConfig::default()
            },
            ..StackConfig::default()
        };
        assert_eq!(
            nan.validate(3),
            Err(ConfigError::NonFinite("reduce_transform_by"))
        );

        let undamped = StackConfig {
            spring: SpringConfig {
                damping: 0.0,
                ..SpringConfig::default()
            },
            ..StackConfig::default()
        };
        assert_eq!(
            undamped.validate(3),
            Err(ConfigError::InvalidSpring(undamped.spring))
        );
        for spring in [
            SpringConfig {
                mass: 0.0,
                ..SpringConfig::default()
            },
            SpringConfig {
                stiffness: -10.0,
                ..SpringConfig::default()
            },
            SpringConfig {
                rest_speed: f64::NAN,
                ..SpringConfig::default()
            },
        ] {
            let config = StackConfig {
                spring,
                ..StackConfig::default()
            };
            assert!(matches!(
                config.validate(3),
                Err(ConfigError::InvalidSpring(_))
            ));
        }

        let past_end = StackConfig {
            initial_index: 3,
            ..StackConfig::default()
        };
        assert_eq!(
            past_end.validate(3),
            Err(ConfigError::InitialIndexOutOfRange { index: 3, len: 3 })
        );
    }
}
