// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-layer visual transforms.
//!
//! ## Model
//!
//! Each visible layer at depth `i` (0 = front) derives its transform from a
//! drag vector and the two release pulses:
//!
//! - Rotation and translation follow the drag, with ranges that fall off
//!   geometrically with depth (`factor^i`), so background cards sit flatter
//!   and move less.
//! - Scale and opacity follow the pulses only. The front card fades out while
//!   every card behind it grows and brightens by one step, landing on the
//!   values of the slot in front of it.
//! - A constant vertical stagger, plus half of the height lost to the layer's
//!   smaller scale, makes cards peek out below one another at rest.
//!
//! Inputs are interpolated linearly with extrapolation past the drag range;
//! only the final opacity is clamped to `[0, 1]`.

use kurbo::{Affine, Size, Vec2};
use understory_motion::math;

use crate::config::LayerConfig;

/// Drag distance that maps to a full rotation and translation range.
pub const TRANSFORM_RANGE: f64 = 100.0;

/// Release animation progress, `0` at rest and heading to `1` on commit.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pulses {
    /// Drives scale.
    pub scale: f64,
    /// Drives opacity.
    pub opacity: f64,
}

impl Pulses {
    /// Both pulses at rest.
    pub const REST: Self = Self {
        scale: 0.0,
        opacity: 0.0,
    };
}

/// Visual transform of one layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayerTransform {
    /// Rotation in degrees, clockwise positive.
    pub rotation_deg: f64,
    /// Translation in pixels.
    pub translation: Vec2,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Paint order; higher paints on top.
    pub z_index: i32,
}

impl LayerTransform {
    /// Compose rotate, then translate, then scale about the centre of a card of `size`.
    pub fn to_affine(&self, size: Size) -> Affine {
        let centre = Vec2::new(size.width * 0.5, size.height * 0.5);
        Affine::translate(centre)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::translate(self.translation)
            * Affine::scale(self.scale)
            * Affine::translate(-centre)
    }
}

/// Compute the transform of the layer at `depth`.
///
/// `drag` is the drag vector bound to that depth: the front card reads its own
/// mirror, every other card reads the shared one.
pub fn layer_transform(
    config: &LayerConfig,
    depth: usize,
    drag: Vec2,
    pulses: Pulses,
) -> LayerTransform {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Depth is bounded by the visible layer count."
    )]
    let exponent = depth as u32;
    let i = depth as f64;
    let front = depth == 0;

    let rotate_range = config.rotate_degree * math::powi(config.reduce_degree_by, exponent);
    let rotation_deg = drag.x / TRANSFORM_RANGE * rotate_range;

    let opacity_base = 1.0 - config.reduce_opacity_by * i;
    let (opacity_from, opacity_to) = if front {
        (1.0, 0.0)
    } else {
        (opacity_base, opacity_base + config.reduce_opacity_by)
    };
    let opacity = math::lerp(opacity_from, opacity_to, pulses.opacity).clamp(0.0, 1.0);

    let scale_base = 1.0 - config.reduce_scale_by * i;
    let scale = math::lerp(scale_base, scale_base + config.reduce_scale_by, pulses.scale);

    let translate_range =
        (TRANSFORM_RANGE / 2.0) * math::powi(config.reduce_transform_by, exponent);
    let height = config.item_size.height;
    let scaled_height_diff = (height - height * scale_base) / 2.0;
    let rest_y = scaled_height_diff + i * config.stack_effect_height;
    let translation = Vec2::new(
        drag.x / TRANSFORM_RANGE * translate_range,
        rest_y + drag.y / TRANSFORM_RANGE * translate_range,
    );

    LayerTransform {
        rotation_deg,
        translation,
        scale,
        opacity,
        z_index: z_index(config.layer_count, depth),
    }
}

/// Paint order of `depth` in a stack of `layer_count`: `N - i + 1`.
pub fn z_index(layer_count: usize, depth: usize) -> i32 {
    let n = i32::try_from(layer_count).unwrap_or(i32::MAX);
    let i = i32::try_from(depth).unwrap_or(i32::MAX);
    n.saturating_sub(i).saturating_add(1)
}

/// Where the shared drag vector must land during a commit-exit so the layers
/// behind the new front card line up with their resting slots.
pub fn commit_exit_offset(config: &LayerConfig) -> Vec2 {
    let scale_range = 1.0 - config.reduce_scale_by;
    let translate_range = (TRANSFORM_RANGE / 2.0) * config.reduce_transform_by;
    let height = config.item_size.height;
    let scaled_height_diff = (height - height * scale_range) / 2.0;
    let zero_range = scaled_height_diff * config.stack_effect_height;
    let percentage = translate_range / (translate_range + zero_range);
    Vec2::new(0.0, TRANSFORM_RANGE * (percentage - 1.0))
}
