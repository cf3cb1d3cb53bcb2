//! Pursuit state machines for homing keyframes.
//!
//! Configuration is immutable once a keyframe is built; everything the
//! pursuit accumulates between `start` and `stop` lives in the state
//! machine itself, inline in the keyframe, so a value resolve stays O(1).

use glam::Vec3;

use crate::context::EvalContext;
use crate::math::{self, Axis};

/// Immutable homing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HomingConfig {
    /// Smoothing base in `[0, 1)`. Zero snaps instantly; values near one
    /// trail far behind the target.
    pub delay: f32,
    /// Inner edge of the activation band. Zero together with `max_range`
    /// means unconditional pursuit.
    pub min_range: f32,
    /// Outer edge of the activation band.
    pub max_range: f32,
    /// Run away from the target instead of toward it.
    pub flee: bool,
}

/// Which side of the anchor the target occupied last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerSide {
    #[default]
    Undetermined,
    Left,
    Right,
}

/// Frame-rate-independent blend factor for one step of exponential pursuit.
#[inline]
fn smoothing_factor(delay: f32, scaled_dt: f32) -> f32 {
    1.0 - delay.powf(scaled_dt)
}

/// Band check: a zeroed band means unconditional, otherwise the distance
/// must lie strictly inside it.
#[inline]
fn band_open(min: f32, max: f32, distance: f32) -> bool {
    (min == 0.0 && max == 0.0) || (distance > min && distance < max)
}

/// Blend factor and band edges, lerped toward a chained keyframe's
/// parameters by the arriving eased fraction when one is supplied.
fn blended_params(
    config: HomingConfig,
    ctx: &EvalContext<'_>,
    next: Option<(HomingConfig, f32)>,
) -> (f32, f32, f32) {
    let scaled_dt = ctx.delta_time * ctx.pitch;
    let mut factor = smoothing_factor(config.delay, scaled_dt);
    let mut min = config.min_range;
    let mut max = config.max_range;
    if let Some((chained, t)) = next {
        factor = math::lerp(factor, smoothing_factor(chained.delay, scaled_dt), t);
        min = math::lerp(min, chained.min_range, t);
        max = math::lerp(max, chained.max_range, t);
    }
    (factor, min, max)
}

/// Bearing pursuit toward the nearest target.
///
/// Tracks the raw bearing plus a ±360° accumulator so the pursued angle
/// stays continuous when the target crosses the overhead seam. The
/// correction fires only on a side-crossing event while the target is above
/// the anchor; it is a known approximation carried over unchanged, not a
/// general unwrap.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationHoming {
    pub config: HomingConfig,
    pub(crate) value: f32,
    original: f32,
    target: Vec3,
    position: Vec3,
    angle_degrees: f32,
    angle360: f32,
    side: PlayerSide,
}

impl RotationHoming {
    #[must_use]
    pub fn new(config: HomingConfig) -> Self {
        Self {
            config,
            value: 0.0,
            original: 0.0,
            target: Vec3::ZERO,
            position: Vec3::ZERO,
            angle_degrees: 0.0,
            angle360: 0.0,
            side: PlayerSide::Undetermined,
        }
    }

    /// Smoothed angle produced by the last update, degrees.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Accumulated ±360° correction.
    #[must_use]
    pub fn accumulated_turn(&self) -> f32 {
        self.angle360
    }

    #[must_use]
    pub fn side(&self) -> PlayerSide {
        self.side
    }

    /// Target position observed by the last update.
    #[must_use]
    pub fn last_target(&self) -> Vec3 {
        self.target
    }

    /// Anchor position observed by the last update.
    #[must_use]
    pub fn last_position(&self) -> Vec3 {
        self.position
    }

    pub(crate) fn activate(&mut self, chained: bool, current: f32, ctx: &EvalContext<'_>) {
        if !chained {
            self.original = current;
            self.value = current;
        }
        let target = ctx.target_or_zero(ctx.anchor);
        self.target = target;
        self.position = ctx.anchor;
        // Seed the previous bearing so the first update cannot read a stale
        // zero as a side crossing.
        let aim = if self.config.flee {
            target - ctx.anchor
        } else {
            target
        };
        self.angle_degrees = -math::vector_angle(ctx.anchor, aim);
        self.angle360 = 0.0;
        self.side = PlayerSide::Undetermined;
    }

    pub(crate) fn reset(&mut self) {
        self.target = Vec3::ZERO;
        self.position = Vec3::ZERO;
        self.angle_degrees = 0.0;
        self.angle360 = 0.0;
        self.side = PlayerSide::Undetermined;
        self.value = self.original;
    }

    /// One pursuit step. `next` carries a chained keyframe's parameters and
    /// the eased fraction used to blend toward them.
    pub(crate) fn update(
        &mut self,
        ctx: &EvalContext<'_>,
        next: Option<(HomingConfig, f32)>,
    ) -> f32 {
        let position = ctx.anchor;
        let target = ctx.target_or_zero(position);
        let aim = if self.config.flee {
            target - position
        } else {
            target
        };
        let raw = -math::vector_angle(position, aim);

        // A turn is applied only on a side-crossing event while the target
        // is above the anchor, and only when the raw-bearing comparison
        // agrees. The seam of `vector_angle` sits overhead, so that is
        // exactly where the raw value wraps.
        if target.x > position.x && self.side != PlayerSide::Right {
            self.side = PlayerSide::Right;
            if target.y > position.y && self.angle_degrees < raw {
                self.angle360 -= 360.0;
            }
        } else if target.x < position.x && self.side != PlayerSide::Left {
            self.side = PlayerSide::Left;
            if target.y > position.y && self.angle_degrees > raw {
                self.angle360 += 360.0;
            }
        }

        let angle = raw + self.angle360;
        self.angle_degrees = raw;
        self.target = target;
        self.position = position;

        let (factor, min, max) = blended_params(self.config, ctx, next);
        if band_open(min, max, position.distance(target)) {
            self.value += (angle - self.value) * factor;
        }
        self.value
    }
}

/// Positional pursuit: moves the value toward (or, fleeing, directly away
/// from) the target on the configured axes. Z passes through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionHoming {
    pub config: HomingConfig,
    pub axis: Axis,
    pub(crate) value: Vec3,
    original: Vec3,
    target: Vec3,
}

impl PositionHoming {
    #[must_use]
    pub fn new(config: HomingConfig, axis: Axis) -> Self {
        Self {
            config,
            axis,
            value: Vec3::ZERO,
            original: Vec3::ZERO,
            target: Vec3::ZERO,
        }
    }

    /// Position produced by the last update.
    #[must_use]
    pub fn value(&self) -> Vec3 {
        self.value
    }

    /// Target position observed by the last update.
    #[must_use]
    pub fn last_target(&self) -> Vec3 {
        self.target
    }

    pub(crate) fn activate(&mut self, chained: bool, current: Vec3, ctx: &EvalContext<'_>) {
        if !chained {
            self.original = current;
            self.value = current;
        }
        self.target = ctx.target_or_zero(self.value);
    }

    pub(crate) fn reset(&mut self) {
        self.target = Vec3::ZERO;
        self.value = self.original;
    }

    pub(crate) fn update(
        &mut self,
        ctx: &EvalContext<'_>,
        next: Option<(HomingConfig, f32)>,
    ) -> Vec3 {
        let target = ctx.target_or_zero(self.value);
        self.target = target;

        let (factor, min, max) = blended_params(self.config, ctx, next);
        let distance = math::axis_distance(self.value, target, self.axis);
        if band_open(min, max, distance) {
            // Flee mirrors the target through the current value.
            let dest = if self.config.flee {
                self.value * 2.0 - target
            } else {
                target
            };
            if matches!(self.axis, Axis::Both | Axis::XOnly) {
                self.value.x += (dest.x - self.value.x) * factor;
            }
            if matches!(self.axis, Axis::Both | Axis::YOnly) {
                self.value.y += (dest.y - self.value.y) * factor;
            }
        }
        self.value
    }
}
