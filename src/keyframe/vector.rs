//! Vector keyframes.

use glam::{Vec2, Vec3};

use crate::context::EvalContext;
use crate::ease::Easing;
use crate::math::Axis;

use super::PropertyKeyframe;
use super::homing::{HomingConfig, PositionHoming};

/// Keyframe producing a 2D vector (scale, parallax offset).
#[derive(Debug, Clone, PartialEq)]
pub struct Vec2Keyframe {
    pub time: f32,
    pub ease: Easing,
    pub relative: bool,
    pub value: Vec2,
    active: bool,
    total: Vec2,
}

impl Vec2Keyframe {
    #[must_use]
    pub fn fixed(time: f32, value: Vec2, ease: Easing) -> Self {
        Self {
            time,
            ease,
            relative: false,
            value,
            active: false,
            total: Vec2::ZERO,
        }
    }
}

impl PropertyKeyframe for Vec2Keyframe {
    type Value = Vec2;

    fn time(&self) -> f32 {
        self.time
    }

    fn ease(&self) -> Easing {
        self.ease
    }

    fn set_ease(&mut self, ease: Easing) {
        self.ease = ease;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn is_relative(&self) -> bool {
        self.relative
    }

    fn total_value(&self) -> Vec2 {
        self.total
    }

    fn set_total_value(&mut self, total: Vec2) {
        self.total = total;
    }

    fn current(&self, _ctx: &EvalContext<'_>) -> Vec2 {
        self.value
    }

    fn get_value(&mut self, _ctx: &EvalContext<'_>) -> Vec2 {
        self.value
    }

    fn set_value(&mut self, value: Vec2) {
        self.value = value;
    }

    fn start(&mut self, _prev: Option<&Self>, _current: Vec2, _ctx: &EvalContext<'_>) {
        self.active = true;
    }

    fn stop(&mut self) {
        self.active = false;
    }

    fn interpolate(&mut self, other: &mut Self, t: f32, _ctx: &EvalContext<'_>) -> Vec2 {
        self.value.lerp(other.value, other.ease.apply(t))
    }
}

/// Value source of a 3D vector keyframe.
#[derive(Debug, Clone, PartialEq)]
pub enum Vec3Source {
    /// Authored literal.
    Fixed(Vec3),
    /// Positional pursuit of the nearest target.
    Homing(PositionHoming),
}

/// Keyframe producing a 3D vector (position, with Z as depth).
#[derive(Debug, Clone, PartialEq)]
pub struct Vec3Keyframe {
    pub time: f32,
    pub ease: Easing,
    pub relative: bool,
    pub source: Vec3Source,
    active: bool,
    total: Vec3,
}

impl Vec3Keyframe {
    #[must_use]
    pub fn fixed(time: f32, value: Vec3, ease: Easing) -> Self {
        Self {
            time,
            ease,
            relative: false,
            source: Vec3Source::Fixed(value),
            active: false,
            total: Vec3::ZERO,
        }
    }

    #[must_use]
    pub fn homing(time: f32, config: HomingConfig, axis: Axis, ease: Easing) -> Self {
        Self {
            time,
            ease,
            relative: false,
            source: Vec3Source::Homing(PositionHoming::new(config, axis)),
            active: false,
            total: Vec3::ZERO,
        }
    }

    /// Pursuit state, when this is a homing keyframe.
    #[must_use]
    pub fn homing_state(&self) -> Option<&PositionHoming> {
        match &self.source {
            Vec3Source::Homing(homing) => Some(homing),
            Vec3Source::Fixed(_) => None,
        }
    }
}

impl PropertyKeyframe for Vec3Keyframe {
    type Value = Vec3;

    fn time(&self) -> f32 {
        self.time
    }

    fn ease(&self) -> Easing {
        self.ease
    }

    fn set_ease(&mut self, ease: Easing) {
        self.ease = ease;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn is_relative(&self) -> bool {
        self.relative
    }

    fn total_value(&self) -> Vec3 {
        self.total
    }

    fn set_total_value(&mut self, total: Vec3) {
        self.total = total;
    }

    fn current(&self, _ctx: &EvalContext<'_>) -> Vec3 {
        match &self.source {
            Vec3Source::Fixed(value) => *value,
            Vec3Source::Homing(homing) => homing.value,
        }
    }

    fn get_value(&mut self, ctx: &EvalContext<'_>) -> Vec3 {
        match &mut self.source {
            Vec3Source::Fixed(value) => *value,
            Vec3Source::Homing(homing) => homing.update(ctx, None),
        }
    }

    fn set_value(&mut self, value: Vec3) {
        match &mut self.source {
            Vec3Source::Fixed(fixed) => *fixed = value,
            Vec3Source::Homing(homing) => homing.value = value,
        }
    }

    fn start(&mut self, prev: Option<&Self>, current: Vec3, ctx: &EvalContext<'_>) {
        self.active = true;
        if let Vec3Source::Homing(homing) = &mut self.source {
            let chained = prev.is_some_and(|p| matches!(p.source, Vec3Source::Homing(_)));
            homing.activate(chained, current, ctx);
        }
    }

    fn stop(&mut self) {
        self.active = false;
        if let Vec3Source::Homing(homing) = &mut self.source {
            homing.reset();
        }
    }

    fn interpolate(&mut self, other: &mut Self, t: f32, ctx: &EvalContext<'_>) -> Vec3 {
        let eased = other.ease.apply(t);
        match &mut self.source {
            Vec3Source::Homing(homing) => {
                if let Vec3Source::Homing(next) = &other.source {
                    let config = next.config;
                    let value = homing.update(ctx, Some((config, eased)));
                    other.set_value(value);
                    value
                } else {
                    let value = homing.update(ctx, None);
                    value.lerp(other.current(ctx), eased)
                }
            }
            Vec3Source::Fixed(value) => value.lerp(other.current(ctx), eased),
        }
    }
}
