//! Float keyframes: fixed literals and homing rotation.

use crate::context::EvalContext;
use crate::ease::Easing;
use crate::math;

use super::PropertyKeyframe;
use super::homing::{HomingConfig, RotationHoming};

/// Value source of a float keyframe.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatSource {
    /// Authored literal.
    Fixed(f32),
    /// Bearing pursuit toward the nearest target.
    Homing(RotationHoming),
}

/// Keyframe producing a single float (rotation, opacity, a shader knob).
#[derive(Debug, Clone, PartialEq)]
pub struct FloatKeyframe {
    pub time: f32,
    pub ease: Easing,
    pub relative: bool,
    pub source: FloatSource,
    active: bool,
    total: f32,
}

impl FloatKeyframe {
    #[must_use]
    pub fn fixed(time: f32, value: f32, ease: Easing) -> Self {
        Self {
            time,
            ease,
            relative: false,
            source: FloatSource::Fixed(value),
            active: false,
            total: 0.0,
        }
    }

    #[must_use]
    pub fn homing(time: f32, config: HomingConfig, ease: Easing) -> Self {
        Self {
            time,
            ease,
            relative: false,
            source: FloatSource::Homing(RotationHoming::new(config)),
            active: false,
            total: 0.0,
        }
    }

    /// Pursuit state, when this is a homing keyframe.
    #[must_use]
    pub fn homing_state(&self) -> Option<&RotationHoming> {
        match &self.source {
            FloatSource::Homing(homing) => Some(homing),
            FloatSource::Fixed(_) => None,
        }
    }
}

impl PropertyKeyframe for FloatKeyframe {
    type Value = f32;

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

    fn total_value(&self) -> f32 {
        self.total
    }

    fn set_total_value(&mut self, total: f32) {
        self.total = total;
    }

    fn current(&self, _ctx: &EvalContext<'_>) -> f32 {
        match &self.source {
            FloatSource::Fixed(value) => *value,
            FloatSource::Homing(homing) => homing.value,
        }
    }

    fn get_value(&mut self, ctx: &EvalContext<'_>) -> f32 {
        match &mut self.source {
            FloatSource::Fixed(value) => *value,
            FloatSource::Homing(homing) => homing.update(ctx, None),
        }
    }

    fn set_value(&mut self, value: f32) {
        match &mut self.source {
            FloatSource::Fixed(fixed) => *fixed = value,
            FloatSource::Homing(homing) => homing.value = value,
        }
    }

    fn start(&mut self, prev: Option<&Self>, current: f32, ctx: &EvalContext<'_>) {
        self.active = true;
        if let FloatSource::Homing(homing) = &mut self.source {
            let chained = prev.is_some_and(|p| matches!(p.source, FloatSource::Homing(_)));
            homing.activate(chained, current, ctx);
        }
    }

    fn stop(&mut self) {
        self.active = false;
        if let FloatSource::Homing(homing) = &mut self.source {
            homing.reset();
        }
    }

    fn interpolate(&mut self, other: &mut Self, t: f32, ctx: &EvalContext<'_>) -> f32 {
        let eased = other.ease.apply(t);
        match &mut self.source {
            FloatSource::Homing(homing) => {
                if let FloatSource::Homing(next) = &other.source {
                    // Chained homing: the pursuit is the interpolation. The
                    // result is pushed into the arriving keyframe so it does
                    // not wake up on a stale value.
                    let config = next.config;
                    let value = homing.update(ctx, Some((config, eased)));
                    other.set_value(value);
                    value
                } else {
                    let value = homing.update(ctx, None);
                    math::lerp(value, other.current(ctx), eased)
                }
            }
            FloatSource::Fixed(value) => math::lerp(*value, other.current(ctx), eased),
        }
    }
}
