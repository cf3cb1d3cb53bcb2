//! Color keyframes: fixed literals and live palette lookups.

use crate::color::{self, Rgba};
use crate::context::EvalContext;
use crate::ease::Easing;
use crate::math;
use crate::theme::PaletteGroup;

use super::PropertyKeyframe;

/// Parameters of a palette-resolved color. No literal color is stored; the
/// palette is consulted on every read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColor {
    pub group: PaletteGroup,
    pub slot: usize,
    /// Fade multiplied into the palette color's alpha.
    pub opacity: f32,
    /// Additive hue offset, in turns.
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
    /// Historical storage convention: the effective fade is `-(opacity - 1)`.
    pub invert_opacity: bool,
}

impl ThemeColor {
    #[must_use]
    pub fn new(group: PaletteGroup, slot: usize) -> Self {
        Self {
            group,
            slot,
            opacity: 1.0,
            hue: 0.0,
            saturation: 0.0,
            value: 0.0,
            invert_opacity: false,
        }
    }

    fn effective_opacity(&self) -> f32 {
        let opacity = if self.invert_opacity {
            -(self.opacity - 1.0)
        } else {
            self.opacity
        };
        opacity.clamp(0.0, 1.0)
    }

    fn resolve(&self, ctx: &EvalContext<'_>) -> Rgba {
        let base = ctx.palette.color(self.group, self.slot);
        let shifted = color::shift_hsv(base, self.hue, self.saturation, self.value);
        shifted.with_alpha(shifted.a * self.effective_opacity())
    }
}

/// Value source of a color keyframe.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSource {
    /// Authored literal.
    Fixed(Rgba),
    /// Live palette lookup.
    Theme(ThemeColor),
}

/// Keyframe producing a color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorKeyframe {
    pub time: f32,
    pub ease: Easing,
    pub relative: bool,
    pub source: ColorSource,
    active: bool,
    total: Rgba,
}

impl ColorKeyframe {
    #[must_use]
    pub fn fixed(time: f32, value: Rgba, ease: Easing) -> Self {
        Self {
            time,
            ease,
            relative: false,
            source: ColorSource::Fixed(value),
            active: false,
            total: Rgba::ZERO,
        }
    }

    #[must_use]
    pub fn theme(time: f32, theme: ThemeColor, ease: Easing) -> Self {
        Self {
            time,
            ease,
            relative: false,
            source: ColorSource::Theme(theme),
            active: false,
            total: Rgba::ZERO,
        }
    }
}

impl PropertyKeyframe for ColorKeyframe {
    type Value = Rgba;

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

    fn total_value(&self) -> Rgba {
        self.total
    }

    fn set_total_value(&mut self, total: Rgba) {
        self.total = total;
    }

    fn current(&self, ctx: &EvalContext<'_>) -> Rgba {
        match &self.source {
            ColorSource::Fixed(value) => *value,
            ColorSource::Theme(theme) => theme.resolve(ctx),
        }
    }

    fn get_value(&mut self, ctx: &EvalContext<'_>) -> Rgba {
        self.current(ctx)
    }

    fn set_value(&mut self, value: Rgba) {
        if let ColorSource::Fixed(fixed) = &mut self.source {
            *fixed = value;
        }
    }

    fn start(&mut self, _prev: Option<&Self>, _current: Rgba, _ctx: &EvalContext<'_>) {
        self.active = true;
    }

    fn stop(&mut self) {
        self.active = false;
    }

    fn interpolate(&mut self, other: &mut Self, t: f32, ctx: &EvalContext<'_>) -> Rgba {
        let eased = other.ease.apply(t);
        match (&self.source, &other.source) {
            (ColorSource::Theme(a), ColorSource::Theme(b)) => {
                // Two-stage blend: endpoint palette colors first, then one
                // application of the independently blended modifier sets.
                let blended = ctx
                    .palette
                    .color(a.group, a.slot)
                    .lerp(ctx.palette.color(b.group, b.slot), eased);
                let hue = math::lerp(a.hue, b.hue, eased);
                let saturation = math::lerp(a.saturation, b.saturation, eased);
                let value = math::lerp(a.value, b.value, eased);
                let opacity = math::lerp(a.effective_opacity(), b.effective_opacity(), eased);
                let shifted = color::shift_hsv(blended, hue, saturation, value);
                shifted.with_alpha(shifted.a * opacity)
            }
            _ => self.current(ctx).lerp(other.current(ctx), eased),
        }
    }
}
