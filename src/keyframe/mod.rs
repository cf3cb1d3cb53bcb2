//! Keyframe value producers.
//!
//! One concrete keyframe type per animated value type. Each is a closed set
//! of value-source variants — fixed literal, live palette lookup, target
//! pursuit — behind the shared [`PropertyKeyframe`] contract. Counterpart
//! inspection during a blend is a match on the variant enum.

mod color;
mod float;
mod homing;
mod vector;

pub use color::{ColorKeyframe, ColorSource, ThemeColor};
pub use float::{FloatKeyframe, FloatSource};
pub use homing::{HomingConfig, PlayerSide, PositionHoming, RotationHoming};
pub use vector::{Vec2Keyframe, Vec3Keyframe, Vec3Source};

use std::fmt::Debug;
use std::ops::Add;

use crate::context::EvalContext;
use crate::ease::Easing;

/// Capability set shared by every keyframe variant.
///
/// A keyframe is positioned on its property's timeline by `time`, carries
/// the ease curve applied when it is the *destination* of a blend, and
/// resolves its value either from a literal, from the live palette, or from
/// pursuit state advanced once per call.
pub trait PropertyKeyframe: Sized {
    /// Concrete value the keyframe produces.
    type Value: Copy + Default + PartialEq + Debug + Add<Output = Self::Value>;

    /// Position on the property's timeline, seconds.
    fn time(&self) -> f32;

    /// Curve applied when this keyframe is the destination of a blend.
    fn ease(&self) -> Easing;

    fn set_ease(&mut self, ease: Easing);

    /// True once playback has crossed this keyframe's start.
    fn is_active(&self) -> bool;

    /// Whether the keyframe contributes additively to the running total
    /// instead of replacing the absolute value.
    fn is_relative(&self) -> bool;

    /// Running accumulation maintained by the owning sequence.
    fn total_value(&self) -> Self::Value;

    fn set_total_value(&mut self, total: Self::Value);

    /// Resolves the current value without advancing any state.
    fn current(&self, ctx: &EvalContext<'_>) -> Self::Value;

    /// Resolves the current value, advancing pursuit state where present.
    fn get_value(&mut self, ctx: &EvalContext<'_>) -> Self::Value;

    /// Overwrites the resolved value. No-op for palette-resolved keyframes,
    /// which hold no literal.
    fn set_value(&mut self, value: Self::Value);

    /// Activates the keyframe as playback crosses its start. `current` is
    /// the property's value at the moment of activation; `prev` is the
    /// keyframe being left behind, if any.
    fn start(&mut self, prev: Option<&Self>, current: Self::Value, ctx: &EvalContext<'_>);

    /// Clears activation state so a later `start` begins cleanly.
    fn stop(&mut self);

    /// Blends toward `other` at normalized segment fraction `t`, easing
    /// with `other`'s curve.
    fn interpolate(&mut self, other: &mut Self, t: f32, ctx: &EvalContext<'_>) -> Self::Value;
}
