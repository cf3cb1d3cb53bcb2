//! Runtime keyframe interpolation for rhythm-game object animation.
//!
//! Per-property [`Sequence`]s resolve a playback time to an interpolated
//! value in O(1) per call. Keyframes come in fixed, palette-resolved and
//! target-pursuing flavors; everything a resolve may consult arrives
//! through an explicit [`EvalContext`].

pub mod color;
pub mod context;
pub mod ease;
pub mod errors;
pub mod keyframe;
pub mod math;
pub mod sequence;
pub mod theme;

pub use color::Rgba;
pub use context::{EvalContext, NoTargets, TargetLocator};
pub use ease::Easing;
pub use errors::{CadenceError, Result};
pub use keyframe::{
    ColorKeyframe, ColorSource, FloatKeyframe, FloatSource, HomingConfig, PlayerSide,
    PositionHoming, PropertyKeyframe, RotationHoming, ThemeColor, Vec2Keyframe, Vec3Keyframe,
    Vec3Source,
};
pub use math::Axis;
pub use sequence::Sequence;
pub use theme::{PaletteGroup, ThemePalette};
