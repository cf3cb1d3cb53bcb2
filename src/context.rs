//! Per-call evaluation context.
//!
//! Everything a keyframe may consult while resolving a value is threaded
//! through [`EvalContext`] explicitly. There are no globals: the live
//! palette and the target locator are borrowed for the duration of a call.

use glam::Vec3;

use crate::theme::ThemePalette;

/// Locates the nearest tracked player for homing keyframes.
pub trait TargetLocator {
    /// Position of the tracked target nearest to `position`, if any.
    fn nearest(&self, position: Vec3) -> Option<Vec3>;
}

/// Locator with nothing tracked. Homing keyframes fall back to the zero
/// vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTargets;

impl TargetLocator for NoTargets {
    fn nearest(&self, _position: Vec3) -> Option<Vec3> {
        None
    }
}

impl TargetLocator for [Vec3] {
    fn nearest(&self, position: Vec3) -> Option<Vec3> {
        self.iter().copied().min_by(|a, b| {
            a.distance_squared(position)
                .total_cmp(&b.distance_squared(position))
        })
    }
}

impl TargetLocator for Vec<Vec3> {
    fn nearest(&self, position: Vec3) -> Option<Vec3> {
        self.as_slice().nearest(position)
    }
}

/// Inputs for one resolve call.
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
    /// Playback time, seconds.
    pub time: f32,
    /// Frame delta, seconds.
    pub delta_time: f32,
    /// Global playback-speed multiplier.
    pub pitch: f32,
    /// Live palette; theme keyframes resolve through it on every read.
    pub palette: &'a ThemePalette,
    /// Nearest-player lookup for homing keyframes.
    pub targets: &'a dyn TargetLocator,
    /// Evaluated position of the property's position track this frame.
    pub anchor: Vec3,
}

impl<'a> EvalContext<'a> {
    #[must_use]
    pub fn new(
        time: f32,
        delta_time: f32,
        palette: &'a ThemePalette,
        targets: &'a dyn TargetLocator,
    ) -> Self {
        Self {
            time,
            delta_time,
            pitch: 1.0,
            palette,
            targets,
            anchor: Vec3::ZERO,
        }
    }

    #[must_use]
    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Vec3) -> Self {
        self.anchor = anchor;
        self
    }

    /// Nearest tracked target, or the zero vector when nothing is tracked.
    #[must_use]
    pub fn target_or_zero(&self, position: Vec3) -> Vec3 {
        self.targets.nearest(position).unwrap_or(Vec3::ZERO)
    }
}
