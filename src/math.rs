//! Scalar and bearing math shared by the keyframe variants.

use glam::Vec3;

/// Scalar linear interpolation.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Axis mask for positional homing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Pursue on both play-plane axes.
    #[default]
    Both,
    /// Pursue on X only.
    XOnly,
    /// Pursue on Y only.
    YOnly,
}

/// Signed bearing of `to` as seen from `from`, in degrees.
///
/// Measured from straight down, range `(-180, 180]`: a target directly
/// below `from` reads 0°, to the left +90°, to the right −90°, directly
/// above ±180°. The seam sits overhead; the homing unwrap keys on side
/// crossings there.
#[inline]
#[must_use]
pub fn vector_angle(from: Vec3, to: Vec3) -> f32 {
    let d = to - from;
    (-d.x).atan2(-d.y).to_degrees()
}

/// Distance between two points under an axis mask: full Euclidean for
/// [`Axis::Both`], absolute single-axis difference otherwise.
#[inline]
#[must_use]
pub fn axis_distance(a: Vec3, b: Vec3, axis: Axis) -> f32 {
    match axis {
        Axis::Both => a.distance(b),
        Axis::XOnly => (b.x - a.x).abs(),
        Axis::YOnly => (b.y - a.y).abs(),
    }
}
