//! Sequence and static-keyframe tests
//!
//! Tests for:
//! - Static float/vec2/vec3/color interpolation and ease application
//! - Clamping before the first and past the last keyframe
//! - Zero-length segments (instant snap)
//! - Cursor-based bracket lookup vs fresh lookup
//! - Theme-resolved keyframes and the live palette contract
//! - Relative accumulation totals
//! - Construction errors and ease-name lookup

use glam::{Vec2, Vec3};

use cadence_anim::{
    CadenceError, ColorKeyframe, Easing, EvalContext, FloatKeyframe, NoTargets, PaletteGroup,
    PropertyKeyframe, Rgba, Sequence, ThemeColor, ThemePalette, Vec2Keyframe, Vec3Keyframe,
};
use cadence_anim::color::shift_hsv;

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_color(a: Rgba, b: Rgba) -> bool {
    approx(a.r, b.r) && approx(a.g, b.g) && approx(a.b, b.b) && approx(a.a, b.a)
}

fn ctx_at(time: f32, palette: &ThemePalette) -> EvalContext<'_> {
    EvalContext::new(time, 1.0 / 60.0, palette, &NoTargets)
}

fn test_palette() -> ThemePalette {
    ThemePalette::new(
        vec![
            Rgba::rgb(1.0, 0.0, 0.0),
            Rgba::rgb(0.0, 1.0, 0.0),
            Rgba::rgb(0.0, 0.0, 1.0),
        ],
        vec![Rgba::rgb(0.1, 0.1, 0.1)],
        vec![Rgba::rgb(1.0, 1.0, 0.0)],
    )
}

// ============================================================================
// Float sequences: the concrete playback contract
// ============================================================================

#[test]
fn float_sequence_midpoint_and_clamps() {
    let palette = ThemePalette::default();
    let mut seq = Sequence::new(vec![
        FloatKeyframe::fixed(0.0, 0.0, Easing::Linear),
        FloatKeyframe::fixed(1.0, 10.0, Easing::Linear),
    ])
    .unwrap();

    let mid = seq.interpolate(&ctx_at(0.5, &palette));
    assert!(approx(mid, 5.0), "midpoint: expected 5.0, got {mid}");

    let before = seq.interpolate(&ctx_at(-1.0, &palette));
    assert!(approx(before, 0.0), "before first: expected 0.0, got {before}");

    let after = seq.interpolate(&ctx_at(2.0, &palette));
    assert!(approx(after, 10.0), "past last: expected 10.0, got {after}");
}

#[test]
fn blend_endpoints_for_every_ease() {
    let palette = ThemePalette::default();
    let eases = [
        Easing::Linear,
        Easing::Instant,
        Easing::SineInOut,
        Easing::QuadIn,
        Easing::CubicOut,
        Easing::QuartInOut,
        Easing::QuintIn,
        Easing::ExpoInOut,
        Easing::CircOut,
        Easing::BackInOut,
        Easing::ElasticOut,
        Easing::BounceIn,
    ];

    for ease in eases {
        let mut seq = Sequence::new(vec![
            FloatKeyframe::fixed(0.0, 2.0, Easing::Linear),
            FloatKeyframe::fixed(1.0, 12.0, ease),
        ])
        .unwrap();

        let at_start = seq.interpolate(&ctx_at(0.0, &palette));
        assert!(
            approx(at_start, 2.0),
            "{ease:?}: t=0 should return the departing value, got {at_start}"
        );

        let at_end = seq.interpolate(&ctx_at(1.0, &palette));
        assert!(
            approx(at_end, 12.0),
            "{ease:?}: t=1 should return the arriving value, got {at_end}"
        );
    }
}

#[test]
fn arriving_keyframe_owns_the_curve() {
    // Segment curve comes from the arriving keyframe, not the departing one.
    let palette = ThemePalette::default();
    let mut seq = Sequence::new(vec![
        FloatKeyframe::fixed(0.0, 0.0, Easing::ExpoIn),
        FloatKeyframe::fixed(1.0, 10.0, Easing::QuadIn),
    ])
    .unwrap();

    let val = seq.interpolate(&ctx_at(0.5, &palette));
    let expected = 10.0 * Easing::QuadIn.apply(0.5);
    assert!(approx(val, expected), "expected {expected}, got {val}");
}

#[test]
fn instant_ease_steps_at_segment_start() {
    let palette = ThemePalette::default();
    let mut seq = Sequence::new(vec![
        FloatKeyframe::fixed(0.0, 0.0, Easing::Linear),
        FloatKeyframe::fixed(1.0, 10.0, Easing::Instant),
    ])
    .unwrap();

    assert!(approx(seq.interpolate(&ctx_at(0.0, &palette)), 0.0));
    assert!(approx(seq.interpolate(&ctx_at(0.01, &palette)), 10.0));
}

#[test]
fn zero_length_segment_snaps() {
    let palette = ThemePalette::default();
    let mut seq = Sequence::new(vec![
        FloatKeyframe::fixed(0.0, 0.0, Easing::Linear),
        FloatKeyframe::fixed(1.0, 5.0, Easing::Linear),
        FloatKeyframe::fixed(1.0, 9.0, Easing::Linear),
        FloatKeyframe::fixed(2.0, 20.0, Easing::Linear),
    ])
    .unwrap();

    let before = seq.interpolate(&ctx_at(0.5, &palette));
    assert!(approx(before, 2.5), "expected 2.5, got {before}");

    // At the shared time the later keyframe wins immediately.
    let at = seq.interpolate(&ctx_at(1.0, &palette));
    assert!(approx(at, 9.0), "expected snap to 9.0, got {at}");

    let after = seq.interpolate(&ctx_at(1.5, &palette));
    assert!(approx(after, 14.5), "expected 14.5, got {after}");
}

#[test]
fn cursor_matches_fresh_lookup_across_sweep() {
    let palette = ThemePalette::default();
    let build = || {
        Sequence::new(vec![
            FloatKeyframe::fixed(0.0, 0.0, Easing::Linear),
            FloatKeyframe::fixed(1.0, 10.0, Easing::SineInOut),
            FloatKeyframe::fixed(2.0, 5.0, Easing::QuadOut),
            FloatKeyframe::fixed(3.0, 20.0, Easing::Linear),
            FloatKeyframe::fixed(4.0, 15.0, Easing::CubicInOut),
        ])
        .unwrap()
    };

    let mut sequential = build();
    for i in 0..=80 {
        let t = i as f32 * 0.05;
        let ctx = ctx_at(t, &palette);
        let cursor_val = sequential.interpolate(&ctx);
        let fresh_val = build().interpolate(&ctx);
        assert!(
            approx(cursor_val, fresh_val),
            "t={t}: cursor {cursor_val} != fresh {fresh_val}"
        );
    }
}

#[test]
fn reverse_seek_deactivates_passed_keyframes() {
    let palette = ThemePalette::default();
    let mut seq = Sequence::new(vec![
        FloatKeyframe::fixed(0.0, 0.0, Easing::Linear),
        FloatKeyframe::fixed(1.0, 10.0, Easing::Linear),
        FloatKeyframe::fixed(2.0, 20.0, Easing::Linear),
    ])
    .unwrap();

    seq.interpolate(&ctx_at(1.5, &palette));
    assert!(seq.keyframe(1).unwrap().is_active());

    let val = seq.interpolate(&ctx_at(0.2, &palette));
    assert!(approx(val, 2.0), "expected 2.0 after rewind, got {val}");
    assert!(
        !seq.keyframe(1).unwrap().is_active(),
        "rewound-past keyframe should have stopped"
    );

    // Rewinding past the start stops everything.
    seq.interpolate(&ctx_at(-1.0, &palette));
    assert!(!seq.keyframe(0).unwrap().is_active());
}

#[test]
fn single_keyframe_sequence_holds_value() {
    let palette = ThemePalette::default();
    let mut seq = Sequence::new(vec![FloatKeyframe::fixed(1.0, 42.0, Easing::Linear)]).unwrap();

    assert!(approx(seq.interpolate(&ctx_at(0.0, &palette)), 42.0));
    assert!(approx(seq.interpolate(&ctx_at(5.0, &palette)), 42.0));
}

// ============================================================================
// Vector and fixed-color blends
// ============================================================================

#[test]
fn vec2_midpoint() {
    let palette = ThemePalette::default();
    let mut seq = Sequence::new(vec![
        Vec2Keyframe::fixed(0.0, Vec2::ZERO, Easing::Linear),
        Vec2Keyframe::fixed(1.0, Vec2::new(10.0, 20.0), Easing::Linear),
    ])
    .unwrap();

    let val = seq.interpolate(&ctx_at(0.5, &palette));
    assert!(approx(val.x, 5.0) && approx(val.y, 10.0), "got {val:?}");
}

#[test]
fn vec3_midpoint() {
    let palette = ThemePalette::default();
    let mut seq = Sequence::new(vec![
        Vec3Keyframe::fixed(0.0, Vec3::ZERO, Easing::Linear),
        Vec3Keyframe::fixed(1.0, Vec3::new(10.0, 20.0, 30.0), Easing::Linear),
    ])
    .unwrap();

    let val = seq.interpolate(&ctx_at(0.5, &palette));
    assert!(
        approx(val.x, 5.0) && approx(val.y, 10.0) && approx(val.z, 15.0),
        "got {val:?}"
    );
}

#[test]
fn fixed_color_midpoint() {
    let palette = ThemePalette::default();
    let mut seq = Sequence::new(vec![
        ColorKeyframe::fixed(0.0, Rgba::BLACK, Easing::Linear),
        ColorKeyframe::fixed(1.0, Rgba::WHITE, Easing::Linear),
    ])
    .unwrap();

    let val = seq.interpolate(&ctx_at(0.5, &palette));
    assert!(
        approx_color(val, Rgba::new(0.5, 0.5, 0.5, 1.0)),
        "got {val:?}"
    );
}

// ============================================================================
// Theme-resolved keyframes
// ============================================================================

#[test]
fn theme_keyframe_reads_palette_live() {
    let mut palette = test_palette();
    let mut seq = Sequence::new(vec![ColorKeyframe::theme(
        0.0,
        ThemeColor::new(PaletteGroup::Object, 2),
        Easing::Linear,
    )])
    .unwrap();

    let first = seq.interpolate(&ctx_at(0.0, &palette));
    assert!(approx_color(first, Rgba::rgb(0.0, 0.0, 1.0)), "got {first:?}");

    // Swap the slot mid-frame; no rebuild.
    palette.set_color(PaletteGroup::Object, 2, Rgba::rgb(1.0, 0.5, 0.0));
    let second = seq.interpolate(&ctx_at(0.0, &palette));
    assert!(
        approx_color(second, Rgba::rgb(1.0, 0.5, 0.0)),
        "palette change not visible: got {second:?}"
    );
}

#[test]
fn theme_pair_blends_palette_colors_then_modifiers() {
    let palette = test_palette();
    let mut a = ThemeColor::new(PaletteGroup::Object, 0);
    a.hue = 0.1;
    let mut b = ThemeColor::new(PaletteGroup::Object, 2);
    b.hue = 0.3;
    b.saturation = -0.2;

    let mut seq = Sequence::new(vec![
        ColorKeyframe::theme(0.0, a, Easing::Linear),
        ColorKeyframe::theme(1.0, b, Easing::Linear),
    ])
    .unwrap();

    let val = seq.interpolate(&ctx_at(0.5, &palette));

    // Palette endpoints blend first; the blended modifier set applies once.
    let blended = Rgba::rgb(1.0, 0.0, 0.0).lerp(Rgba::rgb(0.0, 0.0, 1.0), 0.5);
    let expected = shift_hsv(blended, 0.2, -0.1, 0.0);
    assert!(approx_color(val, expected), "got {val:?}, want {expected:?}");
}

#[test]
fn theme_to_fixed_falls_back_to_color_lerp() {
    let palette = test_palette();
    let mut seq = Sequence::new(vec![
        ColorKeyframe::theme(0.0, ThemeColor::new(PaletteGroup::Object, 0), Easing::Linear),
        ColorKeyframe::fixed(1.0, Rgba::BLACK, Easing::Linear),
    ])
    .unwrap();

    let val = seq.interpolate(&ctx_at(0.5, &palette));
    let expected = Rgba::rgb(1.0, 0.0, 0.0).lerp(Rgba::BLACK, 0.5);
    assert!(approx_color(val, expected), "got {val:?}");
}

#[test]
fn inverted_opacity_contract() {
    let palette = test_palette();
    let mut theme = ThemeColor::new(PaletteGroup::Object, 0);
    theme.opacity = 0.25;
    theme.invert_opacity = true;

    let mut seq = Sequence::new(vec![ColorKeyframe::theme(0.0, theme, Easing::Linear)]).unwrap();
    let val = seq.interpolate(&ctx_at(0.0, &palette));

    // Effective fade is -(opacity - 1).
    assert!(approx(val.a, 0.75), "expected alpha 0.75, got {}", val.a);
}

#[test]
fn palette_slot_clamps_out_of_range() {
    let _ = env_logger::builder().is_test(true).try_init();

    let palette = test_palette();
    let clamped = palette.color(PaletteGroup::Object, 7);
    assert!(
        approx_color(clamped, Rgba::rgb(0.0, 0.0, 1.0)),
        "out-of-range slot should clamp to the last entry, got {clamped:?}"
    );

    let empty = ThemePalette::default();
    let fallback = empty.color(PaletteGroup::Effect, 0);
    assert!(
        approx_color(fallback, Rgba::WHITE),
        "empty group should resolve white, got {fallback:?}"
    );
}

// ============================================================================
// Relative accumulation
// ============================================================================

#[test]
fn relative_keyframes_accumulate() {
    let palette = ThemePalette::default();
    let mut d1 = FloatKeyframe::fixed(0.0, 3.0, Easing::Linear);
    d1.relative = true;
    let mut d2 = FloatKeyframe::fixed(1.0, 4.0, Easing::Linear);
    d2.relative = true;

    let mut seq = Sequence::new(vec![d1, d2]).unwrap();
    seq.recompute_totals(&ctx_at(0.0, &palette));

    assert!(
        approx(seq.total(), 7.0),
        "expected total 7.0, got {}",
        seq.total()
    );
}

#[test]
fn absolute_keyframe_resets_running_total() {
    let palette = ThemePalette::default();
    let mut delta = FloatKeyframe::fixed(1.0, 2.0, Easing::Linear);
    delta.relative = true;

    let mut seq = Sequence::new(vec![
        FloatKeyframe::fixed(0.0, 5.0, Easing::Linear),
        delta,
        FloatKeyframe::fixed(2.0, 100.0, Easing::Linear),
    ])
    .unwrap();
    seq.recompute_totals(&ctx_at(0.0, &palette));

    assert!(approx(seq.keyframe(1).unwrap().total_value(), 7.0));
    assert!(approx(seq.total(), 100.0));
}

// ============================================================================
// Keyframe edits through the sequence
// ============================================================================

#[test]
fn editing_ease_and_value_in_place() {
    let palette = ThemePalette::default();
    let mut seq = Sequence::new(vec![
        FloatKeyframe::fixed(0.0, 0.0, Easing::Linear),
        FloatKeyframe::fixed(1.0, 10.0, Easing::Linear),
    ])
    .unwrap();

    let kf = seq.keyframe_mut(1).unwrap();
    kf.set_ease(Easing::QuadIn);
    kf.set_value(20.0);

    let val = seq.interpolate(&ctx_at(0.5, &palette));
    let expected = 20.0 * Easing::QuadIn.apply(0.5);
    assert!(approx(val, expected), "expected {expected}, got {val}");
}

// ============================================================================
// Construction errors and ease lookup
// ============================================================================

#[test]
fn empty_sequence_is_rejected() {
    let result = Sequence::<FloatKeyframe>::new(vec![]);
    assert_eq!(result.err(), Some(CadenceError::EmptySequence));
}

#[test]
fn unsorted_keyframes_are_rejected() {
    let result = Sequence::new(vec![
        FloatKeyframe::fixed(1.0, 0.0, Easing::Linear),
        FloatKeyframe::fixed(0.5, 1.0, Easing::Linear),
    ]);
    assert_eq!(
        result.err(),
        Some(CadenceError::UnsortedKeyframes { index: 1 })
    );
}

#[test]
fn ease_lookup_by_name() {
    assert_eq!("ElasticOut".parse::<Easing>(), Ok(Easing::ElasticOut));
    assert_eq!("Linear".parse::<Easing>(), Ok(Easing::Linear));
    assert_eq!(
        "Wobble".parse::<Easing>(),
        Err(CadenceError::UnknownEase("Wobble".to_owned()))
    );
}

#[test]
fn every_ease_fixes_its_endpoints() {
    let all = [
        Easing::Linear,
        Easing::Instant,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::QuintIn,
        Easing::QuintOut,
        Easing::QuintInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
    ];

    for ease in all {
        assert!(
            approx(ease.apply(0.0), 0.0),
            "{ease:?}: apply(0) = {}",
            ease.apply(0.0)
        );
        assert!(
            approx(ease.apply(1.0), 1.0),
            "{ease:?}: apply(1) = {}",
            ease.apply(1.0)
        );
    }
}
