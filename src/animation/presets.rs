//! Fixed animation descriptors used by the scene scripts.
//!
//! Unlike the generators these take no data-dependent shape; they are the
//! stock entrance and emphasis moves, expressed in the same declarative
//! keyframe form. Times are in seconds of the animation's local clock; the
//! engine stretches them when a scene wants a different pace.

use crate::animation::descriptor::{
    AnimationDescriptor, Keyframe, OutOfRange, PropertyTrack, SpaceKind,
};
use crate::animation::ease::Ease;

const FULL_TURN: f64 = std::f64::consts::TAU;

fn uniform_scale_tracks(keys: Vec<Keyframe>) -> Vec<PropertyTrack> {
    vec![
        PropertyTrack::new("scaleX", keys.clone()).with_out_of_range(OutOfRange::Extend),
        PropertyTrack::new("scaleY", keys).with_out_of_range(OutOfRange::Extend),
    ]
}

/// Title entrance: settles from an oversized scale down to 1.
pub fn downscale_intro() -> AnimationDescriptor {
    let keys = vec![
        Keyframe::number(0.0, 1.45)
            .with_easing(Ease::SinusoidalOut)
            .with_space(SpaceKind::Absolute),
        Keyframe::number(1.0, 1.0).with_space(SpaceKind::Absolute),
    ];
    AnimationDescriptor {
        name: "downscale_intro".to_owned(),
        in_out_of_range: None,
        out_out_of_range: Some(OutOfRange::None),
        tracks: uniform_scale_tracks(keys),
    }
}

/// Icon entrance: spins in a full turn while popping from zero scale.
pub fn icon_popup() -> AnimationDescriptor {
    let rotation = PropertyTrack::new(
        "rotation",
        vec![
            Keyframe::number(0.0, -FULL_TURN)
                .with_easing(Ease::QuadraticOut)
                .with_space(SpaceKind::Absolute),
            Keyframe::number(1.0, 0.0).with_space(SpaceKind::Absolute),
        ],
    )
    .with_out_of_range(OutOfRange::Extend);

    let scale_keys = vec![
        Keyframe::number(0.0, 0.001)
            .with_easing(Ease::QuadraticOut)
            .with_space(SpaceKind::Absolute),
        Keyframe::number(1.0, 1.0).with_space(SpaceKind::Absolute),
    ];

    let mut tracks = vec![rotation];
    tracks.extend(uniform_scale_tracks(scale_keys));

    AnimationDescriptor {
        name: "icon_popup".to_owned(),
        in_out_of_range: None,
        out_out_of_range: Some(OutOfRange::None),
        tracks,
    }
}

fn alpha_ramp(name: &str, from: f64, to: f64, out: OutOfRange) -> AnimationDescriptor {
    AnimationDescriptor {
        name: name.to_owned(),
        in_out_of_range: Some(OutOfRange::Extend),
        out_out_of_range: Some(out),
        tracks: vec![
            PropertyTrack::new(
                "alpha",
                vec![
                    Keyframe::number(0.0, from)
                        .with_easing(Ease::Linear)
                        .with_space(SpaceKind::Absolute),
                    Keyframe::number(1.0, to).with_space(SpaceKind::Absolute),
                ],
            )
            .with_out_of_range(OutOfRange::Extend),
        ],
    }
}

/// Alpha ramp 0 → 1; holds fully opaque after the ramp.
pub fn fade_in() -> AnimationDescriptor {
    alpha_ramp("fade_in", 0.0, 1.0, OutOfRange::Extend)
}

/// Alpha ramp 1 → 0; reverts to the base alpha once the animation ends.
pub fn fade_out() -> AnimationDescriptor {
    alpha_ramp("fade_out", 1.0, 0.0, OutOfRange::None)
}

/// Emphasis: unwinds a full turn of rotation onto the resting orientation.
pub fn spin_in() -> AnimationDescriptor {
    AnimationDescriptor {
        name: "spin_in".to_owned(),
        in_out_of_range: None,
        out_out_of_range: Some(OutOfRange::None),
        tracks: vec![
            PropertyTrack::new(
                "rotation",
                vec![
                    Keyframe::number(0.0, FULL_TURN)
                        .with_easing(Ease::QuarticOut)
                        .with_space(SpaceKind::Absolute),
                    Keyframe::number(1.0, 0.0).with_space(SpaceKind::Absolute),
                ],
            )
            .with_out_of_range(OutOfRange::Extend),
        ],
    }
}

/// Entrance: slides vertically from `from_y` to `to_y` over `duration_secs`
/// with a decelerating ease.
pub fn slide_in_vertical(from_y: f64, to_y: f64, duration_secs: f64) -> AnimationDescriptor {
    AnimationDescriptor {
        name: "slide_in_vertical".to_owned(),
        in_out_of_range: None,
        out_out_of_range: Some(OutOfRange::None),
        tracks: vec![
            PropertyTrack::new(
                "positionY",
                vec![
                    Keyframe::number(0.0, from_y)
                        .with_easing(Ease::QuarticOut)
                        .with_space(SpaceKind::Absolute),
                    Keyframe::number(duration_secs, to_y).with_space(SpaceKind::Absolute),
                ],
            )
            .with_out_of_range(OutOfRange::Extend),
        ],
    }
}

/// Pointer-tap gesture: pops in with overshoot, holds, squashes for the
/// "click", releases, while the whole element lifts 300 units. The lift is
/// authored additively so the gesture composes with any resting position.
pub fn tap_gesture() -> AnimationDescriptor {
    let scale_keys = vec![
        Keyframe::number(0.0, 0.001)
            .with_easing(Ease::BackOut)
            .with_space(SpaceKind::Absolute),
        Keyframe::number(0.2, 1.0).with_space(SpaceKind::Absolute),
        // Arrived, hold before the click.
        Keyframe::number(0.5, 1.0).with_space(SpaceKind::Absolute),
        Keyframe::number(0.55, 0.5)
            .with_easing(Ease::QuarticOut)
            .with_space(SpaceKind::Absolute),
        Keyframe::number(0.7, 1.0).with_space(SpaceKind::Absolute),
    ];

    let lift = PropertyTrack::new(
        "positionY",
        vec![
            Keyframe::number(0.0, 0.0)
                .with_easing(Ease::Linear)
                .with_space(SpaceKind::RelativeAdditive),
            Keyframe::number(0.3, -300.0)
                .with_easing(Ease::Linear)
                .with_space(SpaceKind::RelativeAdditive),
            Keyframe::number(1.0, -300.0)
                .with_easing(Ease::Linear)
                .with_space(SpaceKind::RelativeAdditive),
        ],
    )
    .with_out_of_range(OutOfRange::Extend);

    let mut tracks = uniform_scale_tracks(scale_keys);
    tracks.push(lift);

    AnimationDescriptor {
        name: "tap_gesture".to_owned(),
        in_out_of_range: Some(OutOfRange::Extend),
        out_out_of_range: Some(OutOfRange::Extend),
        tracks,
    }
}

/// Stepped text cycle: the content switches to each entry's string at its
/// time. Entries must be in non-decreasing time order.
pub fn timed_text_sequence(entries: &[(f64, &str)]) -> AnimationDescriptor {
    AnimationDescriptor {
        name: "timed_text_sequence".to_owned(),
        in_out_of_range: None,
        out_out_of_range: Some(OutOfRange::Extend),
        tracks: vec![PropertyTrack::new(
            "text",
            entries
                .iter()
                .map(|&(time, text)| Keyframe::text(time, text))
                .collect(),
        )],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/presets.rs"]
mod tests;
