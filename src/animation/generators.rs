//! Procedural descriptor builders invoked once per scene construction.

use crate::animation::descriptor::{
    AnimationDescriptor, Keyframe, OutOfRange, PropertyTrack, TrackValue,
};
use crate::animation::ease::Ease;
use crate::foundation::math::remap;

/// Build a count-up animation: a `text` track that counts from 0 to
/// `target_count` with a slow-fast-slow cadence, and a `positionY` track that
/// slides the display up from offscreen into `rest_position_y` exactly as the
/// counting finishes.
///
/// Low counts get a slow cadence (the counting occupies as little as 1/6 of
/// `total_duration_secs`, holding the final value for the remainder); counts
/// at or above 20 occupy half the duration. The final `text` key is forced to
/// `target_count` at exactly `total_duration_secs` so the displayed value at
/// end-of-animation is exact even where the floored curve undershoots. The
/// descriptor's after-end default is [`OutOfRange::None`]: past the last key
/// the properties revert to their base values, so callers relying on a held
/// final value must keep the animation active for the clip's lifetime.
///
/// `total_duration_secs` must be positive; this is a caller contract, not
/// checked here.
#[tracing::instrument(level = "debug")]
pub fn count_up(
    target_count: u32,
    rest_position_y: f64,
    total_duration_secs: f64,
) -> AnimationDescriptor {
    let time_divider = remap(f64::from(target_count), 0.0, 20.0, 6.0, 2.0);
    let active_span = total_duration_secs / time_divider;
    tracing::debug!(time_divider, active_span, "count-up cadence");

    let mut text_keys = Vec::with_capacity(target_count as usize + 2);
    if target_count > 0 {
        let count = f64::from(target_count);
        for i in 0..=target_count {
            let progress = f64::from(i) / count;
            let interpolated = Ease::QuarticInOut.apply(progress);
            text_keys.push(Keyframe {
                time: progress * active_span,
                value: TrackValue::Text(format!("{}", (interpolated * count).floor() as u64)),
                easing: None,
                space: None,
            });
        }
    } else {
        text_keys.push(Keyframe::text(0.0, "0"));
    }

    // Forced exact final key; for large counts this can duplicate the value of
    // the floored curve's last key at a later time. Downstream engines rely on
    // a stable key landing exactly at the declared duration, so the redundancy
    // stays.
    text_keys.push(Keyframe::text(total_duration_secs, target_count.to_string()));

    AnimationDescriptor {
        name: "count_up".to_owned(),
        in_out_of_range: None,
        out_out_of_range: Some(OutOfRange::None),
        tracks: vec![
            PropertyTrack::new("text", text_keys),
            PropertyTrack::new(
                "positionY",
                vec![
                    Keyframe::number(0.0, -100.0).with_easing(Ease::SinusoidalOut),
                    Keyframe::number(active_span, rest_position_y),
                ],
            ),
        ],
    }
}

/// Build a scrolling carousel that cycles `texts` through a fixed viewport
/// centered at `center_position_y`.
///
/// The animation's declared window is a fixed 20 seconds; only the first 10
/// are used for active cycling and the last value holds for the remainder,
/// leaving room for a following scene transition. Each text gets an equal slot
/// of the active window: it enters from 200 below center, eases into center
/// over the first third of the slot, stays for the remaining two thirds, then
/// departs 200 above center as the next text enters. The last text holds at
/// center instead of departing. Both tracks carry trailing keys at t=20 so the
/// descriptor spans the full window regardless of how many texts were given,
/// and the descriptor-level after-end default is [`OutOfRange::Extend`].
///
/// `texts` must be non-empty; an empty slice yields a descriptor with empty
/// tracks (caller contract, not checked here).
#[tracing::instrument(level = "debug", skip(texts), fields(texts = texts.len()))]
pub fn scrolling_texts(texts: &[String], center_position_y: f64) -> AnimationDescriptor {
    const WINDOW_SECS: f64 = 20.0;
    const ACTIVE_SECS: f64 = 10.0;

    let slot = ACTIVE_SECS / texts.len() as f64;
    let fast_transition = 0.33 * slot;
    let fast_stay = 0.66 * slot;

    let mut content_keys = Vec::with_capacity(texts.len() + 1);
    let mut position_keys = Vec::with_capacity(texts.len() * 3 + 1);

    for (i, text) in texts.iter().enumerate() {
        let is_last = i == texts.len() - 1;
        let slot_start = i as f64 * slot;

        content_keys.push(Keyframe::text(slot_start, text.clone()));

        position_keys.push(
            Keyframe::number(slot_start, center_position_y + 200.0).with_easing(Ease::QuinticOut),
        );
        position_keys.push(
            Keyframe::number(slot_start + fast_transition, center_position_y)
                .with_easing(Ease::QuinticIn),
        );
        position_keys.push(Keyframe::number(
            slot_start + fast_transition + fast_stay,
            if is_last {
                center_position_y
            } else {
                center_position_y - 200.0
            },
        ));
    }

    if let Some(last) = texts.last() {
        content_keys.push(Keyframe::text(WINDOW_SECS, last.clone()));
        position_keys.push(Keyframe::number(WINDOW_SECS, center_position_y));
    }

    AnimationDescriptor {
        name: "scrolling_texts".to_owned(),
        in_out_of_range: None,
        out_out_of_range: Some(OutOfRange::Extend),
        tracks: vec![
            PropertyTrack {
                property: "positionY".to_owned(),
                keyframes: position_keys,
                in_out_of_range: None,
                out_out_of_range: Some(OutOfRange::Extend),
            },
            PropertyTrack {
                property: "text".to_owned(),
                keyframes: content_keys,
                in_out_of_range: None,
                out_out_of_range: Some(OutOfRange::Extend),
            },
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/generators.rs"]
mod tests;
