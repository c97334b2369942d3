use super::*;

fn text_track(desc: &AnimationDescriptor) -> &PropertyTrack {
    desc.track("text").expect("text track")
}

fn position_track(desc: &AnimationDescriptor) -> &PropertyTrack {
    desc.track("positionY").expect("positionY track")
}

#[test]
fn count_up_final_key_is_exact_at_total_duration() {
    for count in [1u32, 7, 19, 20, 137] {
        let desc = count_up(count, 500.0, 6.0);
        let last = text_track(&desc).keyframes.last().unwrap();
        assert_eq!(last.time, 6.0);
        assert_eq!(last.value, TrackValue::Text(count.to_string()));
    }
}

#[test]
fn count_up_zero_emits_single_text_key_plus_final() {
    let desc = count_up(0, 500.0, 6.0);
    let keys = &text_track(&desc).keyframes;
    assert_eq!(keys[0], Keyframe::text(0.0, "0"));
    // The forced key at total duration still lands.
    assert_eq!(keys.last().unwrap().time, 6.0);
    assert_eq!(keys.last().unwrap().value, TrackValue::Text("0".to_owned()));
}

#[test]
fn count_up_emits_count_plus_two_text_keys() {
    let desc = count_up(20, 500.0, 6.0);
    assert_eq!(text_track(&desc).keyframes.len(), 22);
}

#[test]
fn count_up_cadence_follows_the_divider() {
    // Divider 2 at count 20: counting occupies half the duration.
    let desc = count_up(20, 500.0, 6.0);
    let pos = &position_track(&desc).keyframes;
    assert_eq!(pos[1].time, 3.0);

    // Divider 6 at count 0: entrance ends at a sixth of the duration.
    let desc = count_up(0, 500.0, 6.0);
    assert_eq!(position_track(&desc).keyframes[1].time, 1.0);

    // Counts past 20 clamp to divider 2.
    let desc = count_up(40, 500.0, 6.0);
    assert_eq!(position_track(&desc).keyframes[1].time, 3.0);
}

#[test]
fn count_up_text_keys_are_time_ordered_and_monotonic() {
    let desc = count_up(37, 500.0, 6.0);
    let keys = &text_track(&desc).keyframes;
    let mut prev_time = -1.0;
    let mut prev_value = -1i64;
    for key in keys {
        assert!(key.time >= prev_time);
        prev_time = key.time;
        let v: i64 = key.value.as_text().unwrap().parse().unwrap();
        assert!(v >= prev_value);
        prev_value = v;
    }
    assert_eq!(prev_value, 37);
}

#[test]
fn count_up_midpoint_key_matches_the_quartic_curve() {
    // quartic_in_out(0.5) == 0.5, so the middle key of count 20 shows "10".
    let desc = count_up(20, 500.0, 6.0);
    let keys = &text_track(&desc).keyframes;
    assert_eq!(keys[10].value, TrackValue::Text("10".to_owned()));
    assert!((keys[10].time - 1.5).abs() < 1e-12);
}

#[test]
fn count_up_entrance_slides_into_rest_position() {
    let desc = count_up(12, 480.0, 6.0);
    let pos = &position_track(&desc).keyframes;
    assert_eq!(pos.len(), 2);
    assert_eq!(pos[0].value, TrackValue::Number(-100.0));
    assert_eq!(pos[0].easing, Some(Ease::SinusoidalOut));
    assert_eq!(pos[1].value, TrackValue::Number(480.0));
    assert_eq!(desc.out_out_of_range, Some(OutOfRange::None));
    desc.validate().unwrap();
}

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn scrolling_texts_trailing_keys_span_the_window() {
    let desc = scrolling_texts(&texts(&["a", "b", "c"]), 540.0);
    let content = text_track(&desc).keyframes.clone();
    assert_eq!(content.last().unwrap().time, 20.0);
    assert_eq!(content.last().unwrap().value, TrackValue::Text("c".to_owned()));
    let pos = position_track(&desc).keyframes.clone();
    assert_eq!(pos.last().unwrap().time, 20.0);
    assert_eq!(pos.last().unwrap().value, TrackValue::Number(540.0));
    assert_eq!(desc.time_span(), Some((0.0, 20.0)));
}

#[test]
fn scrolling_texts_slots_divide_the_active_window() {
    let desc = scrolling_texts(&texts(&["a", "b", "c"]), 540.0);
    let slot = 10.0 / 3.0;
    let content = &text_track(&desc).keyframes;
    assert_eq!(content.len(), 4);
    for (i, key) in content.iter().take(3).enumerate() {
        assert!((key.time - i as f64 * slot).abs() < 1e-12);
    }
}

#[test]
fn scrolling_texts_last_slot_never_departs() {
    let center = 540.0;
    let desc = scrolling_texts(&texts(&["a", "b", "c"]), center);
    let pos = &position_track(&desc).keyframes;
    let last_slot_start = 2.0 * (10.0 / 3.0);
    for key in pos.iter().filter(|k| k.time >= last_slot_start) {
        let v = key.value.as_number().unwrap();
        assert!(v >= center, "last slot departed to {v}");
    }
    // Earlier slots do depart past the center.
    assert!(
        pos.iter()
            .any(|k| k.value.as_number().unwrap() < center)
    );
}

#[test]
fn scrolling_texts_keys_are_time_ordered() {
    for n in 1..=6 {
        let items: Vec<String> = (0..n).map(|i| format!("t{i}")).collect();
        let desc = scrolling_texts(&items, 0.0);
        desc.validate().unwrap();
        assert_eq!(desc.out_out_of_range, Some(OutOfRange::Extend));
    }
}

#[test]
fn scrolling_texts_single_item_holds_at_center() {
    let desc = scrolling_texts(&texts(&["only"]), 100.0);
    let pos = &position_track(&desc).keyframes;
    // enter, arrive, hold, trailing key.
    assert_eq!(pos.len(), 4);
    assert_eq!(pos[2].value, TrackValue::Number(100.0));
}

#[test]
fn scrolling_texts_empty_input_yields_empty_tracks() {
    let desc = scrolling_texts(&[], 100.0);
    assert!(text_track(&desc).keyframes.is_empty());
    assert!(position_track(&desc).keyframes.is_empty());
}
