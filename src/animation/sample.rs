//! Reference evaluation of descriptor tracks.
//!
//! The evaluating engine owns per-frame playback; these functions pin down the
//! descriptor contract (spaces, out-of-range policies, step-vs-lerp) as
//! executable semantics for the CPU pipeline and for tests.

use crate::animation::descriptor::{
    AnimationDescriptor, Keyframe, OutOfRange, PropertyTrack, SpaceKind, TrackValue,
};
use crate::animation::ease::Ease;

/// Combine a keyframe's value with the property's base value per the key's
/// interpolation space.
fn resolve(key: &Keyframe, base: &TrackValue) -> TrackValue {
    let space = key.space.unwrap_or(SpaceKind::Absolute);
    match (space, &key.value, base) {
        (SpaceKind::Absolute, value, _) => value.clone(),
        (SpaceKind::RelativeAdditive, TrackValue::Number(v), TrackValue::Number(b)) => {
            TrackValue::Number(b + v)
        }
        (SpaceKind::RelativeMultiplicative, TrackValue::Number(v), TrackValue::Number(b)) => {
            TrackValue::Number(b * v)
        }
        // Relative spaces are meaningless for text; the key value wins.
        (_, value, _) => value.clone(),
    }
}

impl PropertyTrack {
    /// Sample this track at `time` against the property's base value.
    ///
    /// `in_policy` / `out_policy` are the resolved out-of-range policies
    /// (track override already applied over the descriptor default). Numbers
    /// lerp under the left key's easing; text steps at key times; zero-length
    /// and mixed-type segments hold the left key. An empty track returns the
    /// base value.
    pub fn value_at(
        &self,
        time: f64,
        base: &TrackValue,
        in_policy: OutOfRange,
        out_policy: OutOfRange,
    ) -> TrackValue {
        let (Some(first), Some(last)) = (self.keyframes.first(), self.keyframes.last()) else {
            return base.clone();
        };

        if time < first.time {
            return match in_policy {
                OutOfRange::None => base.clone(),
                OutOfRange::Extend => resolve(first, base),
            };
        }
        if time > last.time {
            return match out_policy {
                OutOfRange::None => base.clone(),
                OutOfRange::Extend => resolve(last, base),
            };
        }

        let idx = self.keyframes.partition_point(|k| k.time <= time);
        if idx == 0 {
            return resolve(first, base);
        }
        if idx >= self.keyframes.len() {
            return resolve(last, base);
        }

        let a = &self.keyframes[idx - 1];
        let b = &self.keyframes[idx];
        let denom = b.time - a.time;
        if denom <= 0.0 {
            return resolve(a, base);
        }

        let t = (time - a.time) / denom;
        let te = a.easing.unwrap_or(Ease::Linear).apply(t);
        match (resolve(a, base), resolve(b, base)) {
            (TrackValue::Number(x), TrackValue::Number(y)) => TrackValue::Number(x + (y - x) * te),
            // Text (and any mixed segment) steps: hold the left key until the
            // right key's time is reached.
            (left, _) => left,
        }
    }
}

impl AnimationDescriptor {
    /// Sample `property` at `time` against its base value, resolving the
    /// track's out-of-range policies through the descriptor defaults.
    ///
    /// Returns `None` when no track animates `property`.
    pub fn value_at(&self, property: &str, time: f64, base: &TrackValue) -> Option<TrackValue> {
        let track = self.track(property)?;
        Some(track.value_at(time, base, self.in_policy(track), self.out_policy(track)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sample.rs"]
mod tests;
