use crate::animation::ease::Ease;
use crate::foundation::error::{MotionError, MotionResult};

/// Value carried by a keyframe.
///
/// Numbers interpolate between keys; text steps to the new value at the key's
/// time (no interpolation is defined for string-valued properties).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum TrackValue {
    /// A scalar property value (position, scale, alpha, rotation, ...).
    Number(f64),
    /// A text-content property value.
    Text(String),
}

impl TrackValue {
    /// The numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// The text payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl From<f64> for TrackValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for TrackValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for TrackValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// How a keyframe's value combines with the property's base (unanimated) value.
///
/// The choice of space is part of the animation's authored contract, never
/// inferred from the data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SpaceKind {
    /// The keyframe value replaces the base value.
    Absolute,
    /// The keyframe value is added to the base value.
    RelativeAdditive,
    /// The keyframe value multiplies the base value.
    RelativeMultiplicative,
}

/// Behavior of a property before its first or after its last keyframe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OutOfRange {
    /// Revert to the unanimated base value outside the keyed range.
    None,
    /// Hold the boundary keyframe's value outside the keyed range.
    Extend,
}

/// One keyframe on a property track.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Seconds relative to the owning animation's local clock, `>= 0`.
    pub time: f64,
    /// Value at `time`.
    pub value: TrackValue,
    /// Easing applied toward the next keyframe. `None` means linear.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Ease>,
    /// Interpolation space. `None` means [`SpaceKind::Absolute`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<SpaceKind>,
}

impl Keyframe {
    /// Numeric keyframe with default easing and space.
    pub fn number(time: f64, value: f64) -> Self {
        Self {
            time,
            value: TrackValue::Number(value),
            easing: None,
            space: None,
        }
    }

    /// Text keyframe with default easing and space.
    pub fn text(time: f64, value: impl Into<String>) -> Self {
        Self {
            time,
            value: TrackValue::Text(value.into()),
            easing: None,
            space: None,
        }
    }

    /// Set the easing applied toward the next keyframe.
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Set the interpolation space for this keyframe.
    pub fn with_space(mut self, space: SpaceKind) -> Self {
        self.space = Some(space);
        self
    }
}

/// An ordered keyframe sequence animating one named property.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyTrack {
    /// Name of the animated property (engine-side binding key).
    pub property: String,
    /// Keyframes in non-decreasing time order.
    pub keyframes: Vec<Keyframe>,
    /// Before-start policy override. `None` inherits the descriptor default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_out_of_range: Option<OutOfRange>,
    /// After-end policy override. `None` inherits the descriptor default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_out_of_range: Option<OutOfRange>,
}

impl PropertyTrack {
    /// Track with inherited out-of-range policies.
    pub fn new(property: impl Into<String>, keyframes: Vec<Keyframe>) -> Self {
        Self {
            property: property.into(),
            keyframes,
            in_out_of_range: None,
            out_out_of_range: None,
        }
    }

    /// Set both out-of-range policy overrides.
    pub fn with_out_of_range(mut self, policy: OutOfRange) -> Self {
        self.in_out_of_range = Some(policy);
        self.out_out_of_range = Some(policy);
        self
    }

    /// Validate keyframe ordering and time-domain invariants.
    pub fn validate(&self) -> MotionResult<()> {
        if self.property.is_empty() {
            return Err(MotionError::validation("track property name is empty"));
        }
        for k in &self.keyframes {
            if !k.time.is_finite() || k.time < 0.0 {
                return Err(MotionError::validation(format!(
                    "track '{}' has a key at invalid time {}",
                    self.property, k.time
                )));
            }
        }
        if !self.keyframes.windows(2).all(|w| w[0].time <= w[1].time) {
            return Err(MotionError::validation(format!(
                "track '{}' keys must be in non-decreasing time order",
                self.property
            )));
        }
        Ok(())
    }
}

/// Immutable animation unit handed to the external timeline engine.
///
/// Built once by a generator or preset constructor; the engine attaches it to
/// a visual element and evaluates it per frame. Descriptor-level out-of-range
/// policies are defaults that individual tracks may override.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationDescriptor {
    /// Identifying name for the animation.
    pub name: String,
    /// Default before-start policy for tracks without an override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_out_of_range: Option<OutOfRange>,
    /// Default after-end policy for tracks without an override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_out_of_range: Option<OutOfRange>,
    /// Property tracks, one per animated property.
    pub tracks: Vec<PropertyTrack>,
}

impl AnimationDescriptor {
    /// The track animating `property`, if any.
    pub fn track(&self, property: &str) -> Option<&PropertyTrack> {
        self.tracks.iter().find(|t| t.property == property)
    }

    /// Earliest and latest key time across all tracks, `None` if no keys exist.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        let mut span: Option<(f64, f64)> = None;
        for track in &self.tracks {
            let (Some(first), Some(last)) = (track.keyframes.first(), track.keyframes.last())
            else {
                continue;
            };
            span = Some(match span {
                Some((lo, hi)) => (lo.min(first.time), hi.max(last.time)),
                None => (first.time, last.time),
            });
        }
        span
    }

    /// Resolved before-start policy for `track` (track override, else
    /// descriptor default, else revert to base).
    pub fn in_policy(&self, track: &PropertyTrack) -> OutOfRange {
        track
            .in_out_of_range
            .or(self.in_out_of_range)
            .unwrap_or(OutOfRange::None)
    }

    /// Resolved after-end policy for `track`.
    pub fn out_policy(&self, track: &PropertyTrack) -> OutOfRange {
        track
            .out_out_of_range
            .or(self.out_out_of_range)
            .unwrap_or(OutOfRange::None)
    }

    /// Validate the descriptor and all of its tracks.
    pub fn validate(&self) -> MotionResult<()> {
        if self.name.is_empty() {
            return Err(MotionError::validation("descriptor name is empty"));
        }
        for track in &self.tracks {
            track.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/descriptor.rs"]
mod tests;
