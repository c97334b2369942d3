/// Easing functions used to map normalized animation progress.
///
/// Variant names follow the host engine's animation contract (curve family +
/// direction). A keyframe's easing shapes the segment toward the next key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Sinusoidal ease-in.
    SinusoidalIn,
    /// Sinusoidal ease-out.
    SinusoidalOut,
    /// Sinusoidal ease-in/out.
    SinusoidalInOut,
    /// Quadratic ease-in.
    QuadraticIn,
    /// Quadratic ease-out.
    QuadraticOut,
    /// Quadratic ease-in/out.
    QuadraticInOut,
    /// Quartic ease-in.
    QuarticIn,
    /// Quartic ease-out.
    QuarticOut,
    /// Quartic ease-in/out: `8t⁴` below the midpoint, mirrored above it.
    QuarticInOut,
    /// Quintic ease-in.
    QuinticIn,
    /// Quintic ease-out.
    QuinticOut,
    /// Quintic ease-in/out.
    QuinticInOut,
    /// Overshooting ease-out (settles back onto the target).
    BackOut,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SinusoidalIn => 1.0 - (t * std::f64::consts::FRAC_PI_2).cos(),
            Self::SinusoidalOut => (t * std::f64::consts::FRAC_PI_2).sin(),
            Self::SinusoidalInOut => 0.5 * (1.0 - (t * std::f64::consts::PI).cos()),
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::QuarticIn => t.powi(4),
            Self::QuarticOut => 1.0 - (1.0 - t).powi(4),
            Self::QuarticInOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - 8.0 * (1.0 - t).powi(4)
                }
            }
            Self::QuinticIn => t.powi(5),
            Self::QuinticOut => 1.0 - (1.0 - t).powi(5),
            Self::QuinticInOut => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - 16.0 * (1.0 - t).powi(5)
                }
            }
            Self::BackOut => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
