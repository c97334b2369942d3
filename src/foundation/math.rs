use crate::foundation::core::Vec2;

/// Linearly rescale `value` from `[in_min, in_max]` to `[out_min, out_max]`,
/// clamping the input to `[in_min, in_max]` first.
///
/// The output range may be reversed (`out_min > out_max`); the result then
/// decreases as the input grows. Callers must guarantee `in_min != in_max` —
/// equal input bounds divide by zero and yield NaN.
pub fn remap(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    // Branch-based clamp: total for any bound ordering, unlike f64::clamp.
    let mut v = value;
    if v < in_min {
        v = in_min;
    }
    if v > in_max {
        v = in_max;
    }

    ((v - in_min) * (out_max - out_min)) / (in_max - in_min) + out_min
}

/// Uniform "cover" scale fitting a source rectangle over a target rectangle.
///
/// Returns the same factor on both axes, `max(tw/ow, th/oh)`: the source is
/// scaled just enough to fully cover the target, cropping overflow. Never
/// anisotropic.
pub fn cover_scale(original_w: f64, original_h: f64, target_w: f64, target_h: f64) -> Vec2 {
    let scale_x = target_w / original_w;
    let scale_y = target_h / original_h;
    let scale = scale_x.max(scale_y);
    Vec2::new(scale, scale)
}

/// Hermite smoothstep between `a` and `b`, matching the GLSL builtin.
pub(crate) fn smoothstep(a: f32, b: f32, x: f32) -> f32 {
    if x <= a {
        return 0.0;
    }
    if x >= b {
        return 1.0;
    }
    let t = (x - a) / (b - a);
    (t * t * (3.0 - 2.0 * t)).clamp(0.0, 1.0)
}
