//! Luma key: derives an alpha mask from source luminance to strip a black
//! matte from a video clip, then premultiplies the mask into the color.
//!
//! Pixels below 0.35 luminance go fully transparent, pixels above 0.45 stay
//! opaque, and the band between interpolates smoothly so the matte boundary
//! has no hard edge. Premultiplication is required before over/additive
//! compositing to avoid dark fringing.

use crate::foundation::core::Rgba;
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::smoothstep;

/// GLSL fragment program for the GPU path. Uniform: `uSampler`.
pub const FRAGMENT_SRC: &str = r#"
precision highp float;
varying vec2 vTextureCoord;
uniform sampler2D uSampler;

const float threshold = 0.4;
const float smoothing = 0.05;

void main() {
    vec4 color = texture2D(uSampler, vTextureCoord);

    float luminance = dot(color.rgb, vec3(0.299, 0.587, 0.114));
    float alpha = smoothstep(threshold - smoothing, threshold + smoothing, luminance);

    vec4 outputColor = vec4(color.rgb, color.a * alpha);
    outputColor.rgb *= outputColor.a;

    gl_FragColor = outputColor;
}
"#;

/// Luminance level considered the matte boundary.
pub const THRESHOLD: f32 = 0.4;

/// Half-width of the smooth transition band around [`THRESHOLD`].
pub const SMOOTHING: f32 = 0.05;

/// Rec. 601 luminance of a straight-alpha color.
pub fn luminance(color: Rgba) -> f32 {
    0.299 * color.r + 0.587 * color.g + 0.114 * color.b
}

/// Key one pixel: derive alpha from luminance, combine with the source alpha,
/// and premultiply it into the color channels.
///
/// The returned [`Rgba`] carries premultiplied color: its `r`/`g`/`b` are
/// already scaled by `a`.
pub fn key(color: Rgba) -> Rgba {
    let alpha = smoothstep(THRESHOLD - SMOOTHING, THRESHOLD + SMOOTHING, luminance(color));
    let a = color.a * alpha;
    Rgba {
        r: color.r * a,
        g: color.g * a,
        b: color.b * a,
        a,
    }
}

/// Key a straight-alpha RGBA8 buffer in place, producing premultiplied
/// keyed pixels. The buffer length must be a multiple of 4.
pub fn key_in_place(frame: &mut [u8]) -> MotionResult<()> {
    if !frame.len().is_multiple_of(4) {
        return Err(MotionError::shader(
            "luma key expects an rgba8 buffer with length a multiple of 4",
        ));
    }
    for px in frame.chunks_exact_mut(4) {
        let color = Rgba::rgba(
            f32::from(px[0]) / 255.0,
            f32::from(px[1]) / 255.0,
            f32::from(px[2]) / 255.0,
            f32::from(px[3]) / 255.0,
        );
        let keyed = key(color);
        // key() already premultiplied; write channels back directly.
        px[0] = (keyed.r.clamp(0.0, 1.0) * 255.0).round() as u8;
        px[1] = (keyed.g.clamp(0.0, 1.0) * 255.0).round() as u8;
        px[2] = (keyed.b.clamp(0.0, 1.0) * 255.0).round() as u8;
        px[3] = (keyed.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/shaders/luma_key.rs"]
mod tests;
