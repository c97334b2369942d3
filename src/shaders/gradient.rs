//! Background gradient: a slowly breathing, softly warping four-color field.
//!
//! Four quad corners orbit their nominal positions with sinusoidal motion;
//! each pixel recovers its quad-local coordinates by inverse bilinear
//! interpolation and blends two fixed palettes, whose mix oscillates on a
//! 10-second cycle. The solve reduces to a quadratic in `u`; axis-aligned and
//! near-degenerate configurations fall back to a linear solve so no pixel
//! divides by zero.

use rayon::prelude::*;

use crate::foundation::core::{Point, RenderSize, Rgba};
use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::math::smoothstep;

/// GLSL fragment program for the GPU path.
///
/// Uniforms: `uSampler` (unused texture slot the engine binds anyway),
/// `uTime` (elapsed seconds), `inputSize` (engine-supplied filter area),
/// `uDimensions` (render target width/height for aspect correction).
pub const FRAGMENT_SRC: &str = r#"
precision highp float;
varying vec2 vTextureCoord;

uniform sampler2D uSampler;
uniform float uTime;
uniform vec4 inputSize;
uniform vec2 uDimensions;

const vec4 color0_1 = vec4(0.459, 0.392, 0.915, 1.0); // #7664E9
const vec4 color1_1 = vec4(0.129, 0.063, 0.569, 1.0); // #211091
const vec4 color2_1 = vec4(0.322, 0.227, 0.925, 1.0); // #523AEB
const vec4 color3_1 = vec4(0.402, 0.353, 0.698, 1.0); // #665AB2

const vec4 color0_2 = vec4(0.988, 0.388, 0.635, 1.0); // #FC63A2
const vec4 color1_2 = vec4(0.909, 0.078, 0.419, 1.0); // #E8146B
const vec4 color2_2 = vec4(0.761, 0.251, 0.469, 1.0); // #C34078
const vec4 color3_2 = vec4(0.821, 0.471, 0.616, 1.0); // #D2779D

void main(void) {
    vec2 uv = vTextureCoord;
    uv.x *= uDimensions.x / uDimensions.y;

    vec2 P0 = vec2(0.31 + 0.1 * sin(uTime), 0.30 + 0.1 * cos(uTime));
    vec2 P1 = vec2(0.70 + 0.1 * cos(uTime), 0.32 + 0.1 * sin(uTime));
    vec2 P2 = vec2(0.28 + 0.1 * sin(uTime), 0.71 + 0.1 * cos(uTime));
    vec2 P3 = vec2(0.72 + 0.1 * cos(uTime), 0.75 + 0.1 * sin(uTime));

    vec2 Q = P0 - P2;
    vec2 R = P1 - P0;
    vec2 S = R + P2 - P3;
    vec2 T = P0 - uv;

    float u, t;

    if (Q.x == 0.0 && S.x == 0.0) {
        u = -T.x / R.x;
        t = (T.y + u * R.y) / (Q.y + u * S.y);
    } else if (Q.y == 0.0 && S.y == 0.0) {
        u = -T.y / R.y;
        t = (T.x + u * R.x) / (Q.x + u * S.x);
    } else {
        float A = S.x * R.y - R.x * S.y;
        float B = S.x * T.y - T.x * S.y + Q.x * R.y - R.x * Q.y;
        float C = Q.x * T.y - T.x * Q.y;

        if (abs(A) < 0.0001) {
            u = -C / B;
        } else {
            u = (-B + sqrt(max(B * B - 4.0 * A * C, 0.0))) / (2.0 * A);
        }

        t = (T.y + u * R.y) / (Q.y + u * S.y);
    }

    u = smoothstep(0.0, 1.0, clamp(u, 0.0, 1.0));
    t = smoothstep(0.0, 1.0, clamp(t, 0.0, 1.0));

    float cycleTime = mod(uTime, 10.0);
    float mixFactor = 0.5 + 0.5 * sin(2.0 * 3.14159265359 * cycleTime / 10.0);

    vec4 color0 = mix(color0_1, color0_2, mixFactor);
    vec4 color1 = mix(color1_1, color1_2, mixFactor);
    vec4 color2 = mix(color2_1, color2_2, mixFactor);
    vec4 color3 = mix(color3_1, color3_2, mixFactor);

    vec4 colorA = mix(color0, color1, u);
    vec4 colorB = mix(color2, color3, u);
    gl_FragColor = mix(colorA, colorB, t);
}
"#;

/// Start palette (purples), corner order P0..P3.
pub const PALETTE_A: [Rgba; 4] = [
    Rgba::rgb(0.459, 0.392, 0.915), // #7664E9
    Rgba::rgb(0.129, 0.063, 0.569), // #211091
    Rgba::rgb(0.322, 0.227, 0.925), // #523AEB
    Rgba::rgb(0.402, 0.353, 0.698), // #665AB2
];

/// End palette (pinks), corner order P0..P3.
pub const PALETTE_B: [Rgba; 4] = [
    Rgba::rgb(0.988, 0.388, 0.635), // #FC63A2
    Rgba::rgb(0.909, 0.078, 0.419), // #E8146B
    Rgba::rgb(0.761, 0.251, 0.469), // #C34078
    Rgba::rgb(0.821, 0.471, 0.616), // #D2779D
];

/// Palette oscillation period in seconds.
pub const CYCLE_SECS: f64 = 10.0;

/// Near-degenerate quadratic threshold for the linear fallback.
const DEGENERATE_EPS: f64 = 1e-4;

/// Quad corner positions at `time`. Each corner orbits its nominal position
/// with amplitude 0.1; the sin/cos phase mix differs per corner so the quad
/// warps instead of rotating rigidly.
pub fn corners(time: f64) -> [Point; 4] {
    let (s, c) = time.sin_cos();
    [
        Point::new(0.31 + 0.1 * s, 0.30 + 0.1 * c),
        Point::new(0.70 + 0.1 * c, 0.32 + 0.1 * s),
        Point::new(0.28 + 0.1 * s, 0.71 + 0.1 * c),
        Point::new(0.72 + 0.1 * c, 0.75 + 0.1 * s),
    ]
}

/// Palette mix factor at `time`: oscillates smoothly between 0 and 1 with a
/// [`CYCLE_SECS`] period.
pub fn palette_mix(time: f64) -> f64 {
    let cycle = time.rem_euclid(CYCLE_SECS);
    0.5 + 0.5 * (std::f64::consts::TAU * cycle / CYCLE_SECS).sin()
}

/// Recover quad-local coordinates `(u, t)` for `uv` given the four corners:
/// the parametric point where the bilinear blend of the corners equals `uv`.
///
/// The general case is a quadratic in `u`. Axis-aligned degenerate corner
/// configurations and near-zero leading coefficients are solved linearly; the
/// discriminant is floored at zero so points outside the quad blend like the
/// boundary instead of going NaN. Both coordinates are clamped to `[0, 1]`.
pub fn inverse_bilinear(uv: Point, corners: &[Point; 4]) -> (f64, f64) {
    let [p0, p1, p2, p3] = *corners;
    let q = p0 - p2;
    let r = p1 - p0;
    let s = r + p2.to_vec2() - p3.to_vec2();
    let t_vec = p0 - uv;

    let u;
    let t;
    if q.x == 0.0 && s.x == 0.0 {
        u = -t_vec.x / r.x;
        t = (t_vec.y + u * r.y) / (q.y + u * s.y);
    } else if q.y == 0.0 && s.y == 0.0 {
        u = -t_vec.y / r.y;
        t = (t_vec.x + u * r.x) / (q.x + u * s.x);
    } else {
        let a = s.x * r.y - r.x * s.y;
        let b = s.x * t_vec.y - t_vec.x * s.y + q.x * r.y - r.x * q.y;
        let c = q.x * t_vec.y - t_vec.x * q.y;

        if a.abs() < DEGENERATE_EPS {
            u = -c / b;
        } else {
            u = (-b + (b * b - 4.0 * a * c).max(0.0).sqrt()) / (2.0 * a);
        }

        t = (t_vec.y + u * r.y) / (q.y + u * s.y);
    }

    (u.clamp(0.0, 1.0), t.clamp(0.0, 1.0))
}

/// Shade one pixel: `uv` in `[0, 1]²` screen space, elapsed `time` in
/// seconds, `size` the render target dimensions (for aspect correction).
pub fn shade(uv: Point, time: f64, size: RenderSize) -> Rgba {
    let uv = Point::new(uv.x * size.aspect(), uv.y);
    let (u, t) = inverse_bilinear(uv, &corners(time));
    let u = smoothstep(0.0, 1.0, u as f32);
    let t = smoothstep(0.0, 1.0, t as f32);

    let mix = palette_mix(time) as f32;
    let c0 = Rgba::mix(PALETTE_A[0], PALETTE_B[0], mix);
    let c1 = Rgba::mix(PALETTE_A[1], PALETTE_B[1], mix);
    let c2 = Rgba::mix(PALETTE_A[2], PALETTE_B[2], mix);
    let c3 = Rgba::mix(PALETTE_A[3], PALETTE_B[3], mix);

    let a = Rgba::mix(c0, c1, u);
    let b = Rgba::mix(c2, c3, u);
    Rgba::mix(a, b, t)
}

/// Fill `frame` (premultiplied RGBA8, `size.width * size.height * 4` bytes)
/// with the gradient at `time`. Rows are shaded in parallel.
pub fn fill(frame: &mut [u8], size: RenderSize, time: f64) -> MotionResult<()> {
    let row_bytes = size.width as usize * 4;
    let expected = row_bytes * size.height as usize;
    if frame.len() != expected {
        return Err(MotionError::shader(format!(
            "gradient fill expects a {}x{}x4 buffer, got {} bytes",
            size.width,
            size.height,
            frame.len()
        )));
    }
    if row_bytes == 0 {
        return Ok(());
    }

    let w = f64::from(size.width);
    let h = f64::from(size.height);
    frame
        .par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            let v = (y as f64 + 0.5) / h;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let u = (x as f64 + 0.5) / w;
                let color = shade(Point::new(u, v), time, size);
                px.copy_from_slice(&color.to_premul_rgba8());
            }
        });
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/shaders/gradient.rs"]
mod tests;
