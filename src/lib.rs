//! recap-motion is the procedural animation and shader-compositing core of a
//! data-driven promotional-video renderer.
//!
//! The external timeline engine owns clips, playback, rasterization, and
//! encoding. This crate hands it two kinds of values:
//!
//! 1. **Animation descriptors** ([`AnimationDescriptor`]): immutable bundles of
//!    per-property keyframe tracks, built once at scene-construction time by
//!    the generators ([`count_up`], [`scrolling_texts`]) and the fixed presets,
//!    then evaluated frame-by-frame by the engine.
//! 2. **Fragment shader programs** ([`shaders::gradient`], [`shaders::luma_key`]):
//!    GLSL source strings for the GPU path, each paired with a bit-faithful CPU
//!    reference used by the CPU pipeline and by tests.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure construction**: generators and shader math are pure functions of
//!   their inputs; descriptors share no mutable state with their producer.
//! - **Premultiplied RGBA8** at the pixel boundary: the CPU fill passes output
//!   premultiplied pixels, matching the engine's compositor convention.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;

/// Fragment shader programs and their CPU reference implementations.
pub mod shaders;

pub use animation::descriptor::{
    AnimationDescriptor, Keyframe, OutOfRange, PropertyTrack, SpaceKind, TrackValue,
};
pub use animation::ease::Ease;
pub use animation::generators::{count_up, scrolling_texts};
pub use animation::presets::{
    downscale_intro, fade_in, fade_out, icon_popup, slide_in_vertical, spin_in, tap_gesture,
    timed_text_sequence,
};
pub use foundation::core::{Point, RenderSize, Rgba, Vec2};
pub use foundation::error::{MotionError, MotionResult};
pub use foundation::math::{cover_scale, remap};
