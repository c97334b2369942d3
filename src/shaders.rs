//! Per-pixel programs supplied to the host engine.
//!
//! Each shader is exposed twice: a GLSL fragment source string for the GPU
//! path (the engine binds the named uniforms) and a CPU reference that
//! computes the same math per pixel. The CPU side backs the software pipeline
//! and gives the numeric edge cases an executable home for tests.

/// Time-animated four-corner gradient backdrop.
pub mod gradient;
/// Luminance-keyed matte removal.
pub mod luma_key;
