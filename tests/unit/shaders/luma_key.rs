use super::*;

#[test]
fn luminance_uses_standard_weights() {
    assert_eq!(luminance(Rgba::rgb(1.0, 0.0, 0.0)), 0.299);
    assert_eq!(luminance(Rgba::rgb(0.0, 1.0, 0.0)), 0.587);
    assert_eq!(luminance(Rgba::rgb(0.0, 0.0, 1.0)), 0.114);
    assert!((luminance(Rgba::rgb(1.0, 1.0, 1.0)) - 1.0).abs() < 1e-6);
}

#[test]
fn black_keys_to_fully_transparent() {
    let out = key(Rgba::rgb(0.0, 0.0, 0.0));
    assert_eq!(out.a, 0.0);
    assert_eq!((out.r, out.g, out.b), (0.0, 0.0, 0.0));
}

#[test]
fn white_passes_through_unmodified() {
    let out = key(Rgba::rgb(1.0, 1.0, 1.0));
    assert!((out.a - 1.0).abs() < 1e-6);
    assert!((out.r - 1.0).abs() < 1e-6);
}

#[test]
fn threshold_pixel_keys_to_half_alpha() {
    // A gray at exactly the threshold luminance.
    let gray = Rgba::rgb(THRESHOLD, THRESHOLD, THRESHOLD);
    let out = key(gray);
    assert!((out.a - 0.5).abs() < 1e-5);
    // Premultiplied: color channels carry the derived alpha.
    assert!((out.r - THRESHOLD * out.a).abs() < 1e-6);
}

#[test]
fn band_edges_are_hard_boundaries() {
    let below = Rgba::rgb(0.34, 0.34, 0.34);
    assert_eq!(key(below).a, 0.0);
    let above = Rgba::rgb(0.46, 0.46, 0.46);
    assert!((key(above).a - 1.0).abs() < 1e-6);
}

#[test]
fn source_alpha_scales_the_derived_alpha() {
    let out = key(Rgba::rgba(1.0, 1.0, 1.0, 0.5));
    assert!((out.a - 0.5).abs() < 1e-6);
    assert!((out.r - 0.5).abs() < 1e-6);
}

#[test]
fn key_in_place_converts_a_buffer() {
    // One black, one white, one mid-band gray pixel, straight alpha 255.
    let mut frame = vec![
        0, 0, 0, 255, //
        255, 255, 255, 255, //
        102, 102, 102, 255, // ~0.4 luminance
    ];
    key_in_place(&mut frame).unwrap();
    assert_eq!(&frame[0..4], &[0, 0, 0, 0]);
    assert_eq!(&frame[4..8], &[255, 255, 255, 255]);
    // The gray lands mid-band: partially transparent, premultiplied.
    let a = frame[11];
    assert!(a > 0 && a < 255);
    assert!(frame[8] < 102);
}

#[test]
fn key_in_place_rejects_ragged_buffers() {
    let mut frame = vec![0u8; 7];
    assert!(key_in_place(&mut frame).is_err());
}
