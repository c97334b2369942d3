use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        MotionError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        MotionError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(MotionError::shader("x").to_string().contains("shader error:"));
    assert!(
        MotionError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let err: MotionError = anyhow::anyhow!("root cause").into();
    assert!(err.to_string().contains("root cause"));
}
