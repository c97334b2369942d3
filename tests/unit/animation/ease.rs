use super::*;

#[test]
fn quartic_in_out_anchors() {
    assert_eq!(Ease::QuarticInOut.apply(0.0), 0.0);
    assert_eq!(Ease::QuarticInOut.apply(0.5), 0.5);
    assert_eq!(Ease::QuarticInOut.apply(1.0), 1.0);
    assert!((Ease::QuarticInOut.apply(0.25) - 8.0 * 0.25f64.powi(4)).abs() < 1e-12);
}

#[test]
fn quartic_in_out_is_monotonic() {
    let mut prev = 0.0;
    for i in 0..=1000 {
        let t = f64::from(i) / 1000.0;
        let v = Ease::QuarticInOut.apply(t);
        assert!(v >= prev, "not monotonic at t={t}: {v} < {prev}");
        prev = v;
    }
}

#[test]
fn all_curves_hit_endpoints() {
    let curves = [
        Ease::Linear,
        Ease::SinusoidalIn,
        Ease::SinusoidalOut,
        Ease::SinusoidalInOut,
        Ease::QuadraticIn,
        Ease::QuadraticOut,
        Ease::QuadraticInOut,
        Ease::QuarticIn,
        Ease::QuarticOut,
        Ease::QuarticInOut,
        Ease::QuinticIn,
        Ease::QuinticOut,
        Ease::QuinticInOut,
        Ease::BackOut,
    ];
    for ease in curves {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::QuarticInOut.apply(-3.0), 0.0);
    assert_eq!(Ease::QuarticInOut.apply(7.0), 1.0);
    assert_eq!(Ease::Linear.apply(2.0), 1.0);
}

#[test]
fn back_out_overshoots() {
    let mut max = 0.0f64;
    for i in 0..=100 {
        max = max.max(Ease::BackOut.apply(f64::from(i) / 100.0));
    }
    assert!(max > 1.0);
}
