//! 마찰계수 영역별 회귀 테스트. Serghides 근사는 Newton-Raphson Colebrook 해와 비교한다.
use approx::assert_relative_eq;
use pipe_loss_toolbox::hydraulics::friction::{
    resolve, serghides, FlowRegime, LAMINAR_LIMIT, TURBULENT_LIMIT,
};
use pipe_loss_toolbox::hydraulics::{HydraulicsError, ValidationError};

/// 암시적 Colebrook-White 식을 x = 1/sqrt(f) 에 대해 Newton-Raphson으로 푼다.
fn colebrook_newton(reynolds: f64, relative_roughness: f64) -> f64 {
    let r = relative_roughness / 3.7;
    let mut x = 7.0;
    for _ in 0..50 {
        let arg = r + 2.51 * x / reynolds;
        let g = x + 2.0 * arg.log10();
        let dg = 1.0 + 2.0 / std::f64::consts::LN_10 * (2.51 / reynolds) / arg;
        let next = x - g / dg;
        if (next - x).abs() < 1e-14 {
            x = next;
            break;
        }
        x = next;
    }
    x.powi(-2)
}

#[test]
fn static_fluid_has_zero_friction() {
    let (f, regime) = resolve(0.0, 0.1, 0.00015).expect("zero Re");
    assert_eq!(f, 0.0);
    assert_eq!(regime, FlowRegime::Laminar);
}

#[test]
fn laminar_closed_form() {
    let (f, regime) = resolve(1000.0, 0.1, 0.00015).expect("laminar");
    assert_eq!(f, 0.064);
    assert_eq!(regime, FlowRegime::Laminar);
    assert_eq!(regime.to_string(), "Laminar");
}

#[test]
fn transition_band_is_exact_at_both_edges() {
    let (f_low, regime_low) = resolve(LAMINAR_LIMIT, 0.1, 0.00015).unwrap();
    assert_eq!(regime_low, FlowRegime::Transitional);
    assert_eq!(f_low, 64.0 / LAMINAR_LIMIT);

    let (f_high, regime_high) = resolve(TURBULENT_LIMIT, 0.1, 0.00015).unwrap();
    assert_eq!(regime_high, FlowRegime::Turbulent);
    assert_eq!(f_high, serghides(TURBULENT_LIMIT, 0.00015 / 0.1).unwrap());

    let (f_mid, regime_mid) = resolve(3150.0, 0.1, 0.00015).unwrap();
    assert_eq!(regime_mid, FlowRegime::Transitional);
    assert_relative_eq!(f_mid, 0.5 * (f_low + f_high), max_relative = 1e-12);
}

#[test]
fn continuous_across_regime_boundaries() {
    for roughness in [0.0, 0.00015, 0.002] {
        let (below, _) = resolve(LAMINAR_LIMIT - 1e-9, 0.1, roughness).unwrap();
        let (above, _) = resolve(LAMINAR_LIMIT, 0.1, roughness).unwrap();
        assert!((below - above).abs() < 1e-9, "2300: {below} vs {above}");

        let (below, _) = resolve(TURBULENT_LIMIT - 1e-6, 0.1, roughness).unwrap();
        let (above, _) = resolve(TURBULENT_LIMIT, 0.1, roughness).unwrap();
        assert!((below - above).abs() < 1e-9, "4000: {below} vs {above}");
    }
}

#[test]
fn serghides_tracks_implicit_colebrook() {
    for re in [4.0e3, 1.0e4, 1.273e5, 1.0e6, 1.0e8] {
        for rr in [0.0, 1e-6, 1e-4, 1.5e-3, 0.01, 0.05] {
            let explicit = serghides(re, rr).unwrap();
            let implicit = colebrook_newton(re, rr);
            let rel = (explicit - implicit).abs() / implicit;
            assert!(rel < 5e-3, "Re={re}, e/D={rr}: {explicit} vs {implicit}");
        }
    }
}

#[test]
fn turbulent_factor_in_moody_range() {
    // 상용 강관 100 mm, Re ≈ 1.27e5 → Moody 선도 기준 약 0.02
    let (f, regime) = resolve(127_324.0, 0.1, 0.00015).unwrap();
    assert_eq!(regime, FlowRegime::Turbulent);
    assert!(f > 0.018 && f < 0.024, "f={f}");
}

#[test]
fn rougher_pipe_has_higher_factor() {
    let (smooth, _) = resolve(1.0e5, 0.1, 0.0).unwrap();
    let (rough, _) = resolve(1.0e5, 0.1, 0.001).unwrap();
    assert!(rough > smooth);
}

#[test]
fn rejects_negative_reynolds_and_bad_diameter() {
    let err = resolve(-1.0, 0.1, 0.0).unwrap_err();
    assert_eq!(
        err,
        HydraulicsError::Validation(ValidationError::NegativeReynolds(-1.0))
    );
    assert!(resolve(f64::NAN, 0.1, 0.0).unwrap_err().is_validation());
    assert!(resolve(1.0e4, 0.0, 0.0).unwrap_err().is_validation());
    assert!(resolve(1.0e4, -0.1, 0.0).unwrap_err().is_validation());
    assert!(resolve(1.0e4, 0.1, -1e-5).unwrap_err().is_validation());
}

#[test]
fn degenerate_roughness_is_numerical_error() {
    // ε/D = 10 → 로그 인자가 1보다 커져 1/sqrt(f) 가 음수가 된다
    let err = resolve(1.0e5, 0.1, 1.0).unwrap_err();
    assert!(err.is_numerical(), "{err}");
    assert!(!err.is_validation());
}
