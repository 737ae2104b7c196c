use approx::assert_relative_eq;
use pipe_loss_toolbox::hydraulics::{crane_friction_factor, FittingKind, FittingTable};

#[test]
fn crane_factor_for_commercial_steel() {
    // 상대 거칠기 1.5e-4 → f_T 약 0.013
    let rr = 1.5e-4;
    let f_t = crane_friction_factor(rr).unwrap();
    let expected = 0.25 / (rr / 3.7f64).log10().powi(2);
    assert_relative_eq!(f_t, expected, max_relative = 1e-12);
    assert!(f_t > 0.012 && f_t < 0.014, "f_T={f_t}");
}

#[test]
fn table_scales_base_k() {
    let table = FittingTable::crane(1.5e-4).unwrap();
    for (kind, k) in table.entries() {
        assert_relative_eq!(k, kind.base_k() * table.factor(), max_relative = 1e-12);
    }
    assert_eq!(table.entries().len(), FittingKind::ALL.len());

    let kinds = [FittingKind::Elbow90Standard, FittingKind::GlobeValveFullOpen];
    assert_relative_eq!(
        table.sum_k(&kinds),
        (0.75 + 10.0) * table.factor(),
        max_relative = 1e-12
    );
}

#[test]
fn fixed_factor_table() {
    let table = FittingTable::with_factor(0.02);
    assert_relative_eq!(table.k(FittingKind::Strainer), 0.05, max_relative = 1e-12);
}

#[test]
fn rougher_pipe_raises_factor() {
    let smooth = crane_friction_factor(1e-5).unwrap();
    let rough = crane_friction_factor(1e-3).unwrap();
    assert!(rough > smooth);
}

#[test]
fn invalid_relative_roughness() {
    assert!(crane_friction_factor(0.0).unwrap_err().is_validation());
    assert!(crane_friction_factor(-1e-4).unwrap_err().is_validation());
    assert!(crane_friction_factor(f64::NAN).unwrap_err().is_validation());
    // log10(1) = 0 → 0으로 나누기
    assert!(crane_friction_factor(3.7).unwrap_err().is_numerical());
}

#[test]
fn names_round_trip_through_display() {
    assert_eq!(FittingKind::Elbow90Standard.to_string(), "elbow_90deg_standard");
    assert_eq!(FittingKind::SwingCheckValve.name(), "swing_check_valve");
}
