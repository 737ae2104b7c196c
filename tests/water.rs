use approx::assert_abs_diff_eq;
use pipe_loss_toolbox::water::{self, WaterError, ATM_BAR_ABS};

#[test]
fn saturation_pressure_reference_points() {
    assert_abs_diff_eq!(water::saturation_pressure_bar_abs(20.0).unwrap(), 0.02339, epsilon = 1e-4);
    assert_abs_diff_eq!(water::saturation_pressure_bar_abs(100.0).unwrap(), 1.01418, epsilon = 1e-3);
}

#[test]
fn liquid_density_at_room_temperature() {
    let rho = water::liquid_density(20.0, ATM_BAR_ABS).unwrap();
    assert_abs_diff_eq!(rho, 998.2, epsilon = 0.2);
    let rho_hot = water::liquid_density(80.0, ATM_BAR_ABS).unwrap();
    assert!(rho_hot < rho);
}

#[test]
fn viscosity_falls_with_temperature() {
    let mu20 = water::dynamic_viscosity(20.0).unwrap();
    assert_abs_diff_eq!(mu20, 1.0e-3, epsilon = 3e-5);
    assert!(water::dynamic_viscosity(60.0).unwrap() < mu20);
}

#[test]
fn vapor_pressure_head_at_20c() {
    let head = water::vapor_pressure_head(20.0, 998.2, 9.81).unwrap();
    assert_abs_diff_eq!(head, 0.239, epsilon = 0.002);
}

#[test]
fn boiling_water_is_not_liquid_at_atmospheric() {
    assert!(matches!(
        water::at_atmospheric(120.0),
        Err(WaterError::NotLiquid { .. })
    ));
}

#[test]
fn out_of_range_temperature() {
    assert_eq!(water::dynamic_viscosity(-5.0), Err(WaterError::OutOfRange(-5.0)));
    assert!(matches!(
        water::saturation_pressure_bar_abs(400.0),
        Err(WaterError::OutOfRange(_))
    ));
}

#[test]
fn atmospheric_state() {
    let state = water::at_atmospheric(20.0).unwrap();
    assert_eq!(state.temperature_c, 20.0);
    assert!(state.density > 990.0 && state.density < 1000.0);
}
