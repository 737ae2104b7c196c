use approx::assert_relative_eq;
use pipe_loss_toolbox::config::Config;
use pipe_loss_toolbox::conversion::{self, ConversionError};
use pipe_loss_toolbox::quantity::QuantityKind;
use pipe_loss_toolbox::roughness_db;
use pipe_loss_toolbox::units::*;

#[test]
fn pressure_conversions() {
    assert_relative_eq!(convert_pressure(1.0, PressureUnit::Bar, PressureUnit::KiloPascal), 100.0);
    assert_relative_eq!(
        convert_pressure(1.0, PressureUnit::Bar, PressureUnit::Psi),
        14.5038,
        max_relative = 1e-5
    );
    assert_relative_eq!(head_to_pressure_pa(1.0, 1000.0, 9.81), 9810.0);
    assert_relative_eq!(pressure_pa_to_head(9810.0, 1000.0, 9.81), 1.0);
}

#[test]
fn flow_and_length_conversions() {
    assert_relative_eq!(FlowUnit::CubicMeterPerHour.to_m3_per_s(3600.0), 1.0);
    assert_relative_eq!(
        convert_flow(1.0, FlowUnit::LiterPerSecond, FlowUnit::CubicMeterPerHour),
        3.6,
        max_relative = 1e-12
    );
    assert_relative_eq!(LengthUnit::Millimeter.to_meters(300.0), 0.3, max_relative = 1e-12);
    assert_relative_eq!(
        convert_length(12.0, LengthUnit::Inch, LengthUnit::Foot),
        1.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_viscosity(1.0, ViscosityUnit::Centipoise, ViscosityUnit::PascalSecond),
        0.001,
        max_relative = 1e-12
    );
}

#[test]
fn named_conversion() {
    let v = conversion::convert_named("pressure", 2.0, "bar", "kPa").unwrap();
    assert_relative_eq!(v, 200.0, max_relative = 1e-12);
    let q = conversion::convert(QuantityKind::FlowRate, 100.0, "gpm", "m3/h").unwrap();
    assert_relative_eq!(q, 22.712, max_relative = 1e-4);
}

#[test]
fn unknown_units_and_quantities() {
    assert!(matches!(
        conversion::convert_named("pressure", 1.0, "furlong", "bar"),
        Err(ConversionError::UnknownUnit(u)) if u == "furlong"
    ));
    assert!(matches!(
        conversion::convert_named("temperature", 1.0, "c", "k"),
        Err(ConversionError::UnsupportedQuantity(_))
    ));
}

#[test]
fn roughness_table_lookup() {
    assert_eq!(roughness_db::roughness("commercial_steel"), Some(4.57e-5));
    assert_eq!(roughness_db::roughness("Commercial Steel"), Some(4.57e-5));
    assert_eq!(roughness_db::roughness("PVC"), Some(1.5e-6));
    assert!(roughness_db::roughness("wood").is_none());
    assert!(roughness_db::materials().iter().all(|m| m.roughness_m > 0.0));
}

#[test]
fn config_fills_missing_keys_with_defaults() {
    let cfg: Config = toml::from_str("pressure_unit = \"kilo_pascal\"").unwrap();
    assert_eq!(cfg.pressure_unit, PressureUnit::KiloPascal);
    assert_eq!(cfg.flow_unit, FlowUnit::CubicMeterPerSecond);
    assert_eq!(cfg.precision, 3);
}

#[test]
fn material_entries_are_code_name_roughness() {
    let roughness_db::PipeMaterial {
        code,
        name,
        roughness_m,
    } = roughness_db::find_material("hdpe").expect("hdpe");
    assert_eq!(*code, "hdpe");
    assert!(!name.is_empty());
    assert_eq!(*roughness_m, 7.0e-6);
}

#[test]
fn package_version() {
    assert_eq!(env!("CARGO_PKG_VERSION"), "0.1.0");
}
