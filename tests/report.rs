use pipe_loss_toolbox::config::Config;
use pipe_loss_toolbox::hydraulics::npsha::evaluate;
use pipe_loss_toolbox::hydraulics::system_curve::sweep;
use pipe_loss_toolbox::hydraulics::{compute, CurveSettings, FluidProperties, NpshaInput, PipeSection};
use pipe_loss_toolbox::report;
use pipe_loss_toolbox::units::PressureUnit;

#[test]
fn system_report_lists_every_section() {
    let fluid = FluidProperties::new(1000.0, 0.001, 0.00015);
    let sections = [PipeSection::new(0.1, 10.0), PipeSection::new(0.05, 1.0)];
    let result = compute(&sections, 0.01, &fluid).unwrap();
    let cfg = Config {
        pressure_unit: PressureUnit::KiloPascal,
        ..Config::default()
    };
    let text = report::render_system_report(&result, &fluid, &cfg);
    assert!(text.contains("SUMMARY:"));
    assert!(text.contains("DETAILED BREAKDOWN:"));
    assert!(text.contains("Total (kPa)"));
    assert!(text.contains("Turbulent"));
    assert_eq!(text.lines().filter(|l| l.trim_start().starts_with('2')).count(), 1);
}

#[test]
fn npsha_table_shows_margin_warnings() {
    let result = evaluate(&NpshaInput {
        friction_head_loss: 9.0,
        ..NpshaInput::default()
    })
    .unwrap();
    let margin = result.margin(3.0);
    let text = report::render_npsha(&result, Some(&margin));
    assert!(text.contains("NPSHA Calculation Breakdown:"));
    assert!(text.contains("Vapor Pressure Head"));
    assert!(text.contains("경고:"));
}

#[test]
fn curve_table_marks_design_point() {
    let fluid = FluidProperties::new(1000.0, 0.001, 0.00015);
    let curve = sweep(
        &[PipeSection::new(0.1, 10.0)],
        0.01,
        &fluid,
        &CurveSettings {
            points: 5,
            ..CurveSettings::default()
        },
    )
    .unwrap();
    let text = report::render_system_curve(&curve, &Config::default());
    assert!(text.contains("SYSTEM CURVE:"));
    assert!(text.contains("Design Point: 0.0100 m3/s"));
}

#[test]
fn precision_setting_controls_head_columns() {
    let fluid = FluidProperties::new(1000.0, 0.001, 0.0);
    let result = compute(&[PipeSection::new(0.1, 1.0).with_elevation_change(2.0)], 0.0, &fluid).unwrap();
    let cfg = Config {
        precision: 1,
        ..Config::default()
    };
    let table = report::SystemReportTable {
        report: &result,
        fluid: &fluid,
        config: &cfg,
    };
    let text = table.to_string();
    assert_eq!(text, report::render_system_report(&result, &fluid, &cfg));
    // 2 m 수두 → 1000·9.81·2 Pa = 0.1962 bar
    assert!(text.contains("Total System Head Loss: 2.0 m (0.2 bar)"), "{text}");
}
