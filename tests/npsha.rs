use approx::assert_relative_eq;
use pipe_loss_toolbox::hydraulics::npsha::{evaluate, MIN_MARGIN_RATIO};
use pipe_loss_toolbox::hydraulics::{
    compute, FluidProperties, HydraulicsError, NpshaInput, PipeSection, ValidationError,
    HEAD_M_PER_BAR,
};

fn suction_input(friction: f64, velocity: f64) -> NpshaInput {
    NpshaInput {
        atmospheric_head: 10.33,
        static_head: 0.0,
        friction_head_loss: friction,
        flow_velocity: velocity,
        vapor_pressure_head: 0.238,
        gravity: 9.81,
    }
}

#[test]
fn sums_head_terms() {
    let friction = 1.5;
    let velocity = 3.11;
    let report = evaluate(&suction_input(friction, velocity)).expect("npsha");
    let velocity_head = velocity * velocity / (2.0 * 9.81);
    let expected = 10.33 + 0.0 - friction + velocity_head - 0.238;

    assert_relative_eq!(report.npsha.head_m, expected, max_relative = 1e-12);
    assert_relative_eq!(
        report.npsha.pressure_bar,
        expected / HEAD_M_PER_BAR,
        max_relative = 1e-12
    );
    assert_eq!(report.friction.head_m, -friction);
    assert_eq!(report.vapor.head_m, -0.238);
    assert_relative_eq!(report.velocity.head_m, velocity_head, max_relative = 1e-12);
}

#[test]
fn terms_are_labelled_in_order() {
    let report = evaluate(&suction_input(1.0, 2.0)).unwrap();
    let labels: Vec<_> = report.terms().iter().map(|(label, _)| *label).collect();
    assert_eq!(
        labels,
        [
            "Atmospheric Pressure Head",
            "Static Head",
            "Friction Head Loss",
            "Velocity Head",
            "Vapor Pressure Head",
        ]
    );
    let sum: f64 = report.terms().iter().map(|(_, term)| term.head_m).sum();
    assert_relative_eq!(sum, report.npsha.head_m, max_relative = 1e-12);
    for (_, term) in report.terms() {
        assert_relative_eq!(
            term.pressure_bar * HEAD_M_PER_BAR,
            term.head_m,
            max_relative = 1e-12
        );
    }
}

#[test]
fn default_input_is_sea_level_still_water() {
    let report = evaluate(&NpshaInput::default()).unwrap();
    assert_eq!(report.npsha.head_m, 10.33);
    assert_eq!(report.velocity.head_m, 0.0);
}

#[test]
fn rejects_non_positive_gravity() {
    let mut input = suction_input(1.0, 2.0);
    input.gravity = 0.0;
    assert_eq!(
        evaluate(&input).unwrap_err(),
        HydraulicsError::Validation(ValidationError::NonPositiveGravity(0.0))
    );
}

#[test]
fn from_report_uses_total_loss_and_outlet_velocity() {
    let fluid = FluidProperties::new(1028.0, 0.00155, 4.57e-5);
    let sections = [
        PipeSection::new(0.3366, 6.0).with_fittings_k(vec![0.05, 0.216, 0.3375]),
        PipeSection::new(0.3872, 119.0).with_fittings_k(vec![1.904, 1.36, 0.784, 0.4352, 1.36]),
    ];
    let report = compute(&sections, 0.277, &fluid).unwrap();
    let input = NpshaInput::from_report(&report, 10.33, 0.0, 0.238);
    assert_eq!(input.friction_head_loss, report.total_head_loss);
    assert_eq!(input.flow_velocity, report.sections[1].velocity);

    let result = evaluate(&input).unwrap();
    assert!(result.npsha.head_m > 0.0 && result.npsha.head_m < 10.33);
}

#[test]
fn margin_flags_cavitation_risk() {
    let report = evaluate(&suction_input(1.0, 2.0)).unwrap();
    let npsha = report.npsha.head_m;

    let comfortable = report.margin(npsha / 2.0);
    assert_relative_eq!(comfortable.ratio, 2.0, max_relative = 1e-12);
    assert!(comfortable.warnings.is_empty());

    let tight = report.margin(npsha / (MIN_MARGIN_RATIO - 0.05));
    assert!(tight.ratio < MIN_MARGIN_RATIO);
    assert_eq!(tight.warnings.len(), 1);

    let unknown = report.margin(0.0);
    assert!(unknown.ratio.is_infinite());
    assert!(unknown.warnings.is_empty());
}

#[test]
fn negative_npsha_warns_twice() {
    let report = evaluate(&suction_input(12.0, 0.5)).unwrap();
    assert!(report.npsha.head_m < 0.0);
    let margin = report.margin(3.0);
    assert_eq!(margin.warnings.len(), 2);
}
