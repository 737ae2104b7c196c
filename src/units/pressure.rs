use serde::{Deserialize, Serialize};

/// 압력(차압) 단위. 내부 기준은 Pa이다.
/// 배관 손실은 차압이므로 게이지/절대 구분 없이 환산한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    MilliBar,
    Psi,
    /// 물기둥 미터 (4°C 물, 9806.65 Pa)
    MeterWater,
}

const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_PSI: f64 = 6_894.757;
const PA_PER_M_H2O: f64 = 9_806.65;

impl PressureUnit {
    fn pascals_per_unit(self) -> f64 {
        match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::KiloPascal => 1_000.0,
            PressureUnit::MegaPascal => 1_000_000.0,
            PressureUnit::Bar => PA_PER_BAR,
            PressureUnit::MilliBar => PA_PER_BAR / 1000.0,
            PressureUnit::Psi => PA_PER_PSI,
            PressureUnit::MeterWater => PA_PER_M_H2O,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::Psi => "psi",
            PressureUnit::MeterWater => "mH2O",
        }
    }
}

/// 압력을 다른 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    value * from.pascals_per_unit() / to.pascals_per_unit()
}

/// 수두[m]를 압력[Pa]으로 환산한다. ΔP = ρ·g·h
pub fn head_to_pressure_pa(head_m: f64, density: f64, gravity: f64) -> f64 {
    density * gravity * head_m
}

/// 압력[Pa]을 유체 수두[m]로 환산한다. h = ΔP / (ρ·g)
pub fn pressure_pa_to_head(pressure_pa: f64, density: f64, gravity: f64) -> f64 {
    pressure_pa / (density * gravity)
}
