use serde::{Deserialize, Serialize};

/// 동점성(dynamic viscosity) 단위. 내부 기준은 Pa·s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViscosityUnit {
    PascalSecond,
    MilliPascalSecond,
    Centipoise,
}

fn to_pas(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::PascalSecond => value,
        // 1 cP = 1 mPa·s
        ViscosityUnit::MilliPascalSecond | ViscosityUnit::Centipoise => value / 1000.0,
    }
}

fn from_pas(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::PascalSecond => value,
        ViscosityUnit::MilliPascalSecond | ViscosityUnit::Centipoise => value * 1000.0,
    }
}

/// 점도를 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    from_pas(to_pas(value, from), to)
}
