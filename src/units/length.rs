use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다. 관경 입력에 주로 mm/inch를 사용한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    #[default]
    Meter,
    Millimeter,
    Centimeter,
    Inch,
    Foot,
}

impl LengthUnit {
    fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
        }
    }

    pub fn to_meters(self, value: f64) -> f64 {
        value * self.meters_per_unit()
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.meters_per_unit() / to.meters_per_unit()
}
