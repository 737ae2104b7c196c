use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m³/s이다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowUnit {
    #[default]
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    LiterPerMinute,
    /// US gallon per minute
    GallonPerMinute,
}

const M3_PER_US_GALLON: f64 = 0.003_785_411_784;

impl FlowUnit {
    fn m3_per_s_per_unit(self) -> f64 {
        match self {
            FlowUnit::CubicMeterPerSecond => 1.0,
            FlowUnit::CubicMeterPerHour => 1.0 / 3600.0,
            FlowUnit::LiterPerSecond => 0.001,
            FlowUnit::LiterPerMinute => 0.001 / 60.0,
            FlowUnit::GallonPerMinute => M3_PER_US_GALLON / 60.0,
        }
    }

    pub fn to_m3_per_s(self, value: f64) -> f64 {
        value * self.m3_per_s_per_unit()
    }

    pub fn from_m3_per_s(self, value: f64) -> f64 {
        value / self.m3_per_s_per_unit()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            FlowUnit::CubicMeterPerSecond => "m3/s",
            FlowUnit::CubicMeterPerHour => "m3/h",
            FlowUnit::LiterPerSecond => "L/s",
            FlowUnit::LiterPerMinute => "L/min",
            FlowUnit::GallonPerMinute => "gpm",
        }
    }
}

/// 유량을 다른 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    to.from_m3_per_s(from.to_m3_per_s(value))
}
