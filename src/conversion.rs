use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    #[error("지원하지 않는 물리량: {0}")]
    UnsupportedQuantity(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `bar`, `kPa`, `mm`, `in`, `m3/h`, `gpm`, `cP` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::FlowRate => {
            let from = parse_flow_unit(from_unit_str)?;
            let to = parse_flow_unit(to_unit_str)?;
            Ok(convert_flow(value, from, to))
        }
        QuantityKind::Viscosity => {
            let from = parse_viscosity_unit(from_unit_str)?;
            let to = parse_viscosity_unit(to_unit_str)?;
            Ok(convert_viscosity(value, from, to))
        }
    }
}

/// 물리량 이름 문자열까지 받아 변환한다.
pub fn convert_named(
    kind_str: &str,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let kind = QuantityKind::parse(kind_str)
        .ok_or_else(|| ConversionError::UnsupportedQuantity(kind_str.to_string()))?;
    convert(kind, value, from_unit_str, to_unit_str)
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "bar" => Ok(PressureUnit::Bar),
        "mbar" | "millibar" => Ok(PressureUnit::MilliBar),
        "psi" => Ok(PressureUnit::Psi),
        "mh2o" | "mwc" | "m_h2o" => Ok(PressureUnit::MeterWater),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" | "millimeter" => Ok(LengthUnit::Millimeter),
        "cm" | "centimeter" => Ok(LengthUnit::Centimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_flow_unit(s: &str) -> Result<FlowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3/s" | "m^3/s" | "cms" => Ok(FlowUnit::CubicMeterPerSecond),
        "m3/h" | "m^3/h" | "cmh" => Ok(FlowUnit::CubicMeterPerHour),
        "l/s" | "lps" => Ok(FlowUnit::LiterPerSecond),
        "l/min" | "lpm" => Ok(FlowUnit::LiterPerMinute),
        "gpm" | "usgpm" => Ok(FlowUnit::GallonPerMinute),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_viscosity_unit(s: &str) -> Result<ViscosityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa·s" | "pa.s" | "pas" => Ok(ViscosityUnit::PascalSecond),
        "mpa·s" | "mpa.s" | "mpas" => Ok(ViscosityUnit::MilliPascalSecond),
        "cps" | "cp" => Ok(ViscosityUnit::Centipoise),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
