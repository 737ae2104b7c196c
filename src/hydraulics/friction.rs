//! Darcy 마찰계수 계산.
//!
//! 층류(Re < 2300)는 64/Re, 천이 구간(2300 ≤ Re < 4000)은 두 경계값 사이의
//! 선형 보간, 난류(Re ≥ 4000)는 Colebrook-White 식의 Serghides 명시 근사로
//! 구한다. 반복 계산이 없으므로 항상 종료하며 결과는 결정적이다.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{check_finite, HydraulicsError, NumericalError, ValidationError};

/// 층류 상한 레이놀즈수
pub const LAMINAR_LIMIT: f64 = 2300.0;
/// 완전 난류 하한 레이놀즈수
pub const TURBULENT_LIMIT: f64 = 4000.0;

/// 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    /// 레이놀즈수로 유동 영역을 판정한다.
    pub fn classify(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            FlowRegime::Laminar
        } else if reynolds < TURBULENT_LIMIT {
            FlowRegime::Transitional
        } else {
            FlowRegime::Turbulent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowRegime::Laminar => "Laminar",
            FlowRegime::Transitional => "Transitional",
            FlowRegime::Turbulent => "Turbulent",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 레이놀즈수, 내경, 절대 거칠기로 Darcy 마찰계수와 유동 영역을 구한다.
///
/// Re = 0(정지 유체)이면 나눗셈 없이 마찰계수 0을 반환한다.
pub fn resolve(
    reynolds: f64,
    diameter: f64,
    roughness: f64,
) -> Result<(f64, FlowRegime), HydraulicsError> {
    if !reynolds.is_finite() || reynolds < 0.0 {
        return Err(ValidationError::NegativeReynolds(reynolds).into());
    }
    if !diameter.is_finite() || diameter <= 0.0 {
        return Err(ValidationError::NonPositiveDiameter {
            section: None,
            value: diameter,
        }
        .into());
    }
    if !roughness.is_finite() || roughness < 0.0 {
        return Err(ValidationError::NegativeRoughness(roughness).into());
    }

    let regime = FlowRegime::classify(reynolds);
    if reynolds == 0.0 {
        return Ok((0.0, regime));
    }

    let relative_roughness = roughness / diameter;
    let factor = match regime {
        FlowRegime::Laminar => 64.0 / reynolds,
        FlowRegime::Transitional => {
            let laminar_edge = 64.0 / LAMINAR_LIMIT;
            let turbulent_edge = serghides(TURBULENT_LIMIT, relative_roughness)?;
            let frac = (reynolds - LAMINAR_LIMIT) / (TURBULENT_LIMIT - LAMINAR_LIMIT);
            laminar_edge + frac * (turbulent_edge - laminar_edge)
        }
        FlowRegime::Turbulent => serghides(reynolds, relative_roughness)?,
    };
    Ok((check_finite(factor, "마찰계수")?, regime))
}

/// Colebrook-White 식의 Serghides 3단 명시 근사.
///
/// 1/√f = A - (B - A)² / (C - 2B + A)
pub fn serghides(reynolds: f64, relative_roughness: f64) -> Result<f64, HydraulicsError> {
    let r = relative_roughness / 3.7;
    let a = -2.0 * (r + 12.0 / reynolds).log10();
    let b = -2.0 * (r + 2.51 * a / reynolds).log10();
    let c = -2.0 * (r + 2.51 * b / reynolds).log10();
    check_finite(a, "Serghides A")?;
    check_finite(b, "Serghides B")?;
    check_finite(c, "Serghides C")?;

    let denom = c - 2.0 * b + a;
    let inv_sqrt_f = if denom == 0.0 {
        a
    } else {
        a - (b - a).powi(2) / denom
    };
    if !inv_sqrt_f.is_finite() || inv_sqrt_f <= 0.0 {
        return Err(NumericalError::NonPhysical {
            quantity: "1/sqrt(f)",
            value: inv_sqrt_f,
        }
        .into());
    }
    check_finite(inv_sqrt_f.powi(-2), "마찰계수")
}
