//! 액체 물 물성. 밀도는 seuif97(IAPWS-IF97)에 위임하고,
//! 포화압력은 IAPWS 포화선 식, 점도는 Vogel 형태 근사식을 사용한다.
//! 입력: 온도(°C), 압력(bar, 절대)

use seuif97::{pt, OV};
use thiserror::Error;

use crate::units::pressure_pa_to_head;

/// 표준 대기압 [bar abs]
pub const ATM_BAR_ABS: f64 = 1.01325;

const P_CRIT_MPA: f64 = 22.064;
const T_CRIT_K: f64 = 647.096;
const SAT_N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];

/// 물성 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaterError {
    #[error("유효 온도 범위(0~370°C)를 벗어났습니다: {0} °C")]
    OutOfRange(f64),
    #[error("{temperature_c} °C, {pressure_bar_abs} bar(a)에서 물이 액체 상태가 아닙니다")]
    NotLiquid {
        temperature_c: f64,
        pressure_bar_abs: f64,
    },
    #[error("IF97 계산 실패(유효 범위 밖이거나 수렴 실패)")]
    If97Failed,
}

fn check_range(t_c: f64) -> Result<(), WaterError> {
    if !t_c.is_finite() || !(0.0..=370.0).contains(&t_c) {
        return Err(WaterError::OutOfRange(t_c));
    }
    Ok(())
}

/// 포화압력(bar abs) - 입력 온도는 °C.
pub fn saturation_pressure_bar_abs(t_c: f64) -> Result<f64, WaterError> {
    check_range(t_c)?;
    let t_k = t_c + 273.15;
    let theta = 1.0 - t_k / T_CRIT_K;
    let exp_term = (T_CRIT_K / t_k)
        * (SAT_N[0] * theta
            + SAT_N[1] * theta.powf(1.5)
            + SAT_N[2] * theta.powi(3)
            + SAT_N[3] * theta.powf(3.5)
            + SAT_N[4] * theta.powi(4)
            + SAT_N[5] * theta.powf(7.5));
    Ok(P_CRIT_MPA * exp_term.exp() * 10.0)
}

/// 압축수(액체) 밀도 [kg/m³].
pub fn liquid_density(t_c: f64, p_bar_abs: f64) -> Result<f64, WaterError> {
    let p_sat = saturation_pressure_bar_abs(t_c)?;
    if !p_bar_abs.is_finite() || p_bar_abs <= p_sat {
        return Err(WaterError::NotLiquid {
            temperature_c: t_c,
            pressure_bar_abs: p_bar_abs,
        });
    }
    let v = pt(p_bar_abs / 10.0, t_c, OV);
    if !v.is_finite() || v <= 0.0 {
        return Err(WaterError::If97Failed);
    }
    Ok(1.0 / v)
}

/// 물의 점도 [Pa·s]. 0~370°C 범위에서 흔히 쓰이는 근사식.
pub fn dynamic_viscosity(t_c: f64) -> Result<f64, WaterError> {
    check_range(t_c)?;
    let exponent = 247.8 / (t_c + 133.15);
    Ok(2.414e-5 * 10f64.powf(exponent))
}

/// 증기압을 해당 유체의 수두[m]로 환산한다 (NPSHA 입력용).
pub fn vapor_pressure_head(t_c: f64, density: f64, gravity: f64) -> Result<f64, WaterError> {
    let p_sat_pa = saturation_pressure_bar_abs(t_c)? * 100_000.0;
    Ok(pressure_pa_to_head(p_sat_pa, density, gravity))
}

/// 대기압 조건의 물 밀도/점도.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterState {
    pub temperature_c: f64,
    pub density: f64,
    pub viscosity: f64,
}

/// 대기압(1.01325 bar abs)에서의 물 상태를 구한다.
pub fn at_atmospheric(t_c: f64) -> Result<WaterState, WaterError> {
    Ok(WaterState {
        temperature_c: t_c,
        density: liquid_density(t_c, ATM_BAR_ABS)?,
        viscosity: dynamic_viscosity(t_c)?,
    })
}
