use serde::{Deserialize, Serialize};

use super::error::{HydraulicsError, ValidationError};
use super::section::{SystemReport, STANDARD_GRAVITY};

/// 수두[m]를 bar로 환산하는 고정 계수 (표준 조건의 물 기준 근사, 10.2 m = 1 bar)
pub const HEAD_M_PER_BAR: f64 = 10.2;

/// NPSHr 대비 권장 최소 여유율
pub const MIN_MARGIN_RATIO: f64 = 1.1;

/// NPSHA 계산 입력. 모든 수두는 m 단위이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NpshaInput {
    /// 대기압 수두 (해수면 표준 10.33 m)
    pub atmospheric_head: f64,
    /// 정수두 (+ 액면이 펌프보다 위, - 아래)
    pub static_head: f64,
    /// 흡입 배관 손실 수두
    pub friction_head_loss: f64,
    /// 펌프 흡입 플랜지 유속 [m/s]
    pub flow_velocity: f64,
    /// 증기압 수두
    pub vapor_pressure_head: f64,
    /// 중력가속도 [m/s²]
    pub gravity: f64,
}

impl Default for NpshaInput {
    fn default() -> Self {
        Self {
            atmospheric_head: 10.33,
            static_head: 0.0,
            friction_head_loss: 0.0,
            flow_velocity: 0.0,
            vapor_pressure_head: 0.0,
            gravity: STANDARD_GRAVITY,
        }
    }
}

impl NpshaInput {
    /// 흡입 배관 계산 결과에서 손실 수두(총합)와 마지막 구간 유속을 가져온다.
    pub fn from_report(
        report: &SystemReport,
        atmospheric_head: f64,
        static_head: f64,
        vapor_pressure_head: f64,
    ) -> Self {
        Self {
            atmospheric_head,
            static_head,
            friction_head_loss: report.total_head_loss,
            flow_velocity: report.outlet_velocity().unwrap_or(0.0),
            vapor_pressure_head,
            ..Self::default()
        }
    }
}

/// 수두 값과 bar 환산값 한 쌍.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadTerm {
    pub head_m: f64,
    pub pressure_bar: f64,
}

impl HeadTerm {
    pub fn from_head(head_m: f64) -> Self {
        Self {
            head_m,
            pressure_bar: head_m / HEAD_M_PER_BAR,
        }
    }
}

/// NPSHA 계산 결과. 손실 항목(마찰, 증기압)은 음수로 저장된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpshaReport {
    pub atmospheric: HeadTerm,
    pub static_head: HeadTerm,
    pub friction: HeadTerm,
    pub velocity: HeadTerm,
    pub vapor: HeadTerm,
    pub npsha: HeadTerm,
}

impl NpshaReport {
    /// 표시용 (라벨, 항목) 목록. NPSHA 합계는 포함하지 않는다.
    pub fn terms(&self) -> [(&'static str, HeadTerm); 5] {
        [
            ("Atmospheric Pressure Head", self.atmospheric),
            ("Static Head", self.static_head),
            ("Friction Head Loss", self.friction),
            ("Velocity Head", self.velocity),
            ("Vapor Pressure Head", self.vapor),
        ]
    }

    /// 펌프 요구 NPSH(NPSHr)와 비교해 여유율과 경고를 만든다.
    pub fn margin(&self, npshr_m: f64) -> NpshMargin {
        let npsha = self.npsha.head_m;
        let ratio = if npshr_m > 0.0 {
            npsha / npshr_m
        } else {
            f64::INFINITY
        };
        let mut warnings = Vec::new();
        if npsha <= 0.0 {
            warnings.push(format!("NPSHA {npsha:.2} m (<=0). 흡입 불가, 공동현상 발생."));
        }
        if ratio < MIN_MARGIN_RATIO {
            warnings.push(format!("NPSH Margin {ratio:.2} (<{MIN_MARGIN_RATIO}). 공동현상 위험."));
        }
        NpshMargin { ratio, warnings }
    }
}

/// NPSHr 대비 여유 판정 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct NpshMargin {
    /// NPSHA / NPSHr
    pub ratio: f64,
    pub warnings: Vec<String>,
}

/// NPSHA = 대기압 + 정수두 - 마찰손실 + 속도수두 - 증기압 수두
pub fn evaluate(input: &NpshaInput) -> Result<NpshaReport, HydraulicsError> {
    if !input.gravity.is_finite() || input.gravity <= 0.0 {
        return Err(ValidationError::NonPositiveGravity(input.gravity).into());
    }
    let velocity_head = input.flow_velocity.powi(2) / (2.0 * input.gravity);
    let npsha = input.atmospheric_head + input.static_head - input.friction_head_loss
        + velocity_head
        - input.vapor_pressure_head;

    Ok(NpshaReport {
        atmospheric: HeadTerm::from_head(input.atmospheric_head),
        static_head: HeadTerm::from_head(input.static_head),
        friction: HeadTerm::from_head(-input.friction_head_loss),
        velocity: HeadTerm::from_head(velocity_head),
        vapor: HeadTerm::from_head(-input.vapor_pressure_head),
        npsha: HeadTerm::from_head(npsha),
    })
}
