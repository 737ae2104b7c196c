use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{HydraulicsError, ValidationError};
use super::section::{compute, FluidProperties, PipeSection};

/// 유량 스윕 범위 설정. 설계 유량에 곱할 배율 구간과 점 개수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    pub min_factor: f64,
    pub max_factor: f64,
    pub points: usize,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            min_factor: 0.1,
            max_factor: 2.0,
            points: 50,
        }
    }
}

impl CurveSettings {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.points < 2 {
            return Err(ValidationError::InvalidCurve("점 개수는 2 이상이어야 합니다."));
        }
        if !self.min_factor.is_finite() || self.min_factor < 0.0 {
            return Err(ValidationError::InvalidCurve("최소 배율은 0 이상이어야 합니다."));
        }
        if !self.max_factor.is_finite() || self.max_factor <= self.min_factor {
            return Err(ValidationError::InvalidCurve(
                "최대 배율은 최소 배율보다 커야 합니다.",
            ));
        }
        Ok(())
    }

    /// [min_factor, max_factor] 구간을 균등 분할한 배율 목록
    pub fn factors(&self) -> Vec<f64> {
        let step = (self.max_factor - self.min_factor) / (self.points - 1) as f64;
        (0..self.points)
            .map(|i| self.min_factor + step * i as f64)
            .collect()
    }
}

/// 유량-총수두손실 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// 유량 [m³/s]
    pub flow_rate: f64,
    /// 총 수두손실 [m]
    pub head_loss: f64,
}

/// 시스템 곡선과 설계 운전점.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemCurve {
    pub points: Vec<CurvePoint>,
    pub design_point: CurvePoint,
}

/// 설계 유량을 기준으로 유량을 스윕하며 총 수두손실을 계산한다.
pub fn sweep(
    sections: &[PipeSection],
    design_flow: f64,
    fluid: &FluidProperties,
    settings: &CurveSettings,
) -> Result<SystemCurve, HydraulicsError> {
    settings.validate()?;
    let design = compute(sections, design_flow, fluid)?;

    let points = settings
        .factors()
        .into_par_iter()
        .map(|factor| {
            let flow_rate = design_flow * factor;
            compute(sections, flow_rate, fluid).map(|report| CurvePoint {
                flow_rate,
                head_loss: report.total_head_loss,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "시스템 곡선 {}점 계산 완료 (설계점 Q={design_flow:.4} m3/s, H={:.3} m)",
        points.len(),
        design.total_head_loss
    );

    Ok(SystemCurve {
        points,
        design_point: CurvePoint {
            flow_rate: design_flow,
            head_loss: design.total_head_loss,
        },
    })
}
