//! 직렬 배관 구간별 수두손실 계산.
//!
//! 각 구간에 대해 Darcy-Weisbach 마찰손실, 피팅 K 손실, 높이 변화를 합산하고
//! 입력 순서 그대로 결과를 모은다.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{check_finite, HydraulicsError, ValidationError};
use super::friction::{self, FlowRegime};

/// 표준 중력가속도 [m/s²]
pub const STANDARD_GRAVITY: f64 = 9.81;

/// 배관 한 구간.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeSection {
    /// 내경 [m]
    pub diameter: f64,
    /// 길이 [m]
    pub length: f64,
    /// 높이 변화 [m] (+ 상승, - 하강)
    #[serde(default)]
    pub elevation_change: f64,
    /// 피팅 손실계수 목록
    #[serde(default)]
    pub fittings_k: Vec<f64>,
}

impl PipeSection {
    pub fn new(diameter: f64, length: f64) -> Self {
        Self {
            diameter,
            length,
            elevation_change: 0.0,
            fittings_k: Vec::new(),
        }
    }

    pub fn with_fittings_k(mut self, fittings_k: Vec<f64>) -> Self {
        self.fittings_k = fittings_k;
        self
    }

    pub fn with_elevation_change(mut self, elevation_change: f64) -> Self {
        self.elevation_change = elevation_change;
        self
    }

    /// 피팅 K 합계
    pub fn k_sum(&self) -> f64 {
        self.fittings_k.iter().sum()
    }

    /// 구간 번호(1부터)를 붙여 입력을 검증한다.
    fn validate(&self, number: usize) -> Result<(), ValidationError> {
        let section = Some(number);
        if !self.diameter.is_finite() || self.diameter <= 0.0 {
            return Err(ValidationError::NonPositiveDiameter {
                section,
                value: self.diameter,
            });
        }
        if !self.length.is_finite() || self.length < 0.0 {
            return Err(ValidationError::NegativeLength {
                section,
                value: self.length,
            });
        }
        if let Some(&k) = self.fittings_k.iter().find(|k| !k.is_finite() || **k < 0.0) {
            return Err(ValidationError::NegativeFittingK { section, value: k });
        }
        if !self.elevation_change.is_finite() {
            return Err(ValidationError::NonFiniteElevation {
                section,
                value: self.elevation_change,
            });
        }
        Ok(())
    }
}

/// 한 번의 계산 동안 모든 구간에 공통으로 적용되는 유체/배관 물성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    /// 밀도 [kg/m³]
    pub density: f64,
    /// 점도 [Pa·s]
    pub viscosity: f64,
    /// 배관 절대 거칠기 [m]
    pub roughness: f64,
    /// 중력가속도 [m/s²]
    pub gravity: f64,
}

impl FluidProperties {
    pub fn new(density: f64, viscosity: f64, roughness: f64) -> Self {
        Self {
            density,
            viscosity,
            roughness,
            gravity: STANDARD_GRAVITY,
        }
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ValidationError::NonPositiveDensity(self.density));
        }
        if !self.viscosity.is_finite() || self.viscosity <= 0.0 {
            return Err(ValidationError::NonPositiveViscosity(self.viscosity));
        }
        if !self.roughness.is_finite() || self.roughness < 0.0 {
            return Err(ValidationError::NegativeRoughness(self.roughness));
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(ValidationError::NonPositiveGravity(self.gravity));
        }
        Ok(())
    }
}

/// 구간별 계산 결과. 손실은 모두 수두[m] 단위이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    pub section_number: usize,
    pub diameter: f64,
    pub length: f64,
    pub velocity: f64,
    pub reynolds_number: f64,
    pub friction_factor: f64,
    pub friction_head_loss: f64,
    pub fittings_head_loss: f64,
    pub elevation_head: f64,
    pub total_head_loss: f64,
    pub flow_regime: FlowRegime,
}

/// 전체 배관 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemReport {
    /// 구간 손실의 합 [m]
    pub total_head_loss: f64,
    pub sections: Vec<SectionResult>,
}

impl SystemReport {
    /// 구간 결과를 입력 순서대로 합산해 보고서를 만든다.
    pub fn from_sections(sections: Vec<SectionResult>) -> Self {
        let total_head_loss = sections.iter().map(|s| s.total_head_loss).sum();
        Self {
            total_head_loss,
            sections,
        }
    }

    pub fn friction_head_loss(&self) -> f64 {
        self.sections.iter().map(|s| s.friction_head_loss).sum()
    }

    pub fn fittings_head_loss(&self) -> f64 {
        self.sections.iter().map(|s| s.fittings_head_loss).sum()
    }

    pub fn elevation_head(&self) -> f64 {
        self.sections.iter().map(|s| s.elevation_head).sum()
    }

    /// 마지막 구간(펌프 흡입 플랜지 측) 유속
    pub fn outlet_velocity(&self) -> Option<f64> {
        self.sections.last().map(|s| s.velocity)
    }

    /// 총 수두손실을 압력강하[Pa]로 환산한다. ΔP = ρ·g·h
    pub fn total_pressure_drop_pa(&self, density: f64, gravity: f64) -> f64 {
        crate::units::head_to_pressure_pa(self.total_head_loss, density, gravity)
    }
}

/// 구간 목록, 체적유량[m³/s], 유체 물성으로 전체 수두손실을 계산한다.
///
/// 잘못된 구간을 만나면 그 구간을 계산하기 전에 오류를 반환하며,
/// 부분 결과는 반환하지 않는다.
pub fn compute(
    sections: &[PipeSection],
    flow_rate: f64,
    fluid: &FluidProperties,
) -> Result<SystemReport, HydraulicsError> {
    validate_common(flow_rate, fluid)?;
    let mut results = Vec::with_capacity(sections.len());
    for (idx, section) in sections.iter().enumerate() {
        let number = idx + 1;
        section.validate(number)?;
        results.push(evaluate_section(number, section, flow_rate, fluid)?);
    }
    Ok(SystemReport::from_sections(results))
}

/// `compute`와 같은 계약이지만 구간 계산을 rayon으로 병렬 수행한다.
/// 검증은 입력 순서대로 먼저 끝내고, 결과와 합계는 입력 순서를 유지한다.
pub fn compute_parallel(
    sections: &[PipeSection],
    flow_rate: f64,
    fluid: &FluidProperties,
) -> Result<SystemReport, HydraulicsError> {
    validate_common(flow_rate, fluid)?;
    for (idx, section) in sections.iter().enumerate() {
        section.validate(idx + 1)?;
    }
    let results = sections
        .par_iter()
        .enumerate()
        .map(|(idx, section)| evaluate_section(idx + 1, section, flow_rate, fluid))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SystemReport::from_sections(results))
}

fn validate_common(flow_rate: f64, fluid: &FluidProperties) -> Result<(), ValidationError> {
    fluid.validate()?;
    if !flow_rate.is_finite() || flow_rate < 0.0 {
        return Err(ValidationError::NegativeFlowRate(flow_rate));
    }
    Ok(())
}

fn evaluate_section(
    number: usize,
    section: &PipeSection,
    flow_rate: f64,
    fluid: &FluidProperties,
) -> Result<SectionResult, HydraulicsError> {
    let area = std::f64::consts::PI * (section.diameter / 2.0).powi(2);
    let velocity = flow_rate / area;
    let reynolds = fluid.density * velocity * section.diameter / fluid.viscosity;
    check_finite(reynolds, "레이놀즈수")?;

    let (friction_factor, flow_regime) =
        friction::resolve(reynolds, section.diameter, fluid.roughness)?;

    let velocity_head = velocity * velocity / (2.0 * fluid.gravity);
    let friction_head_loss = friction_factor * (section.length / section.diameter) * velocity_head;
    let fittings_head_loss = section.k_sum() * velocity_head;
    let elevation_head = section.elevation_change;
    let total_head_loss = friction_head_loss + fittings_head_loss + elevation_head;

    debug!(
        "구간 {number}: v={velocity:.3} m/s, Re={reynolds:.3e} ({flow_regime}), f={friction_factor:.5}, h={total_head_loss:.4} m"
    );

    Ok(SectionResult {
        section_number: number,
        diameter: section.diameter,
        length: section.length,
        velocity,
        reynolds_number: reynolds,
        friction_factor,
        friction_head_loss: check_finite(friction_head_loss, "마찰 손실")?,
        fittings_head_loss: check_finite(fittings_head_loss, "피팅 손실")?,
        elevation_head,
        total_head_loss: check_finite(total_head_loss, "구간 손실")?,
        flow_regime,
    })
}
