//! Crane TP-410 기준 피팅 손실계수 표.
//!
//! 기본 K 값(A-28)에 거칠기에 따른 보정계수 f_T(A-26)를 곱해 사용한다.
//! 표는 전역 상태가 아니라 필요한 곳에 값으로 주입한다.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{check_finite, HydraulicsError, ValidationError};

/// 피팅 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FittingKind {
    #[serde(rename = "elbow_90deg_standard")]
    Elbow90Standard,
    #[serde(rename = "elbow_90deg_long_radius")]
    Elbow90LongRadius,
    #[serde(rename = "elbow_45deg")]
    Elbow45,
    TeeStraightThrough,
    TeeBranchFlow,
    GateValveFullOpen,
    GateValveHalfOpen,
    GlobeValveFullOpen,
    AngleValveFullOpen,
    SwingCheckValve,
    Strainer,
}

impl FittingKind {
    pub const ALL: [FittingKind; 11] = [
        FittingKind::Elbow90Standard,
        FittingKind::Elbow90LongRadius,
        FittingKind::Elbow45,
        FittingKind::TeeStraightThrough,
        FittingKind::TeeBranchFlow,
        FittingKind::GateValveFullOpen,
        FittingKind::GateValveHalfOpen,
        FittingKind::GlobeValveFullOpen,
        FittingKind::AngleValveFullOpen,
        FittingKind::SwingCheckValve,
        FittingKind::Strainer,
    ];

    /// 보정 전 기본 K 값 (Crane TP-410, A-28)
    pub fn base_k(self) -> f64 {
        match self {
            FittingKind::Elbow90Standard => 0.75,
            FittingKind::Elbow90LongRadius => 0.45,
            FittingKind::Elbow45 => 0.35,
            FittingKind::TeeStraightThrough => 0.4,
            FittingKind::TeeBranchFlow => 1.5,
            FittingKind::GateValveFullOpen => 0.2,
            FittingKind::GateValveHalfOpen => 5.6,
            FittingKind::GlobeValveFullOpen => 10.0,
            FittingKind::AngleValveFullOpen => 5.0,
            FittingKind::SwingCheckValve => 2.5,
            FittingKind::Strainer => 2.5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FittingKind::Elbow90Standard => "elbow_90deg_standard",
            FittingKind::Elbow90LongRadius => "elbow_90deg_long_radius",
            FittingKind::Elbow45 => "elbow_45deg",
            FittingKind::TeeStraightThrough => "tee_straight_through",
            FittingKind::TeeBranchFlow => "tee_branch_flow",
            FittingKind::GateValveFullOpen => "gate_valve_full_open",
            FittingKind::GateValveHalfOpen => "gate_valve_half_open",
            FittingKind::GlobeValveFullOpen => "globe_valve_full_open",
            FittingKind::AngleValveFullOpen => "angle_valve_full_open",
            FittingKind::SwingCheckValve => "swing_check_valve",
            FittingKind::Strainer => "strainer",
        }
    }
}

impl fmt::Display for FittingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Crane f_T 계수 = 0.25 / log10(ε/D / 3.7)²
pub fn crane_friction_factor(relative_roughness: f64) -> Result<f64, HydraulicsError> {
    if !relative_roughness.is_finite() || relative_roughness <= 0.0 {
        return Err(ValidationError::NonPositiveRelativeRoughness(relative_roughness).into());
    }
    check_finite(0.25 / (relative_roughness / 3.7).log10().powi(2), "f_T")
}

/// f_T가 적용된 피팅 K 값 표.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittingTable {
    f_t: f64,
}

impl FittingTable {
    /// 상대 거칠기로 f_T를 계산해 표를 만든다.
    pub fn crane(relative_roughness: f64) -> Result<Self, HydraulicsError> {
        Ok(Self {
            f_t: crane_friction_factor(relative_roughness)?,
        })
    }

    /// 이미 알고 있는 f_T로 표를 만든다.
    pub fn with_factor(f_t: f64) -> Self {
        Self { f_t }
    }

    pub fn factor(&self) -> f64 {
        self.f_t
    }

    pub fn k(&self, kind: FittingKind) -> f64 {
        kind.base_k() * self.f_t
    }

    pub fn sum_k(&self, kinds: &[FittingKind]) -> f64 {
        kinds.iter().map(|&kind| self.k(kind)).sum()
    }

    /// 전체 (피팅, 보정 K) 목록
    pub fn entries(&self) -> Vec<(FittingKind, f64)> {
        FittingKind::ALL
            .iter()
            .map(|&kind| (kind, self.k(kind)))
            .collect()
    }
}
