//! TOML 케이스 파일. 한 번의 배관 검토(유량, 유체, 구간, NPSHA 조건)를 기술한다.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hydraulics::{
    self, npsha, system_curve, CurveSettings, FittingKind, FittingTable, FluidProperties,
    HydraulicsError, NpshMargin, NpshaInput, NpshaReport, PipeSection, SystemCurve, SystemReport,
    ValidationError, STANDARD_GRAVITY,
};
use crate::roughness_db;
use crate::units::{FlowUnit, LengthUnit};
use crate::water::{self, WaterError};

/// 케이스 로드/평가 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("케이스 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Hydraulics(#[from] HydraulicsError),
    #[error("물성 계산 오류: {0}")]
    Water(#[from] WaterError),
    #[error("알 수 없는 배관 재질: {0}")]
    UnknownMaterial(String),
    #[error("roughness 와 material 중 하나만 지정해야 합니다")]
    AmbiguousRoughness,
    #[error("roughness 또는 material 을 지정해야 합니다")]
    MissingRoughness,
    #[error("사용자 정의 유체는 [npsha] vapor_pressure_head 를 지정해야 합니다")]
    MissingVaporPressure,
}

/// 유체 지정 방식.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FluidSpec {
    /// 밀도[kg/m³]와 점도[Pa·s]를 직접 지정
    Custom { density: f64, viscosity: f64 },
    /// 대기압 물. IF97 밀도와 점도 근사식을 사용
    Water { temperature_c: f64 },
}

/// 피팅 K 보정 옵션.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FittingOptions {
    /// f_T 계산용 상대 거칠기. 없으면 구간별 ε/D를 사용
    #[serde(default)]
    pub relative_roughness: Option<f64>,
}

/// 케이스 파일의 배관 구간. 피팅은 K 값 직접 입력과 이름 지정을 함께 쓸 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSection {
    /// 내경 (`diameter_unit` 기준)
    pub diameter: f64,
    /// 길이 [m]
    pub length: f64,
    #[serde(default)]
    pub elevation_change: f64,
    #[serde(default)]
    pub fittings_k: Vec<f64>,
    #[serde(default)]
    pub fittings: Vec<FittingKind>,
}

/// NPSHA 계산 조건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpshaSpec {
    #[serde(default = "default_atmospheric_head")]
    pub atmospheric_head: f64,
    #[serde(default)]
    pub static_head: f64,
    /// 없으면 물 유체에 한해 온도로부터 계산
    #[serde(default)]
    pub vapor_pressure_head: Option<f64>,
    #[serde(default)]
    pub npshr: Option<f64>,
}

fn default_atmospheric_head() -> f64 {
    10.33
}

fn default_gravity() -> f64 {
    STANDARD_GRAVITY
}

/// 케이스 파일 전체.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub name: Option<String>,
    pub flow_rate: f64,
    #[serde(default)]
    pub flow_unit: FlowUnit,
    #[serde(default)]
    pub diameter_unit: LengthUnit,
    /// 절대 거칠기 [m]
    #[serde(default)]
    pub roughness: Option<f64>,
    /// `roughness_db` 재질 코드
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    pub fluid: FluidSpec,
    #[serde(default)]
    pub fittings: FittingOptions,
    pub sections: Vec<CaseSection>,
    #[serde(default)]
    pub npsha: Option<NpshaSpec>,
    #[serde(default)]
    pub curve: Option<CurveSettings>,
}

/// 케이스 평가 결과.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub name: String,
    pub fluid: FluidProperties,
    pub flow_rate: f64,
    pub report: SystemReport,
    pub npsha: Option<NpshaReport>,
    pub margin: Option<NpshMargin>,
    pub curve: Option<SystemCurve>,
}

impl Case {
    pub fn load(path: &Path) -> Result<Self, CaseError> {
        let content = fs::read_to_string(path)?;
        let case = Self::from_toml_str(&content)?;
        info!(
            "케이스 로드: {} ({}개 구간)",
            path.display(),
            case.sections.len()
        );
        Ok(case)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CaseError> {
        Ok(toml::from_str(content)?)
    }

    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "Unnamed case".to_string())
    }

    /// 절대 거칠기 [m]
    pub fn roughness_m(&self) -> Result<f64, CaseError> {
        match (self.roughness, self.material.as_deref()) {
            (Some(_), Some(_)) => Err(CaseError::AmbiguousRoughness),
            (Some(e), None) => Ok(e),
            (None, Some(code)) => roughness_db::roughness(code)
                .ok_or_else(|| CaseError::UnknownMaterial(code.to_string())),
            (None, None) => Err(CaseError::MissingRoughness),
        }
    }

    pub fn fluid_properties(&self) -> Result<FluidProperties, CaseError> {
        let (density, viscosity) = match self.fluid {
            FluidSpec::Custom { density, viscosity } => (density, viscosity),
            FluidSpec::Water { temperature_c } => {
                let state = water::at_atmospheric(temperature_c)?;
                (state.density, state.viscosity)
            }
        };
        Ok(FluidProperties::new(density, viscosity, self.roughness_m()?).with_gravity(self.gravity))
    }

    pub fn flow_rate_m3_s(&self) -> f64 {
        self.flow_unit.to_m3_per_s(self.flow_rate)
    }

    /// 케이스 구간을 계산용 구간으로 변환한다. 이름으로 지정한 피팅은 Crane 표로 K를 구한다.
    pub fn pipe_sections(&self) -> Result<Vec<PipeSection>, CaseError> {
        let roughness = self.roughness_m()?;
        self.sections
            .iter()
            .enumerate()
            .map(|(idx, s)| -> Result<PipeSection, CaseError> {
                let diameter = self.diameter_unit.to_meters(s.diameter);
                if !diameter.is_finite() || diameter <= 0.0 {
                    return Err(HydraulicsError::from(ValidationError::NonPositiveDiameter {
                        section: Some(idx + 1),
                        value: diameter,
                    })
                    .into());
                }
                let mut k = s.fittings_k.clone();
                if !s.fittings.is_empty() {
                    let rr = self
                        .fittings
                        .relative_roughness
                        .unwrap_or(roughness / diameter);
                    let table = FittingTable::crane(rr)?;
                    k.extend(s.fittings.iter().map(|&kind| table.k(kind)));
                }
                Ok(PipeSection::new(diameter, s.length)
                    .with_fittings_k(k)
                    .with_elevation_change(s.elevation_change))
            })
            .collect()
    }

    fn vapor_pressure_head(&self, spec: &NpshaSpec, fluid: &FluidProperties) -> Result<f64, CaseError> {
        match (spec.vapor_pressure_head, &self.fluid) {
            (Some(h), _) => Ok(h),
            (None, FluidSpec::Water { temperature_c }) => Ok(water::vapor_pressure_head(
                *temperature_c,
                fluid.density,
                fluid.gravity,
            )?),
            (None, FluidSpec::Custom { .. }) => Err(CaseError::MissingVaporPressure),
        }
    }

    /// 케이스를 계산한다. `with_curve`가 참이면 `[curve]` 설정(없으면 기본값)으로 시스템 곡선도 계산한다.
    pub fn evaluate(&self, with_curve: bool) -> Result<CaseOutcome, CaseError> {
        let fluid = self.fluid_properties()?;
        let sections = self.pipe_sections()?;
        let flow_rate = self.flow_rate_m3_s();
        let report = hydraulics::compute(&sections, flow_rate, &fluid)?;

        let (npsha, margin) = match &self.npsha {
            Some(spec) => {
                let vapor = self.vapor_pressure_head(spec, &fluid)?;
                let mut input =
                    NpshaInput::from_report(&report, spec.atmospheric_head, spec.static_head, vapor);
                input.gravity = fluid.gravity;
                let result = npsha::evaluate(&input)?;
                let margin = spec.npshr.map(|npshr| result.margin(npshr));
                (Some(result), margin)
            }
            None => (None, None),
        };

        let curve = if with_curve || self.curve.is_some() {
            let settings = self.curve.unwrap_or_default();
            Some(system_curve::sweep(&sections, flow_rate, &fluid, &settings)?)
        } else {
            None
        };

        Ok(CaseOutcome {
            name: self.display_name(),
            fluid,
            flow_rate,
            report,
            npsha,
            margin,
            curve,
        })
    }
}
