//! 배관 수두손실 계산 핵심 모듈 모음.
//! 마찰계수, 구간별 손실 합산, NPSHA, 피팅 표, 시스템 곡선으로 구성한다.

pub mod error;
pub mod fittings;
pub mod friction;
pub mod npsha;
pub mod section;
pub mod system_curve;

pub use error::{HydraulicsError, NumericalError, ValidationError};
pub use fittings::{crane_friction_factor, FittingKind, FittingTable};
pub use friction::FlowRegime;
pub use npsha::{HeadTerm, NpshMargin, NpshaInput, NpshaReport, HEAD_M_PER_BAR};
pub use section::{
    compute, compute_parallel, FluidProperties, PipeSection, SectionResult, SystemReport,
    STANDARD_GRAVITY,
};
pub use system_curve::{CurvePoint, CurveSettings, SystemCurve};
