use thiserror::Error;

/// 수력 계산 오류. 입력 검증 실패와 수치 계산 실패를 구분한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HydraulicsError {
    /// 형상/유량/유체 물성이 구조적으로 잘못된 경우
    #[error("입력 오류: {0}")]
    Validation(#[from] ValidationError),
    /// 입력은 유효하지만 유한한 결과를 만들 수 없는 경우
    #[error("수치 오류: {0}")]
    Numerical(#[from] NumericalError),
}

impl HydraulicsError {
    pub fn is_validation(&self) -> bool {
        matches!(self, HydraulicsError::Validation(_))
    }

    pub fn is_numerical(&self) -> bool {
        matches!(self, HydraulicsError::Numerical(_))
    }
}

/// 입력 검증 오류. `section`은 1부터 시작하는 구간 번호이다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{} 내경은 0보다 커야 합니다 (D={value})", at(.section))]
    NonPositiveDiameter { section: Option<usize>, value: f64 },
    #[error("{} 길이는 0 이상이어야 합니다 (L={value})", at(.section))]
    NegativeLength { section: Option<usize>, value: f64 },
    #[error("{} 피팅 K 값은 0 이상이어야 합니다 (K={value})", at(.section))]
    NegativeFittingK { section: Option<usize>, value: f64 },
    #[error("{} 높이 변화가 유한하지 않습니다 ({value})", at(.section))]
    NonFiniteElevation { section: Option<usize>, value: f64 },
    #[error("유량은 0 이상이어야 합니다 (Q={0})")]
    NegativeFlowRate(f64),
    #[error("밀도는 0보다 커야 합니다 (rho={0})")]
    NonPositiveDensity(f64),
    #[error("점도는 0보다 커야 합니다 (mu={0})")]
    NonPositiveViscosity(f64),
    #[error("거칠기는 0 이상이어야 합니다 (e={0})")]
    NegativeRoughness(f64),
    #[error("중력가속도는 0보다 커야 합니다 (g={0})")]
    NonPositiveGravity(f64),
    #[error("레이놀즈수는 0 이상이어야 합니다 (Re={0})")]
    NegativeReynolds(f64),
    #[error("상대 거칠기는 0보다 커야 합니다 (e/D={0})")]
    NonPositiveRelativeRoughness(f64),
    #[error("시스템 곡선 설정 오류: {0}")]
    InvalidCurve(&'static str),
}

fn at(section: &Option<usize>) -> String {
    match section {
        Some(n) => format!("구간 {n}:"),
        None => "배관:".to_string(),
    }
}

/// 마찰계수 등 계산 결과가 유한하지 않거나 물리 범위를 벗어난 경우.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericalError {
    #[error("{quantity} 값이 유한하지 않습니다 ({value})")]
    NonFinite { quantity: &'static str, value: f64 },
    #[error("{quantity} 값이 물리 범위를 벗어났습니다 ({value})")]
    NonPhysical { quantity: &'static str, value: f64 },
}

/// 값이 유한한지 확인한다.
pub(crate) fn check_finite(value: f64, quantity: &'static str) -> Result<f64, HydraulicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumericalError::NonFinite { quantity, value }.into())
    }
}
