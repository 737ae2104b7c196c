/// 단위 변환기가 다루는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Pressure,
    Length,
    FlowRate,
    Viscosity,
}

impl QuantityKind {
    /// 명령행/메뉴 입력 문자열을 물리량으로 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pressure" | "p" => Some(QuantityKind::Pressure),
            "length" | "l" => Some(QuantityKind::Length),
            "flow" | "flow_rate" | "q" => Some(QuantityKind::FlowRate),
            "viscosity" | "mu" => Some(QuantityKind::Viscosity),
            _ => None,
        }
    }
}
