//! 배관 재질별 절대 거칠기 표.
//! 값은 Crane TP-410 및 일반 설계 자료의 대표값이며 신관 기준이다.

#[derive(Debug)]
pub struct PipeMaterial {
    pub code: &'static str,
    pub name: &'static str,
    /// 절대 거칠기 [m]
    pub roughness_m: f64,
}

pub fn materials() -> &'static [PipeMaterial] {
    MATERIALS
}

/// 코드 또는 이름으로 재질을 찾는다 (대소문자 무시).
pub fn find_material(code: &str) -> Option<&'static PipeMaterial> {
    let code = code.trim();
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

pub fn roughness(code: &str) -> Option<f64> {
    find_material(code).map(|m| m.roughness_m)
}

const MATERIALS: &[PipeMaterial] = &[
    PipeMaterial {
        code: "commercial_steel",
        name: "Commercial steel",
        roughness_m: 4.57e-5,
    },
    PipeMaterial {
        code: "galvanized_steel",
        name: "Galvanized steel",
        roughness_m: 1.5e-4,
    },
    PipeMaterial {
        code: "cast_iron",
        name: "Cast iron",
        roughness_m: 2.6e-4,
    },
    PipeMaterial {
        code: "ductile_iron_lined",
        name: "Ductile iron, cement lined",
        roughness_m: 2.5e-5,
    },
    PipeMaterial {
        code: "stainless_steel",
        name: "Stainless steel",
        roughness_m: 1.5e-5,
    },
    PipeMaterial {
        code: "copper",
        name: "Drawn copper",
        roughness_m: 1.5e-6,
    },
    PipeMaterial {
        code: "pvc",
        name: "PVC",
        roughness_m: 1.5e-6,
    },
    PipeMaterial {
        code: "hdpe",
        name: "HDPE",
        roughness_m: 7.0e-6,
    },
    PipeMaterial {
        code: "concrete",
        name: "Concrete",
        roughness_m: 3.0e-4,
    },
    PipeMaterial {
        code: "riveted_steel",
        name: "Riveted steel",
        roughness_m: 3.0e-3,
    },
];
