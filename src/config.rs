use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::units::{FlowUnit, PressureUnit};

/// 기본 설정 파일 이름
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 보고서 출력 설정을 표현한다. 계산 자체는 항상 SI(m, m³/s, Pa·s) 기준이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 구간 합계 압력 표시 단위
    pub pressure_unit: PressureUnit,
    /// 유량 표시 단위
    pub flow_unit: FlowUnit,
    /// 소수점 자릿수
    pub precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pressure_unit: PressureUnit::Bar,
            flow_unit: FlowUnit::CubicMeterPerSecond,
            precision: 3,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
