//! 직렬 배관의 수두손실과 NPSHA 계산 로직을 라이브러리로 분리하여 CLI 외의 도구에서도 쓰도록 한다.

pub mod app;
pub mod case;
pub mod config;
pub mod conversion;
pub mod hydraulics;
pub mod quantity;
pub mod report;
pub mod roughness_db;
pub mod ui_cli;
pub mod units;
pub mod water;
