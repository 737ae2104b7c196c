use std::path::Path;

use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::case::{Case, CaseError};
use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::hydraulics::{npsha, HydraulicsError, NpshaInput, NpshaReport, SystemReport};
use crate::report;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 케이스 파일 오류
    #[error("케이스 오류: {0}")]
    Case(#[from] CaseError),
    /// 배관 계산 오류
    #[error("배관 계산 오류: {0}")]
    Hydraulics(#[from] HydraulicsError),
    /// 결과 직렬화 오류
    #[error("결과 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 케이스 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Toml,
}

#[derive(Serialize)]
struct CaseSummary<'a> {
    name: &'a str,
    flow_rate: f64,
    report: &'a SystemReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    npsha: Option<&'a NpshaReport>,
}

/// 케이스 파일을 계산해 결과를 출력한다.
pub fn run_case(
    path: &Path,
    with_curve: bool,
    format: OutputFormat,
    cfg: &Config,
) -> Result<(), AppError> {
    let case = Case::load(path)?;
    let outcome = case.evaluate(with_curve)?;
    info!(
        "{}: 총 수두손실 {:.3} m",
        outcome.name, outcome.report.total_head_loss
    );
    if let Some(margin) = &outcome.margin {
        for w in &margin.warnings {
            warn!("{w}");
        }
    }

    match format {
        OutputFormat::Table => {
            println!("=== {} ===", outcome.name);
            print!(
                "{}",
                report::render_system_report(&outcome.report, &outcome.fluid, cfg)
            );
            if let Some(npsha) = &outcome.npsha {
                print!("{}", report::render_npsha(npsha, outcome.margin.as_ref()));
            }
            if let Some(curve) = &outcome.curve {
                print!("{}", report::render_system_curve(curve, cfg));
            }
        }
        OutputFormat::Toml => {
            let summary = CaseSummary {
                name: &outcome.name,
                flow_rate: outcome.flow_rate,
                report: &outcome.report,
                npsha: outcome.npsha.as_ref(),
            };
            print!("{}", toml::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

/// NPSHA 단독 계산.
pub fn run_npsha(input: &NpshaInput, npshr: Option<f64>) -> Result<(), AppError> {
    let result = npsha::evaluate(input)?;
    let margin = npshr.map(|n| result.margin(n));
    print!("{}", report::render_npsha(&result, margin.as_ref()));
    Ok(())
}

/// 단위 변환 한 건을 수행해 출력한다.
pub fn run_convert(kind: &str, value: f64, from: &str, to: &str) -> Result<(), AppError> {
    let result = conversion::convert_named(kind, value, from, to)?;
    println!("{value} {from} = {result} {to}");
    Ok(())
}

/// 대화형 메뉴 메인 루프를 실행한다.
pub fn run_interactive(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::PipeLoss => ui_cli::handle_pipe_loss(config)?,
            MenuChoice::Npsha => ui_cli::handle_npsha()?,
            MenuChoice::FittingTable => ui_cli::handle_fitting_table()?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion()?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save(config_path)?;
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
