use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::hydraulics::{self, FittingTable, FluidProperties, NpshaInput, PipeSection};
use crate::report;
use crate::units::PressureUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PipeLoss,
    Npsha,
    FittingTable,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Pipe Loss Toolbox ===");
    println!("1) 배관 수두손실 계산");
    println!("2) NPSHA 계산");
    println!("3) 피팅 K 값 표 (Crane)");
    println!("4) 단위 변환기");
    println!("5) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::PipeLoss),
            "2" => return Ok(MenuChoice::Npsha),
            "3" => return Ok(MenuChoice::FittingTable),
            "4" => return Ok(MenuChoice::UnitConversion),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 배관 구간을 하나씩 입력받아 수두손실을 계산한다.
pub fn handle_pipe_loss(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 배관 수두손실 --");
    let density = read_f64("유체 밀도 [kg/m3] (물 1000, 해수 1025): ")?;
    let viscosity = read_f64("점도 [Pa·s] (물 20°C 약 0.001): ")?;
    let roughness = read_f64("거칠기 ε [m] (탄소강 배관 약 0.0000457): ")?;
    let flow_m3_h = read_f64("체적 유량 [m3/h]: ")?;
    let count = loop {
        let s = read_line("구간 개수: ")?;
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => break n,
            _ => println!("1 이상의 정수를 입력하세요."),
        }
    };

    let mut sections = Vec::with_capacity(count);
    for i in 1..=count {
        println!("[구간 {i}]");
        let diameter_mm = read_f64("  내경 [mm]: ")?;
        let length = read_f64("  길이 [m]: ")?;
        let elevation = read_f64("  높이 변화 [m] (상승 +, 없으면 0): ")?;
        let k_sum = read_f64("  피팅 K 합계 (없으면 0): ")?;
        sections.push(
            PipeSection::new(diameter_mm / 1000.0, length)
                .with_fittings_k(vec![k_sum])
                .with_elevation_change(elevation),
        );
    }

    let fluid = FluidProperties::new(density, viscosity, roughness);
    let result = hydraulics::compute(&sections, flow_m3_h / 3600.0, &fluid)?;
    print!("{}", report::render_system_report(&result, &fluid, cfg));
    Ok(())
}

/// NPSHA 메뉴를 처리한다.
pub fn handle_npsha() -> Result<(), AppError> {
    println!("\n-- NPSHA --");
    let input = NpshaInput {
        atmospheric_head: read_f64("대기압 수두 [m] (해수면 10.33): ")?,
        static_head: read_f64("정수두 [m] (액면이 펌프보다 위 +): ")?,
        friction_head_loss: read_f64("흡입 배관 손실 수두 [m]: ")?,
        flow_velocity: read_f64("흡입 플랜지 유속 [m/s]: ")?,
        vapor_pressure_head: read_f64("증기압 수두 [m]: ")?,
        ..NpshaInput::default()
    };
    let npshr = read_f64("펌프 NPSHr [m] (모르면 0): ")?;
    let result = hydraulics::npsha::evaluate(&input)?;
    let margin = (npshr > 0.0).then(|| result.margin(npshr));
    print!("{}", report::render_npsha(&result, margin.as_ref()));
    Ok(())
}

/// 상대 거칠기를 입력받아 보정된 피팅 K 값 표를 출력한다.
pub fn handle_fitting_table() -> Result<(), AppError> {
    println!("\n-- 피팅 K 값 (Crane TP-410) --");
    let rr = read_f64("상대 거칠기 ε/D: ")?;
    let table = FittingTable::crane(rr)?;
    println!("f_T = {:.5}", table.factor());
    for (kind, k) in table.entries() {
        println!("{:<26} K = {:.4}", kind.name(), k);
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion() -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    println!("항목: pressure, length, flow, viscosity");
    let kind = read_line("항목 입력: ")?;
    let value = read_f64("값 입력: ")?;
    let from_unit = read_line("입력 단위(ex: bar, mm, m3/h, cP): ")?;
    let to_unit = read_line("변환 단위(ex: kPa, in, L/s, Pa.s): ")?;
    let result =
        conversion::convert_named(kind.trim(), value, from_unit.trim(), to_unit.trim())?;
    println!("변환 결과: {result} {}", to_unit.trim());
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 압력 표시 단위: {}", cfg.pressure_unit.symbol());
    println!("1) bar  2) kPa  3) Pa  4) psi  5) mH2O");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.pressure_unit = match sel.trim() {
        "1" => PressureUnit::Bar,
        "2" => PressureUnit::KiloPascal,
        "3" => PressureUnit::Pascal,
        "4" => PressureUnit::Psi,
        "5" => PressureUnit::MeterWater,
        _ => {
            println!("잘못된 입력이므로 변경하지 않습니다.");
            cfg.pressure_unit
        }
    };
    println!("압력 표시 단위가 {} 로 설정되었습니다.", cfg.pressure_unit.symbol());
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
