use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pipe_loss_toolbox::app::{self, OutputFormat};
use pipe_loss_toolbox::config;
use pipe_loss_toolbox::hydraulics::{NpshaInput, STANDARD_GRAVITY};

/// 직렬 배관 수두손실 / NPSHA 계산기
#[derive(Debug, Parser)]
#[command(name = "pipe_loss_toolbox", version)]
struct Cli {
    /// 출력 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// TOML 케이스 파일을 계산한다
    Run {
        case: PathBuf,
        /// 시스템 곡선도 계산한다
        #[arg(long)]
        curve: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// NPSHA를 계산한다 (모든 수두는 m)
    Npsha {
        #[arg(long, default_value_t = 10.33)]
        atmospheric: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        static_head: f64,
        #[arg(long)]
        friction: f64,
        /// 흡입 플랜지 유속 [m/s]
        #[arg(long)]
        velocity: f64,
        #[arg(long, default_value_t = 0.0)]
        vapor: f64,
        #[arg(long, default_value_t = STANDARD_GRAVITY)]
        gravity: f64,
        /// 펌프 요구 NPSH [m]
        #[arg(long)]
        npshr: Option<f64>,
    },
    /// 단위 변환 (pressure, length, flow, viscosity)
    Convert {
        kind: String,
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// 대화형 메뉴
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    env_logger::init();
    match try_run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default(&cli.config)?;
    match cli.command {
        Command::Run {
            case,
            curve,
            format,
        } => app::run_case(&case, curve, format, &cfg)?,
        Command::Npsha {
            atmospheric,
            static_head,
            friction,
            velocity,
            vapor,
            gravity,
            npshr,
        } => {
            let input = NpshaInput {
                atmospheric_head: atmospheric,
                static_head,
                friction_head_loss: friction,
                flow_velocity: velocity,
                vapor_pressure_head: vapor,
                gravity,
            };
            app::run_npsha(&input, npshr)?
        }
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => app::run_convert(&kind, value, &from, &to)?,
        Command::Interactive => app::run_interactive(&mut cfg, &cli.config)?,
    }
    Ok(())
}
