//! 계산 결과를 고정폭 텍스트 표로 만든다.

use std::fmt;

use crate::config::Config;
use crate::hydraulics::{FluidProperties, NpshMargin, NpshaReport, SystemCurve, SystemReport};
use crate::units::{convert_pressure, head_to_pressure_pa, PressureUnit};

const RULE_WIDTH: usize = 50;

/// 구간별 손실 표와 요약. 압력 열은 ρ·g·h로 환산해 설정 단위로 표시한다.
pub struct SystemReportTable<'a> {
    pub report: &'a SystemReport,
    pub fluid: &'a FluidProperties,
    pub config: &'a Config,
}

impl SystemReportTable<'_> {
    fn to_pressure(&self, head: f64) -> f64 {
        convert_pressure(
            head_to_pressure_pa(head, self.fluid.density, self.fluid.gravity),
            PressureUnit::Pascal,
            self.config.pressure_unit,
        )
    }
}

impl fmt::Display for SystemReportTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.config.precision;
        let unit = self.config.pressure_unit;
        let report = self.report;

        writeln!(f, "\nSUMMARY:")?;
        writeln!(
            f,
            "Total System Head Loss: {:.p$} m ({:.p$} {})",
            report.total_head_loss,
            self.to_pressure(report.total_head_loss),
            unit.symbol()
        )?;
        writeln!(
            f,
            "  friction {:.p$} m, fittings {:.p$} m, elevation {:.p$} m",
            report.friction_head_loss(),
            report.fittings_head_loss(),
            report.elevation_head()
        )?;

        writeln!(f, "\nDETAILED BREAKDOWN:")?;
        let total_header = format!("Total ({})", unit.symbol());
        writeln!(
            f,
            "{:>7} {:>8} {:>8} {:>9} {:>10} {:>12} {:>8} {:>12} {:>12} {:>13} {:>10} {:>12}",
            "Section",
            "D (m)",
            "L (m)",
            "V (m/s)",
            "Reynolds",
            "Regime",
            "f",
            "Friction (m)",
            "Fittings (m)",
            "Elevation (m)",
            "Total (m)",
            total_header
        )?;
        for s in &report.sections {
            writeln!(
                f,
                "{:>7} {:>8.4} {:>8.2} {:>9.3} {:>10.2e} {:>12} {:>8.5} {:>12.p$} {:>12.p$} {:>13.p$} {:>10.p$} {:>12.p$}",
                s.section_number,
                s.diameter,
                s.length,
                s.velocity,
                s.reynolds_number,
                s.flow_regime.label(),
                s.friction_factor,
                s.friction_head_loss,
                s.fittings_head_loss,
                s.elevation_head,
                s.total_head_loss,
                self.to_pressure(s.total_head_loss)
            )?;
        }
        Ok(())
    }
}

/// NPSHA 항목별 분해 표 (m, bar). 여유율이 있으면 경고와 함께 덧붙인다.
pub struct NpshaTable<'a> {
    pub report: &'a NpshaReport,
    pub margin: Option<&'a NpshMargin>,
}

impl fmt::Display for NpshaTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(f, "\nNPSHA Calculation Breakdown:")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f, "{:<27}{:>9}{:>13}", "", "Value (m)", "Value (bar)")?;
        for (label, term) in report.terms() {
            writeln!(
                f,
                "{:<27}{:>9.3}{:>13.3}",
                label, term.head_m, term.pressure_bar
            )?;
        }
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(
            f,
            "{:<27}{:>9.3}{:>13.3}",
            "NPSHA", report.npsha.head_m, report.npsha.pressure_bar
        )?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        if let Some(margin) = self.margin {
            writeln!(f, "NPSHA/NPSHr margin: {:.2}", margin.ratio)?;
            for w in &margin.warnings {
                writeln!(f, "경고: {w}")?;
            }
        }
        Ok(())
    }
}

/// 시스템 곡선 표. 설계 운전점을 별도 행으로 표시한다.
pub struct SystemCurveTable<'a> {
    pub curve: &'a SystemCurve,
    pub config: &'a Config,
}

impl fmt::Display for SystemCurveTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.config.flow_unit;
        let curve = self.curve;
        writeln!(f, "\nSYSTEM CURVE:")?;
        let flow_header = format!("Flow ({})", unit.symbol());
        writeln!(f, "{:>14} {:>16}", flow_header, "Head Loss (m)")?;
        for point in &curve.points {
            writeln!(
                f,
                "{:>14.4} {:>16.3}",
                unit.from_m3_per_s(point.flow_rate),
                point.head_loss
            )?;
        }
        writeln!(
            f,
            "Design Point: {:.4} {} -> {:.3} m",
            unit.from_m3_per_s(curve.design_point.flow_rate),
            unit.symbol(),
            curve.design_point.head_loss
        )
    }
}

pub fn render_system_report(report: &SystemReport, fluid: &FluidProperties, cfg: &Config) -> String {
    SystemReportTable {
        report,
        fluid,
        config: cfg,
    }
    .to_string()
}

pub fn render_npsha(report: &NpshaReport, margin: Option<&NpshMargin>) -> String {
    NpshaTable { report, margin }.to_string()
}

pub fn render_system_curve(curve: &SystemCurve, cfg: &Config) -> String {
    SystemCurveTable { curve, config: cfg }.to_string()
}
