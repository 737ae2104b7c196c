//! 단위 정의 및 변환 모듈 모음.

pub mod flow;
pub mod length;
pub mod pressure;
pub mod viscosity;

pub use flow::{convert_flow, FlowUnit};
pub use length::{convert_length, LengthUnit};
pub use pressure::{convert_pressure, head_to_pressure_pa, pressure_pa_to_head, PressureUnit};
pub use viscosity::{convert_viscosity, ViscosityUnit};
