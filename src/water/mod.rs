//! 물 물성 계산 모듈.

pub mod properties;

pub use properties::*;
