//! 공기 물성 관련 모듈을 모아둔다.

pub mod properties;

pub use properties::AirProperties;
