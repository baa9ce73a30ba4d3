//! 단위 정의 및 변환 모듈 모음.
//!
//! 코일 계산기는 내부적으로 SI(m, K)만 사용하므로 입력 화면에서 쓰는
//! 길이/온도 변환만 제공한다.

pub mod length;
pub mod temperature;

pub use length::{convert_length, LengthUnit};
pub use temperature::{convert_temperature, from_kelvin, to_kelvin, TemperatureUnit};
