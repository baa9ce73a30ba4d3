//! 길이/온도 단위 변환 회귀 테스트.

use condenser_coil_toolbox::units::{
    convert_length, convert_temperature, to_kelvin, LengthUnit, TemperatureUnit,
};

#[test]
fn millimeter_to_meter() {
    let m = convert_length(9.52, LengthUnit::Millimeter, LengthUnit::Meter);
    assert!((m - 0.00952).abs() < 1e-12);
}

#[test]
fn inch_to_millimeter() {
    // 3/8" 관 외경
    let mm = convert_length(0.375, LengthUnit::Inch, LengthUnit::Millimeter);
    assert!((mm - 9.525).abs() < 1e-9);
}

#[test]
fn meter_roundtrip_through_inch() {
    let back = convert_length(
        convert_length(0.0762, LengthUnit::Meter, LengthUnit::Inch),
        LengthUnit::Inch,
        LengthUnit::Meter,
    );
    assert!((back - 0.0762).abs() < 1e-12);
}

#[test]
fn celsius_to_kelvin() {
    assert!((to_kelvin(35.0, TemperatureUnit::Celsius) - 308.15).abs() < 1e-12);
    assert!((to_kelvin(308.15, TemperatureUnit::Kelvin) - 308.15).abs() < 1e-12);
}

#[test]
fn kelvin_to_celsius() {
    let c = convert_temperature(318.15, TemperatureUnit::Kelvin, TemperatureUnit::Celsius);
    assert!((c - 45.0).abs() < 1e-12);
}
