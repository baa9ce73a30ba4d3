//! 코일 공기측 열전달 계산 회귀 테스트.

use condenser_coil_toolbox::coil::condenser::{
    air_velocity, nusselt_number, CoilCalcError, CoilModel, CondenserCoilInput, NU_LAMINAR,
};

fn default_input() -> CondenserCoilInput {
    CondenserCoilInput::default()
}

#[test]
fn default_case_regression() {
    // 9.52mm 관, 600×1000mm 코일, 2500 m³/h, 35→45°C 대표 설계 케이스.
    let perf = CoilModel::default()
        .compute(&default_input())
        .expect("coil calc");
    assert!((perf.face_area_m2 - 0.6).abs() < 1e-12);
    assert!((perf.flow_area_m2 - 0.15).abs() < 1e-12);
    assert!((perf.velocity_m_per_s - 4.62962962962963).abs() < 1e-9);
    assert!((perf.reynolds - 2595.4732510288068).abs() < 1e-6, "Re={}", perf.reynolds);
    assert!((perf.nusselt - 11.180946941212596).abs() < 1e-9);
    assert!((perf.overall_u_w_per_m2_k - 30.77109347266492).abs() < 1e-9);
    assert!((perf.heat_duty_w - 7405.277777777778).abs() < 1e-6);
    assert!((perf.lmtd_c - 313.1233868754952).abs() < 1e-9);
    assert!((perf.required_area_m2 - 0.768569097701392).abs() < 1e-9);
    assert!((perf.fins_per_m - 551.18).abs() < 1e-9);
}

#[test]
fn laminar_case_uses_fixed_nusselt() {
    // 200 m³/h면 Re ≈ 208 로 층류 영역이다.
    let input = CondenserCoilInput {
        air_flow_m3_per_h: 200.0,
        ..default_input()
    };
    let perf = CoilModel::default().compute(&input).expect("coil calc");
    assert!(perf.reynolds < 2300.0, "Re={}", perf.reynolds);
    assert!((perf.nusselt - NU_LAMINAR).abs() < 1e-12);
    assert!((perf.velocity_m_per_s - 0.37037037037037035).abs() < 1e-12);
    assert!((perf.overall_u_w_per_m2_k - 10.072689075630253).abs() < 1e-9);
    assert!((perf.heat_duty_w - 592.4222222222222).abs() < 1e-9);
    assert!((perf.required_area_m2 - 0.18783235632906892).abs() < 1e-9);
}

#[test]
fn regime_boundary_is_inclusive_on_turbulent_side() {
    // Re < 2300 은 층류 상수, 경계값 2300.0 부터 Dittus-Boelter.
    assert!((nusselt_number(2299.999, 0.71) - NU_LAMINAR).abs() < 1e-12);
    let nu_at_boundary = nusselt_number(2300.0, 0.71);
    assert!((nu_at_boundary - 10.150504064652011).abs() < 1e-9);
    assert!(nu_at_boundary > NU_LAMINAR);
}

#[test]
fn repeated_calls_are_deterministic() {
    let model = CoilModel::default();
    let input = default_input();
    let a = model.compute(&input).expect("coil calc");
    let b = model.compute(&input).expect("coil calc");
    assert_eq!(a, b);
}

#[test]
fn more_flow_means_more_velocity_and_reynolds() {
    let model = CoilModel::default();
    let base = model.compute(&default_input()).expect("coil calc");
    let more = model
        .compute(&CondenserCoilInput {
            air_flow_m3_per_h: 3000.0,
            ..default_input()
        })
        .expect("coil calc");
    assert!(more.velocity_m_per_s > base.velocity_m_per_s);
    assert!(more.reynolds > base.reynolds);
}

#[test]
fn velocity_is_invariant_under_joint_flow_area_scaling() {
    let v1 = air_velocity(2500.0, 0.15);
    let v2 = air_velocity(5000.0, 0.30);
    assert!((v1 - v2).abs() < 1e-12);
}

#[test]
fn zero_height_is_invalid_geometry() {
    let input = CondenserCoilInput {
        coil_height_m: 0.0,
        ..default_input()
    };
    assert_eq!(
        CoilModel::default().compute(&input),
        Err(CoilCalcError::InvalidGeometry)
    );
}

#[test]
fn zero_tube_diameter_is_invalid_geometry() {
    let input = CondenserCoilInput {
        tube_outer_diameter_m: 0.0,
        ..default_input()
    };
    assert_eq!(
        CoilModel::default().compute(&input),
        Err(CoilCalcError::InvalidGeometry)
    );
}

#[test]
fn below_absolute_zero_is_invalid_temperature() {
    let input = CondenserCoilInput {
        air_inlet_temp_c: -300.0,
        ..default_input()
    };
    assert_eq!(
        CoilModel::default().compute(&input),
        Err(CoilCalcError::InvalidTemperature)
    );
}

#[test]
fn equal_inlet_outlet_is_invalid_temperature() {
    // 입출구 온도가 같으면 LMTD 분모가 0이라 오류로 처리한다.
    let input = CondenserCoilInput {
        air_inlet_temp_c: 40.0,
        air_outlet_temp_c: 40.0,
        ..default_input()
    };
    assert_eq!(
        CoilModel::default().compute(&input),
        Err(CoilCalcError::InvalidTemperature)
    );
}

#[test]
fn cooling_direction_gives_negative_duty() {
    // 출구가 입구보다 낮으면 Q가 음수로 그대로 반환된다.
    let input = CondenserCoilInput {
        air_inlet_temp_c: 35.0,
        air_outlet_temp_c: 25.0,
        ..default_input()
    };
    let perf = CoilModel::default().compute(&input).expect("coil calc");
    assert!(perf.heat_duty_w < 0.0, "Q={}", perf.heat_duty_w);
    assert!((perf.heat_duty_w + 7405.277777777778).abs() < 1e-6);
    assert!(perf.lmtd_c > 0.0);
    assert!(perf.required_area_m2 < 0.0);
}

#[test]
fn inert_fields_do_not_affect_results() {
    let model = CoilModel::default();
    let base = model.compute(&default_input()).expect("coil calc");
    let varied = model
        .compute(&CondenserCoilInput {
            fin_density_fpi: 20.0,
            tube_rows: 6,
            coil_thickness_m: 0.15,
            ..default_input()
        })
        .expect("coil calc");
    assert_eq!(base.velocity_m_per_s, varied.velocity_m_per_s);
    assert_eq!(base.reynolds, varied.reynolds);
    assert_eq!(base.overall_u_w_per_m2_k, varied.overall_u_w_per_m2_k);
    assert_eq!(base.heat_duty_w, varied.heat_duty_w);
    assert_eq!(base.required_area_m2, varied.required_area_m2);
    // 핀 밀도 환산값만 달라진다.
    assert!((varied.fins_per_m - 787.4).abs() < 1e-9);
}

#[test]
fn custom_air_properties_flow_through() {
    // 물성 구조체를 바꿔 끼우면 결과가 그에 따라 움직여야 한다.
    let mut model = CoilModel::default();
    model.air.density_kg_per_m3 = 1.2;
    let perf = model.compute(&default_input()).expect("coil calc");
    let base = CoilModel::default()
        .compute(&default_input())
        .expect("coil calc");
    assert!(perf.reynolds > base.reynolds);
    assert!((perf.reynolds / base.reynolds - 1.2 / 1.06).abs() < 1e-12);
}
