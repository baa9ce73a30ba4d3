use std::io::{self, Write};

use crate::air::AirProperties;
use crate::app::AppError;
use crate::coil::condenser::{CoilModel, CoilPerformance, CondenserCoilInput};
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::units::{convert_length, LengthUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CoilCalc,
    AirProperties,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COIL));
    println!("{}", tr.t(keys::MAIN_MENU_AIR_PROPS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::CoilCalc),
            "2" => return Ok(MenuChoice::AirProperties),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 코일 공기측 열전달 계산 메뉴를 처리한다.
///
/// 입력 실패(파싱)는 재입력을 요구하고, 계산 오류는 메시지로 알린 뒤
/// 메뉴로 돌아간다. 엔터만 치면 기본 설계 케이스 값을 쓴다.
pub fn handle_coil_calc(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COIL_HEADING));
    println!("{}", tr.t(keys::HELP_COIL));
    println!("{}", tr.t(keys::COIL_NOTE_INERT));

    let defaults = CondenserCoilInput::default();
    let mm = |m: f64| convert_length(m, LengthUnit::Meter, LengthUnit::Millimeter);

    println!("{}", tr.t(keys::COIL_GEOMETRY_SECTION));
    let tube_od_mm = read_f64_default(
        tr,
        tr.t(keys::PROMPT_TUBE_OD_MM),
        mm(defaults.tube_outer_diameter_m),
    )?;
    let height_mm =
        read_f64_default(tr, tr.t(keys::PROMPT_COIL_HEIGHT_MM), mm(defaults.coil_height_m))?;
    let length_mm =
        read_f64_default(tr, tr.t(keys::PROMPT_COIL_LENGTH_MM), mm(defaults.coil_length_m))?;
    let fin_density_fpi =
        read_f64_default(tr, tr.t(keys::PROMPT_FIN_DENSITY_FPI), defaults.fin_density_fpi)?;
    let tube_rows = read_u32_default(tr, tr.t(keys::PROMPT_TUBE_ROWS), defaults.tube_rows)?;
    let thickness_mm = read_f64_default(
        tr,
        tr.t(keys::PROMPT_COIL_THICKNESS_MM),
        mm(defaults.coil_thickness_m),
    )?;

    println!("{}", tr.t(keys::COIL_AIR_SECTION));
    let air_flow_m3h =
        read_f64_default(tr, tr.t(keys::PROMPT_AIR_FLOW_M3H), defaults.air_flow_m3_per_h)?;
    let air_temp_in_c =
        read_f64_default(tr, tr.t(keys::PROMPT_AIR_TEMP_IN_C), defaults.air_inlet_temp_c)?;
    let air_temp_out_c =
        read_f64_default(tr, tr.t(keys::PROMPT_AIR_TEMP_OUT_C), defaults.air_outlet_temp_c)?;

    let input = CondenserCoilInput {
        tube_outer_diameter_m: convert_length(tube_od_mm, LengthUnit::Millimeter, LengthUnit::Meter),
        coil_height_m: convert_length(height_mm, LengthUnit::Millimeter, LengthUnit::Meter),
        coil_length_m: convert_length(length_mm, LengthUnit::Millimeter, LengthUnit::Meter),
        fin_density_fpi,
        tube_rows,
        coil_thickness_m: convert_length(thickness_mm, LengthUnit::Millimeter, LengthUnit::Meter),
        air_flow_m3_per_h: air_flow_m3h,
        air_inlet_temp_c: air_temp_in_c,
        air_outlet_temp_c: air_temp_out_c,
    };

    match CoilModel::default().compute(&input) {
        Ok(perf) => print_performance(tr, &perf),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 계산 결과를 표시한다.
fn print_performance(tr: &Translator, perf: &CoilPerformance) {
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!("{} {:.2} m/s", tr.t(keys::RESULT_VELOCITY), perf.velocity_m_per_s);
    println!("{} {:.0}", tr.t(keys::RESULT_REYNOLDS), perf.reynolds);
    println!("{} {:.1}", tr.t(keys::RESULT_NUSSELT), perf.nusselt);
    println!(
        "{} {:.2} W/m²·K",
        tr.t(keys::RESULT_OVERALL_U),
        perf.overall_u_w_per_m2_k
    );
    println!("{} {:.2} kW", tr.t(keys::RESULT_HEAT_DUTY), perf.heat_duty_w / 1000.0);
    println!("{} {:.2} °C", tr.t(keys::RESULT_LMTD), perf.lmtd_c);
    println!("{} {:.2} m²", tr.t(keys::RESULT_REQUIRED_AREA), perf.required_area_m2);
    println!("{} {:.3} m²", tr.t(keys::RESULT_FLOW_AREA), perf.flow_area_m2);
    println!("{} {:.0} fins/m", tr.t(keys::RESULT_FIN_PITCH), perf.fins_per_m);
}

/// 계산에 쓰는 공기 물성 상수를 표시한다.
pub fn handle_air_properties(tr: &Translator) {
    let air = AirProperties::default();
    let model = CoilModel::default();
    println!("{}", tr.t(keys::AIR_PROPS_HEADING));
    println!("{}", tr.t(keys::AIR_PROPS_NOTE));
    println!("cp = {:.0} J/kg·K", air.specific_heat_j_per_kg_k);
    println!("ρ  = {:.2} kg/m³", air.density_kg_per_m3);
    println!("k  = {:.4} W/m·K", air.conductivity_w_per_m_k);
    println!("Pr = {:.2}", air.prandtl);
    println!("μ  = {:.1e} Pa·s", air.dynamic_viscosity_pa_s);
    println!("자유 면적 비율 = {:.2}", model.free_area_fraction);
}

/// 설정 메뉴를 처리한다. 현재는 언어 설정만 지원한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.language = "auto".into(),
        "2" => cfg.language = "ko".into(),
        "3" => cfg.language = "en-us".into(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64_default(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_default(tr: &Translator, label: &str, default: u32) -> Result<u32, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
