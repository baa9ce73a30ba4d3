#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.
//!
//! 왼쪽 패널에 기하/공기측 입력 폼을 두고, 가운데 패널에 계산 결과를
//! 매 프레임 다시 계산해 표시한다.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use condenser_coil_toolbox::{
    coil::condenser::{CoilCalcError, CoilModel, CondenserCoilInput, RE_TRANSITION},
    config, i18n,
    units::{convert_length, LengthUnit},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(980.0, 640.0));
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Condenser Coil Calculator",
        native_options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            if let Some(path) = app_cfg.custom_font_path.clone() {
                if let Err(e) = load_custom_font(&cc.egui_ctx, &path) {
                    eprintln!("Font error: {e}");
                }
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시를 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래 번들 폰트
/// 2) Windows 시스템 폰트(맑은 고딕/굴림/바탕 등)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_candidates = ["assets/fonts/malgun.ttf", "assets/fonts/NotoSansKR-Regular.ttf"];
    for cand in asset_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes =
                fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts_dir = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "malgunbd.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts_dir.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn unit_combo(ui: &mut egui::Ui, value: &mut String, options: &[(&str, &str)]) {
    egui::ComboBox::from_id_source(ui.next_auto_id())
        .selected_text(value.clone())
        .width(64.0)
        .show_ui(ui, |ui| {
            for (code, label) in options {
                ui.selectable_value(value, code.to_string(), *label);
            }
        });
}

fn parse_length_unit_gui(code: &str) -> LengthUnit {
    match code {
        "m" => LengthUnit::Meter,
        "in" => LengthUnit::Inch,
        _ => LengthUnit::Millimeter,
    }
}

fn convert_length_gui(v: f64, from: &str, to: &str) -> f64 {
    convert_length(v, parse_length_unit_gui(from), parse_length_unit_gui(to))
}

fn length_unit_options() -> &'static [(&'static str, &'static str)] {
    &[("mm", "mm"), ("in", "in")]
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ThemeChoice {
    System,
    Light,
    Dark,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    theme: ThemeChoice,

    // 입력 폼 상태 (표시 단위 기준)
    tube_od: f64,
    tube_od_unit: String,
    coil_height_mm: f64,
    coil_length_mm: f64,
    fin_density_fpi: f64,
    tube_rows: u32,
    coil_thickness_mm: f64,
    air_flow_m3h: f64,
    air_temp_in_c: f64,
    air_temp_out_c: f64,

    model: CoilModel,

    show_settings_modal: bool,
    show_formula_modal: bool,
    show_help_modal: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let defaults = CondenserCoilInput::default();
        Self {
            config,
            tr,
            theme: ThemeChoice::System,
            tube_od: convert_length(defaults.tube_outer_diameter_m, LengthUnit::Meter, LengthUnit::Millimeter),
            tube_od_unit: "mm".to_string(),
            coil_height_mm: convert_length(defaults.coil_height_m, LengthUnit::Meter, LengthUnit::Millimeter),
            coil_length_mm: convert_length(defaults.coil_length_m, LengthUnit::Meter, LengthUnit::Millimeter),
            fin_density_fpi: defaults.fin_density_fpi,
            tube_rows: defaults.tube_rows,
            coil_thickness_mm: convert_length(defaults.coil_thickness_m, LengthUnit::Meter, LengthUnit::Millimeter),
            air_flow_m3h: defaults.air_flow_m3_per_h,
            air_temp_in_c: defaults.air_inlet_temp_c,
            air_temp_out_c: defaults.air_outlet_temp_c,
            model: CoilModel::default(),
            show_settings_modal: false,
            show_formula_modal: false,
            show_help_modal: false,
        }
    }

    /// 폼 상태를 SI 단위의 계산 입력으로 변환한다.
    fn current_input(&self) -> CondenserCoilInput {
        CondenserCoilInput {
            tube_outer_diameter_m: convert_length_gui(self.tube_od, &self.tube_od_unit, "m"),
            coil_height_m: convert_length_gui(self.coil_height_mm, "mm", "m"),
            coil_length_m: convert_length_gui(self.coil_length_mm, "mm", "m"),
            fin_density_fpi: self.fin_density_fpi,
            tube_rows: self.tube_rows,
            coil_thickness_m: convert_length_gui(self.coil_thickness_mm, "mm", "m"),
            air_flow_m3_per_h: self.air_flow_m3h,
            air_inlet_temp_c: self.air_temp_in_c,
            air_outlet_temp_c: self.air_temp_out_c,
        }
    }

    fn reset_to_defaults(&mut self) {
        let defaults = CondenserCoilInput::default();
        self.tube_od = convert_length_gui(defaults.tube_outer_diameter_m, "m", &self.tube_od_unit);
        self.coil_height_mm = convert_length_gui(defaults.coil_height_m, "m", "mm");
        self.coil_length_mm = convert_length_gui(defaults.coil_length_m, "m", "mm");
        self.fin_density_fpi = defaults.fin_density_fpi;
        self.tube_rows = defaults.tube_rows;
        self.coil_thickness_mm = convert_length_gui(defaults.coil_thickness_m, "m", "mm");
        self.air_flow_m3h = defaults.air_flow_m3_per_h;
        self.air_temp_in_c = defaults.air_inlet_temp_c;
        self.air_temp_out_c = defaults.air_outlet_temp_c;
    }

    fn rebuild_translator(&mut self) {
        let lang_code = i18n::resolve_language("auto", Some(self.config.language.as_str()));
        self.tr =
            i18n::Translator::new_with_pack(&lang_code, self.config.language_pack_dir.as_deref());
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        heading_with_tip(
            ui,
            &txt("gui.coil.heading", "Air-Cooled Condenser Coil"),
            &txt(
                "gui.coil.tip",
                "Air-side velocity, Re, Nu, U, heat duty, LMTD and required surface area",
            ),
        );
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading(txt("gui.coil.geometry_heading", "Geometry Inputs"));
            egui::Grid::new("coil_geometry_grid")
                .num_columns(3)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.coil.tube_od", "Tube outer diameter"),
                        &txt(
                            "gui.coil.tube_od_tip",
                            "Outer diameter of the condenser tubes; characteristic length for Re and U",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.tube_od).speed(0.05));
                    unit_combo(ui, &mut self.tube_od_unit, length_unit_options());
                    ui.end_row();

                    ui.label(txt("gui.coil.height", "Coil height"));
                    ui.add(egui::DragValue::new(&mut self.coil_height_mm).speed(5.0));
                    ui.label("mm");
                    ui.end_row();

                    ui.label(txt("gui.coil.length", "Coil length"));
                    ui.add(egui::DragValue::new(&mut self.coil_length_mm).speed(5.0));
                    ui.label("mm");
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.coil.fin_density", "Fin density [FPI]"),
                        &txt(
                            "gui.coil.fin_density_tip",
                            "Fins per inch; recorded only, not used by the current formulas",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.fin_density_fpi).speed(0.5));
                    ui.label("FPI");
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.coil.tube_rows", "Tube rows"),
                        &txt(
                            "gui.coil.tube_rows_tip",
                            "Number of tube rows in air-flow direction; recorded only",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.tube_rows).speed(1.0));
                    ui.label("rows");
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.coil.thickness", "Coil thickness"),
                        &txt(
                            "gui.coil.thickness_tip",
                            "Coil depth in air-flow direction; recorded only",
                        ),
                    );
                    ui.add(egui::DragValue::new(&mut self.coil_thickness_mm).speed(1.0));
                    ui.label("mm");
                    ui.end_row();
                });
            ui.small(txt(
                "gui.coil.inert_note",
                "Fin density, tube rows and thickness are recorded only.",
            ));
        });
        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading(txt("gui.coil.air_heading", "Air Side Inputs"));
            egui::Grid::new("coil_air_grid")
                .num_columns(3)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label(txt("gui.coil.air_flow", "Air flow rate"));
                    ui.add(egui::DragValue::new(&mut self.air_flow_m3h).speed(10.0));
                    ui.label("m³/h");
                    ui.end_row();

                    ui.label(txt("gui.coil.temp_in", "Air inlet temperature"));
                    ui.add(egui::DragValue::new(&mut self.air_temp_in_c).speed(0.5));
                    ui.label("°C");
                    ui.end_row();

                    ui.label(txt("gui.coil.temp_out", "Air outlet temperature"));
                    ui.add(egui::DragValue::new(&mut self.air_temp_out_c).speed(0.5));
                    ui.label("°C");
                    ui.end_row();
                });
        });
        ui.add_space(8.0);

        if ui.button(txt("gui.coil.reset", "Reset to defaults")).clicked() {
            self.reset_to_defaults();
        }
    }

    fn ui_results(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        ui.heading(txt("gui.result.heading", "Results"));
        ui.add_space(4.0);

        match self.model.compute(&self.current_input()) {
            Ok(perf) => {
                let regime = if perf.reynolds < RE_TRANSITION {
                    txt("gui.result.regime_laminar", "laminar")
                } else {
                    txt("gui.result.regime_turbulent", "turbulent")
                };
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    egui::Grid::new("coil_results_grid")
                        .num_columns(2)
                        .spacing([16.0, 6.0])
                        .show(ui, |ui| {
                            ui.label(txt("gui.result.velocity", "Air velocity"));
                            ui.strong(format!("{:.2} m/s", perf.velocity_m_per_s));
                            ui.end_row();

                            ui.label(txt("gui.result.reynolds", "Reynolds number"));
                            ui.strong(format!("{:.0} ({regime})", perf.reynolds));
                            ui.end_row();

                            ui.label(txt("gui.result.nusselt", "Nusselt number"));
                            ui.strong(format!("{:.1}", perf.nusselt));
                            ui.end_row();

                            ui.label(txt(
                                "gui.result.overall_u",
                                "Overall heat transfer coefficient U",
                            ));
                            ui.strong(format!("{:.2} W/m²·K", perf.overall_u_w_per_m2_k));
                            ui.end_row();

                            ui.label(txt("gui.result.heat_duty", "Heat transfer rate Q"));
                            ui.strong(format!("{:.2} kW", perf.heat_duty_w / 1000.0));
                            ui.end_row();

                            ui.label(txt(
                                "gui.result.lmtd",
                                "Log mean temperature difference (LMTD)",
                            ));
                            ui.strong(format!("{:.2} °C", perf.lmtd_c));
                            ui.end_row();

                            ui.label(txt("gui.result.required_area", "Required surface area"));
                            ui.strong(format!("{:.2} m²", perf.required_area_m2));
                            ui.end_row();
                        });
                });
                ui.add_space(8.0);
                ui.collapsing(txt("gui.result.info_heading", "Informational"), |ui| {
                    egui::Grid::new("coil_info_grid")
                        .num_columns(2)
                        .spacing([16.0, 4.0])
                        .show(ui, |ui| {
                            ui.label(txt("gui.result.face_area", "Face area"));
                            ui.label(format!("{:.3} m²", perf.face_area_m2));
                            ui.end_row();
                            ui.label(txt("gui.result.flow_area", "Free-flow area"));
                            ui.label(format!("{:.3} m²", perf.flow_area_m2));
                            ui.end_row();
                            ui.label(txt("gui.result.fin_pitch", "Fin density"));
                            ui.label(format!("{:.0} fins/m", perf.fins_per_m));
                            ui.end_row();
                        });
                });
            }
            Err(e) => {
                ui.colored_label(ui.visuals().warn_fg_color, error_text(&txt, e));
            }
        }
    }
}

fn error_text(txt: &impl Fn(&str, &str) -> String, e: CoilCalcError) -> String {
    match e {
        CoilCalcError::InvalidGeometry => txt(
            "gui.error.invalid_geometry",
            "Coil dimensions must be positive to define the flow area.",
        ),
        CoilCalcError::InvalidTemperature => txt(
            "gui.error.invalid_temperature",
            "Temperatures must be above absolute zero and inlet must differ from outlet.",
        ),
        CoilCalcError::DegenerateResult => txt(
            "gui.error.degenerate_result",
            "U × LMTD is zero; required area is undefined.",
        ),
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        match self.theme {
            ThemeChoice::System => {}
            ThemeChoice::Light => ctx.set_visuals(egui::Visuals::light()),
            ThemeChoice::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Condenser Coil Calculator"));
                ui.separator();
                if ui.button(txt("gui.formula.button", "Formula reference")).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 공식 참조 모달
        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula Reference"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    for (key, default) in [
                        (
                            "gui.formula.flow_area",
                            "Free-flow area: A_flow = L × H × 0.25 (25% free-area assumption)",
                        ),
                        ("gui.formula.velocity", "Velocity: v = (V̇/3600) / A_flow"),
                        ("gui.formula.reynolds", "Reynolds: Re = ρ·v·d / μ"),
                        (
                            "gui.formula.nusselt",
                            "Nusselt: Re < 2300 → Nu = 3.66, otherwise Nu = 0.023·Re^0.8·Pr^0.3 (Dittus-Boelter)",
                        ),
                        ("gui.formula.overall_u", "Overall coefficient: U = Nu·k / d"),
                        (
                            "gui.formula.heat_duty",
                            "Heat duty: Q = ρ·(V̇/3600)·cp·(Tout − Tin)",
                        ),
                        ("gui.formula.lmtd", "LMTD = (Tout − Tin) / ln(Tout_K / Tin_K)"),
                        ("gui.formula.area", "Required area: A = Q / (U·LMTD)"),
                    ] {
                        ui.label(txt(key, default));
                    }
                    ui.add_space(6.0);
                    ui.small(txt(
                        "gui.formula.laminar_note",
                        "The laminar constant 3.66 is the fully-developed internal duct value; for fin-coil cross flow treat it as a model limitation.",
                    ));
                });
        }

        // 설정 모달
        if self.show_settings_modal {
            let mut language_changed = false;
            let mut show = self.show_settings_modal;
            egui::Window::new(txt("gui.settings.title", "Settings"))
                .collapsible(false)
                .resizable(false)
                .open(&mut show)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    egui::Grid::new("settings_grid")
                        .num_columns(2)
                        .spacing([12.0, 8.0])
                        .show(ui, |ui| {
                            ui.label(txt("gui.settings.language", "Language"));
                            egui::ComboBox::from_id_source("settings_language")
                                .selected_text(self.config.language.clone())
                                .show_ui(ui, |ui| {
                                    for code in ["auto", "ko", "en-us"] {
                                        if ui
                                            .selectable_value(
                                                &mut self.config.language,
                                                code.to_string(),
                                                code,
                                            )
                                            .changed()
                                        {
                                            language_changed = true;
                                        }
                                    }
                                });
                            ui.end_row();

                            ui.label(txt("gui.settings.theme", "Theme"));
                            ui.horizontal(|ui| {
                                ui.selectable_value(
                                    &mut self.theme,
                                    ThemeChoice::System,
                                    txt("gui.settings.theme_system", "System"),
                                );
                                ui.selectable_value(
                                    &mut self.theme,
                                    ThemeChoice::Light,
                                    txt("gui.settings.theme_light", "Light"),
                                );
                                ui.selectable_value(
                                    &mut self.theme,
                                    ThemeChoice::Dark,
                                    txt("gui.settings.theme_dark", "Dark"),
                                );
                            });
                            ui.end_row();

                            ui.label(txt("gui.settings.font", "Custom font"));
                            ui.horizontal(|ui| {
                                if ui
                                    .button(txt("gui.settings.font_pick", "Choose font file..."))
                                    .clicked()
                                {
                                    if let Some(path) = FileDialog::new()
                                        .add_filter("font", &["ttf", "ttc", "otf"])
                                        .pick_file()
                                    {
                                        let path_str = path.display().to_string();
                                        if let Err(e) = load_custom_font(ctx, &path_str) {
                                            eprintln!("Font error: {e}");
                                        } else {
                                            self.config.custom_font_path = Some(path_str);
                                            if let Err(e) = self.config.save() {
                                                eprintln!("Config error: {e}");
                                            }
                                        }
                                    }
                                }
                                if self.config.custom_font_path.is_some()
                                    && ui.button(txt("gui.settings.font_clear", "Clear")).clicked()
                                {
                                    self.config.custom_font_path = None;
                                    if let Err(e) = setup_fonts(ctx) {
                                        eprintln!("Font error: {e}");
                                    }
                                    if let Err(e) = self.config.save() {
                                        eprintln!("Config error: {e}");
                                    }
                                }
                            });
                            ui.end_row();
                        });
                });
            self.show_settings_modal = show;
            if language_changed {
                self.rebuild_translator();
                if let Err(e) = self.config.save() {
                    eprintln!("Config error: {e}");
                }
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.label(txt(
                        "gui.about.body",
                        "Computes steady-state air-side heat-transfer parameters for an air-cooled condenser coil. Enter geometry and air-flow conditions on the left; results update immediately.",
                    ));
                });
        }

        egui::SidePanel::left("inputs_panel")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.ui_inputs(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.ui_results(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fields_map_to_si_input() {
        let app = GuiApp::new(config::Config::default());
        let input = app.current_input();
        assert!((input.tube_outer_diameter_m - 0.00952).abs() < 1e-12);
        assert!((input.coil_height_m - 0.6).abs() < 1e-12);
        assert!((input.coil_length_m - 1.0).abs() < 1e-12);
        assert!((input.coil_thickness_m - 0.0762).abs() < 1e-12);
        assert_eq!(input.tube_rows, 3);
        assert!((input.air_flow_m3_per_h - 2500.0).abs() < 1e-12);
    }

    #[test]
    fn inch_tube_od_maps_to_meters() {
        let mut app = GuiApp::new(config::Config::default());
        app.tube_od = 0.375;
        app.tube_od_unit = "in".to_string();
        let input = app.current_input();
        assert!((input.tube_outer_diameter_m - 0.009525).abs() < 1e-9);
    }

    #[test]
    fn default_case_is_turbulent() {
        let app = GuiApp::new(config::Config::default());
        let perf = app.model.compute(&app.current_input()).expect("coil calc");
        assert!(perf.reynolds >= RE_TRANSITION, "Re={}", perf.reynolds);
        assert!((perf.reynolds - 2595.47).abs() < 0.01);
    }

    #[test]
    fn reset_restores_defaults_in_current_unit() {
        let mut app = GuiApp::new(config::Config::default());
        app.tube_od = 12.7;
        app.air_flow_m3h = 100.0;
        app.reset_to_defaults();
        assert!((app.tube_od - 9.52).abs() < 1e-9);
        assert!((app.air_flow_m3h - 2500.0).abs() < 1e-9);
    }
}
