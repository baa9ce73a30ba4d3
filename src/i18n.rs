use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COIL: &str = "main_menu.coil";
    pub const MAIN_MENU_AIR_PROPS: &str = "main_menu.air_props";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const COIL_HEADING: &str = "coil.heading";
    pub const COIL_NOTE_INERT: &str = "coil.note_inert";
    pub const COIL_GEOMETRY_SECTION: &str = "coil.geometry_section";
    pub const COIL_AIR_SECTION: &str = "coil.air_section";
    pub const PROMPT_TUBE_OD_MM: &str = "coil.prompt.tube_od_mm";
    pub const PROMPT_COIL_HEIGHT_MM: &str = "coil.prompt.height_mm";
    pub const PROMPT_COIL_LENGTH_MM: &str = "coil.prompt.length_mm";
    pub const PROMPT_FIN_DENSITY_FPI: &str = "coil.prompt.fin_density_fpi";
    pub const PROMPT_TUBE_ROWS: &str = "coil.prompt.tube_rows";
    pub const PROMPT_COIL_THICKNESS_MM: &str = "coil.prompt.thickness_mm";
    pub const PROMPT_AIR_FLOW_M3H: &str = "coil.prompt.air_flow_m3h";
    pub const PROMPT_AIR_TEMP_IN_C: &str = "coil.prompt.air_temp_in_c";
    pub const PROMPT_AIR_TEMP_OUT_C: &str = "coil.prompt.air_temp_out_c";

    pub const RESULT_HEADING: &str = "coil.result.heading";
    pub const RESULT_VELOCITY: &str = "coil.result.velocity";
    pub const RESULT_REYNOLDS: &str = "coil.result.reynolds";
    pub const RESULT_NUSSELT: &str = "coil.result.nusselt";
    pub const RESULT_OVERALL_U: &str = "coil.result.overall_u";
    pub const RESULT_HEAT_DUTY: &str = "coil.result.heat_duty";
    pub const RESULT_LMTD: &str = "coil.result.lmtd";
    pub const RESULT_REQUIRED_AREA: &str = "coil.result.required_area";
    pub const RESULT_FLOW_AREA: &str = "coil.result.flow_area";
    pub const RESULT_FIN_PITCH: &str = "coil.result.fin_pitch";

    pub const AIR_PROPS_HEADING: &str = "air_props.heading";
    pub const AIR_PROPS_NOTE: &str = "air_props.note";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const HELP_COIL: &str = "help.coil";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Condenser Coil Calculator ===",
        MAIN_MENU_COIL => "1) 코일 공기측 열전달 계산",
        MAIN_MENU_AIR_PROPS => "2) 공기 물성 상수 보기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        COIL_HEADING => "\n-- 코일 공기측 열전달 --",
        COIL_NOTE_INERT => "참고: 핀 밀도/열 수/코일 두께는 기록용이며 현재 계산식에는 쓰이지 않습니다.",
        COIL_GEOMETRY_SECTION => "[기하 입력]",
        COIL_AIR_SECTION => "[공기측 입력]",
        PROMPT_TUBE_OD_MM => "전열관 외경 [mm]",
        PROMPT_COIL_HEIGHT_MM => "코일 높이 [mm]",
        PROMPT_COIL_LENGTH_MM => "코일 길이 [mm]",
        PROMPT_FIN_DENSITY_FPI => "핀 밀도 [FPI]",
        PROMPT_TUBE_ROWS => "전열관 열 수",
        PROMPT_COIL_THICKNESS_MM => "코일 두께 [mm]",
        PROMPT_AIR_FLOW_M3H => "공기 풍량 [m³/h]",
        PROMPT_AIR_TEMP_IN_C => "공기 입구 온도 [°C]",
        PROMPT_AIR_TEMP_OUT_C => "공기 출구 온도 [°C]",
        RESULT_HEADING => "\n[결과]",
        RESULT_VELOCITY => "공기 풍속:",
        RESULT_REYNOLDS => "레이놀즈수:",
        RESULT_NUSSELT => "Nusselt 수:",
        RESULT_OVERALL_U => "종합전열계수 U:",
        RESULT_HEAT_DUTY => "열량 Q:",
        RESULT_LMTD => "로그 평균 온도차(LMTD):",
        RESULT_REQUIRED_AREA => "필요 전열면적:",
        RESULT_FLOW_AREA => "자유 유동 면적:",
        RESULT_FIN_PITCH => "핀 밀도 환산:",
        AIR_PROPS_HEADING => "\n-- 공기 물성 상수 --",
        AIR_PROPS_NOTE => "대기압·상온 부근 대표값입니다. 물성 모델 교체 시 이 값만 바꾸면 됩니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) auto  2) 한국어(ko)  3) English(en-us)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어 설정이 저장되었습니다. 다음 실행부터 적용됩니다:",
        HELP_COIL => "도움말: 값을 입력하지 않고 엔터를 치면 [ ] 안의 기본값을 사용합니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Condenser Coil Calculator ===",
        MAIN_MENU_COIL => "1) Coil air-side heat transfer",
        MAIN_MENU_AIR_PROPS => "2) Air property constants",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        COIL_HEADING => "\n-- Coil Air-Side Heat Transfer --",
        COIL_NOTE_INERT => {
            "Note: fin density, tube rows and coil thickness are recorded only; they do not enter the current formulas."
        }
        COIL_GEOMETRY_SECTION => "[Geometry Inputs]",
        COIL_AIR_SECTION => "[Air Side Inputs]",
        PROMPT_TUBE_OD_MM => "Tube outer diameter [mm]",
        PROMPT_COIL_HEIGHT_MM => "Coil height [mm]",
        PROMPT_COIL_LENGTH_MM => "Coil length [mm]",
        PROMPT_FIN_DENSITY_FPI => "Fin density [FPI]",
        PROMPT_TUBE_ROWS => "Number of tube rows",
        PROMPT_COIL_THICKNESS_MM => "Coil thickness [mm]",
        PROMPT_AIR_FLOW_M3H => "Air flow rate [m³/h]",
        PROMPT_AIR_TEMP_IN_C => "Air inlet temperature [°C]",
        PROMPT_AIR_TEMP_OUT_C => "Air outlet temperature [°C]",
        RESULT_HEADING => "\n[Results]",
        RESULT_VELOCITY => "Air velocity:",
        RESULT_REYNOLDS => "Reynolds number:",
        RESULT_NUSSELT => "Nusselt number:",
        RESULT_OVERALL_U => "Overall coefficient U:",
        RESULT_HEAT_DUTY => "Heat duty Q:",
        RESULT_LMTD => "Log-mean temperature difference:",
        RESULT_REQUIRED_AREA => "Required surface area:",
        RESULT_FLOW_AREA => "Free-flow area:",
        RESULT_FIN_PITCH => "Fin density (converted):",
        AIR_PROPS_HEADING => "\n-- Air Property Constants --",
        AIR_PROPS_NOTE => {
            "Representative values near atmospheric pressure and room temperature. Swap this set to use a better property model."
        }
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) auto  2) Korean (ko)  3) English (en-us)",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language saved. Takes effect on next start:",
        HELP_COIL => "Help: press enter without a value to keep the default shown in [ ].",
        _ => return None,
    })
}
