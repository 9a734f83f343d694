use super::numeric::parse_int;
use regex::Regex;
use std::sync::LazyLock;

static CORE_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*core").expect("valid regex"));
static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

const TOUCH_POSITIVE: &[&str] = &["yes", "y", "true", "touch"];
const TOUCH_NEGATIVE: &[&str] = &["no", "n", "false"];

const BOOL_TRUE: &[&str] = &["1", "true", "yes", "y", "on"];
const BOOL_FALSE: &[&str] = &["0", "false", "no", "n", "off"];

const CORE_WORDS: &[(&str, i64)] = &[
    ("single", 1),
    ("dual", 2),
    ("triple", 3),
    ("quad", 4),
    ("penta", 5),
    ("hexa", 6),
    ("octa", 8),
    ("deca", 10),
];

// First match wins; noisy processor strings can mention several vendors.
const CPU_VENDORS: &[(&[&str], &str)] = &[
    (&["intel"], "Intel"),
    (&["amd", "ryzen"], "AMD"),
    (&["apple", "bionic", "m1", "m2"], "Apple"),
    (&["snapdragon", "qualcomm"], "Qualcomm"),
    (&["helio", "mediatek"], "MediaTek"),
    (&["exynos"], "Samsung"),
];

const OS_NAMES: &[(&[&str], &str)] = &[
    (&["windows"], "Windows"),
    (&["android"], "Android"),
    (&["ios", "ipados"], "iOS"),
    (&["mac"], "macOS"),
    (&["chrome"], "ChromeOS"),
];

fn lookup(haystack: &str, table: &[(&[&str], &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(_, name)| *name)
}

/// An explicit hint wins; otherwise the type follows from which capacities are
/// present. A zero capacity counts as absent.
pub fn derive_storage_type(
    ssd_gb: Option<f64>,
    hdd_gb: Option<f64>,
    hinted: Option<&str>,
) -> Option<String> {
    if let Some(hint) = hinted.map(str::trim).filter(|h| !h.is_empty()) {
        return Some(hint.to_string());
    }
    let has_ssd = ssd_gb.is_some_and(|gb| gb != 0.0);
    let has_hdd = hdd_gb.is_some_and(|gb| gb != 0.0);
    match (has_ssd, has_hdd) {
        (true, true) => Some("SSD+HDD".to_string()),
        (true, false) => Some("SSD".to_string()),
        (false, true) => Some("HDD".to_string()),
        (false, false) => None,
    }
}

/// First two integers in the text, as `(width, height)`.
pub fn parse_resolution(value: &str) -> (Option<i64>, Option<i64>) {
    let mut numbers = INTEGER.find_iter(value).map(|m| m.as_str().parse::<i64>());
    match (numbers.next(), numbers.next()) {
        (Some(Ok(width)), Some(Ok(height))) => (Some(width), Some(height)),
        _ => (None, None),
    }
}

/// Loose keyword match for touchscreen columns.
pub fn parse_touch(value: &str) -> Option<bool> {
    let s = value.to_lowercase();
    if TOUCH_POSITIVE.iter().any(|token| s.contains(token)) {
        Some(true)
    } else if TOUCH_NEGATIVE.iter().any(|token| s.contains(token)) {
        Some(false)
    } else {
        None
    }
}

pub fn parse_bool(value: &str) -> Option<bool> {
    let s = value.trim().to_lowercase();
    if BOOL_TRUE.contains(&s.as_str()) {
        Some(true)
    } else if BOOL_FALSE.contains(&s.as_str()) {
        Some(false)
    } else {
        None
    }
}

pub fn parse_sim_slots(value: &str) -> Option<i64> {
    let s = value.to_lowercase();
    if s.contains("dual") {
        Some(2)
    } else if s.contains("single") {
        Some(1)
    } else if s.contains("wi-fi") || s.contains("wifi") {
        Some(0)
    } else {
        None
    }
}

/// Core count from text like `Octa Core` or `6 Core`, else any number present.
pub fn parse_cpu_cores_text(value: &str) -> Option<i64> {
    let s = value.to_lowercase();
    if let Some((_, count)) = CORE_WORDS.iter().find(|(word, _)| s.contains(word)) {
        return Some(*count);
    }
    if let Some(caps) = CORE_COUNT.captures(&s) {
        return caps[1].parse::<i64>().ok();
    }
    parse_int(value)
}

pub fn guess_cpu_brand(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    lookup(&text.to_lowercase(), CPU_VENDORS).map(str::to_string)
}

/// Canonical OS family name, or the original text when unrecognized.
pub fn clean_os(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let name = lookup(&value.to_lowercase(), OS_NAMES).unwrap_or(value);
    Some(name.to_string())
}
