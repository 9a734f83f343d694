use regex::Regex;
use std::sync::LazyLock;

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9.]+").expect("valid regex"));
static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));
static GHZ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9.]+)\s*ghz").expect("valid regex"));
static WATTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*w").expect("valid regex"));

fn integers(value: &str) -> impl Iterator<Item = i64> + '_ {
    INTEGER
        .find_iter(value)
        .map_while(|m| m.as_str().parse::<i64>().ok())
}

/// Parses a float, falling back to the first numeric run in the text.
pub fn parse_float(value: &str) -> Option<f64> {
    let s = value.trim().replace(',', "");
    if s.is_empty() {
        return None;
    }
    if let Ok(number) = s.parse::<f64>() {
        return Some(number);
    }
    DECIMAL.find(&s)?.as_str().parse::<f64>().ok()
}

/// [`parse_float`] truncated toward zero.
pub fn parse_int(value: &str) -> Option<i64> {
    parse_float(value)
        .filter(|number| number.is_finite())
        .map(|number| number as i64)
}

/// Converts sizes like `8 GB`, `8192 MB` or `1 TB` to gigabytes, rounded to two
/// decimals with ties to even. Unlabeled numbers are taken as gigabytes.
pub fn parse_memory_gb(value: &str) -> Option<f64> {
    let s = value.trim().to_lowercase().replace(',', "");
    if s.is_empty() {
        return None;
    }
    let mut amount = DECIMAL.find(&s)?.as_str().parse::<f64>().ok()?;
    if s.contains("tb") {
        amount *= 1024.0;
    } else if s.contains("mb") {
        amount /= 1024.0;
    }
    Some((amount * 100.0).round_ties_even() / 100.0)
}

pub fn parse_screen_size_in(value: &str) -> Option<f64> {
    parse_float(value)
}

/// Clock speed in GHz. Only numbers followed by a `GHz` label count.
pub fn parse_cpu_clock(value: &str) -> Option<f64> {
    let lower = value.to_lowercase();
    let caps = GHZ.captures(&lower)?;
    caps[1].parse::<f64>().ok()
}

pub fn parse_battery_mah(value: &str) -> Option<i64> {
    integers(value).next()
}

/// Charging power from text like `33W Fast Charging`; without a `W` label the
/// value is read as a plain integer.
pub fn parse_fast_charging_w(value: &str) -> Option<i64> {
    let lower = value.to_lowercase();
    match WATTS.captures(&lower) {
        Some(caps) => caps[1].parse::<i64>().ok(),
        None => parse_int(value),
    }
}

pub fn parse_refresh_rate(value: &str) -> Option<i64> {
    integers(value).next()
}

/// Splits a combined memory field such as `8 GB RAM, 128 GB inbuilt` into
/// `(ram_gb, storage_gb)`: first number is RAM, second is storage.
pub fn parse_ram_and_storage(value: &str) -> (Option<f64>, Option<f64>) {
    let mut numbers = integers(value).map(|n| n as f64);
    let ram = numbers.next();
    let storage = numbers.next();
    (ram, storage)
}
