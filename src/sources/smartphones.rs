//! Smartphone export.

use super::RawRow;
use crate::domain::model::{Category, DeviceRecord};
use crate::normalize::{
    clean_os, clean_text, guess_cpu_brand, normalize_brand, parse_bool, parse_fast_charging_w,
    parse_float, parse_int, parse_memory_gb, parse_screen_size_in,
};

pub fn normalize(row: &RawRow<'_>) -> DeviceRecord {
    let cpu_model = row.get("processor_brand").and_then(clean_text);
    let is_5g = row.get("5G_or_not").and_then(parse_bool) == Some(true);

    DeviceRecord {
        brand: row.get("brand_name").and_then(normalize_brand),
        model: row.get("model").and_then(clean_text),
        price: row.get("price").and_then(parse_float),
        cpu_brand: cpu_model.as_deref().and_then(guess_cpu_brand),
        cpu_model,
        cpu_cores: row.get("num_cores").and_then(parse_int),
        cpu_clock_ghz: row.get("processor_speed").and_then(parse_float),
        ram_gb: row.get("ram_capacity").and_then(parse_memory_gb),
        storage_gb: row.get("internal_memory").and_then(parse_memory_gb),
        battery_mah: row.get("battery_capacity").and_then(parse_int),
        fast_charging: row.get("fast_charging_available").and_then(parse_bool),
        fast_charging_w: row.get("fast_charging").and_then(parse_fast_charging_w),
        screen_size_in: row.get("screen_size").and_then(parse_screen_size_in),
        refresh_rate_hz: row.get("refresh_rate").and_then(parse_int),
        resolution_height: row.get("resolution_height").and_then(parse_int),
        resolution_width: row.get("resolution_width").and_then(parse_int),
        os: row.get("os").and_then(clean_os),
        touchscreen: Some(true),
        network_tech: Some(if is_5g { "5G" } else { "4G/3G" }.to_string()),
        ..DeviceRecord::new(Category::Phone)
    }
}
