//! Laptop price export. It carries an explicit storage type column but no
//! reliable operating system.

use super::RawRow;
use crate::domain::model::{Category, DeviceRecord};
use crate::normalize::{
    clean_text, derive_storage_type, guess_cpu_brand, normalize_brand, parse_float,
    parse_memory_gb, parse_screen_size_in, parse_touch, trimmed,
};

pub fn normalize(row: &RawRow<'_>) -> DeviceRecord {
    let cpu_model = row.get("CPU").and_then(clean_text);
    let model = row
        .get("Laptop")
        .filter(|name| !name.is_empty())
        .or_else(|| row.get("Model"))
        .and_then(clean_text);
    // No SSD/HDD split in this export, so only the hint can name a type.
    let storage_hint = row.get("Storage type").and_then(clean_text);

    DeviceRecord {
        status: row.get("Status").and_then(trimmed),
        brand: row.get("Brand").and_then(normalize_brand),
        model,
        cpu_brand: cpu_model.as_deref().and_then(guess_cpu_brand),
        cpu_model,
        ram_gb: row.get("RAM").and_then(parse_memory_gb),
        storage_gb: row.get("Storage").and_then(parse_memory_gb),
        storage_type: derive_storage_type(None, None, storage_hint.as_deref()),
        gpu_name: row.get("GPU").and_then(clean_text),
        screen_size_in: row.get("Screen").and_then(parse_screen_size_in),
        touchscreen: row.get("Touch").and_then(parse_touch),
        price: row.get("Final Price").and_then(parse_float),
        os: None,
        ..DeviceRecord::new(Category::Laptop)
    }
}
