//! `laptop.csv`: the laptop catalog with separate SSD and HDD columns.

use super::RawRow;
use crate::domain::model::{Category, DeviceRecord};
use crate::normalize::{
    clean_os, clean_text, derive_storage_type, guess_cpu_brand, normalize_brand, parse_float,
    parse_int, parse_memory_gb, parse_resolution, parse_screen_size_in,
};

pub fn normalize(row: &RawRow<'_>) -> DeviceRecord {
    let cpu_model = row.get("processor_name").and_then(clean_text);
    let ssd_gb = row.get("ssd(GB)").and_then(parse_memory_gb);
    let hdd_gb = row.get("Hard Disk(GB)").and_then(parse_memory_gb);
    let storage_total = ssd_gb.unwrap_or(0.0) + hdd_gb.unwrap_or(0.0);
    let (resolution_width, resolution_height) = row
        .get("resolution (pixels)")
        .map(parse_resolution)
        .unwrap_or((None, None));

    DeviceRecord {
        brand: row.get("brand").and_then(normalize_brand),
        model: row.get("model_name").and_then(clean_text),
        cpu_brand: cpu_model.as_deref().and_then(guess_cpu_brand),
        cpu_model,
        cpu_cores: row.get("no_of_cores").and_then(parse_int),
        cpu_threads: row.get("no_of_threads").and_then(parse_int),
        gpu_name: row.get("graphics").and_then(clean_text),
        ram_gb: row.get("ram(GB)").and_then(parse_memory_gb),
        storage_gb: (storage_total != 0.0).then_some(storage_total),
        storage_type: derive_storage_type(ssd_gb, hdd_gb, None),
        screen_size_in: row.get("screen_size(inches)").and_then(parse_screen_size_in),
        resolution_width,
        resolution_height,
        os: row.get("Operating System").and_then(clean_os),
        price: row.get("price").and_then(parse_float),
        spec_score: row.get("spec_score").and_then(parse_float),
        ..DeviceRecord::new(Category::Laptop)
    }
}
