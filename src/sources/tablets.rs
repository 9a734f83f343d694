//! Tablet export. Brand comes from the product name and RAM/storage share a
//! single text column.

use super::RawRow;
use crate::domain::model::{Category, DeviceRecord};
use crate::normalize::{
    clean_os, clean_text, extract_brand_from_name, guess_cpu_brand, parse_battery_mah,
    parse_cpu_clock, parse_cpu_cores_text, parse_fast_charging_w, parse_float,
    parse_ram_and_storage, parse_refresh_rate, parse_resolution, parse_screen_size_in,
    parse_sim_slots, trimmed,
};

pub fn normalize(row: &RawRow<'_>) -> DeviceRecord {
    let name = row.get("name").unwrap_or_default().trim();
    let processor = row.get("processor").unwrap_or_default().trim();
    let battery = row.get("battery");
    let fast_charging_w = battery.and_then(parse_fast_charging_w);
    // Known limitation: assumes "<ram> ... <storage>" with no unit checks.
    let (ram_gb, storage_gb) = row
        .get("ram")
        .map(parse_ram_and_storage)
        .unwrap_or((None, None));
    let screen = row.get("screen_size");
    let (resolution_width, resolution_height) =
        screen.map(parse_resolution).unwrap_or((None, None));

    DeviceRecord {
        brand: extract_brand_from_name(name),
        model: clean_text(name),
        price: row.get("price").and_then(parse_float),
        spec_score: row.get("specs").and_then(parse_float),
        sim_slots: row.get("sim").and_then(parse_sim_slots),
        battery_mah: battery.and_then(parse_battery_mah),
        fast_charging_w,
        fast_charging: Some(fast_charging_w.is_some()),
        ram_gb,
        storage_gb,
        network_tech: row.get("networks").and_then(trimmed),
        cpu_model: trimmed(processor),
        cpu_brand: guess_cpu_brand(processor),
        cpu_cores: parse_cpu_cores_text(processor),
        cpu_clock_ghz: parse_cpu_clock(processor),
        screen_size_in: screen.and_then(parse_screen_size_in),
        resolution_width,
        resolution_height,
        refresh_rate_hz: screen.and_then(parse_refresh_rate),
        os: row.get("os").and_then(clean_os),
        touchscreen: Some(true),
        ..DeviceRecord::new(Category::Tablet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::test_support::with_row;

    const HEADERS: &[&str] = &[
        "name",
        "price",
        "specs",
        "processor",
        "ram",
        "battery",
        "screen_size",
        "sim",
        "networks",
        "os",
    ];

    #[test]
    fn test_full_row() {
        let values = &[
            " Samsung Galaxy Tab S9 FE ",
            "₹36,999",
            "79",
            "Exynos 1380, Octa Core, 2.4 GHz Processor",
            "6 GB RAM, 128 GB inbuilt",
            "8000 mAh Battery with 45W Fast Charging",
            "10.9 inches",
            "Wi-Fi only",
            "Wi-Fi",
            "Android v13",
        ];

        let record = with_row(HEADERS, values, normalize);

        assert_eq!(record.category, Category::Tablet);
        assert_eq!(record.brand.as_deref(), Some("Samsung"));
        assert_eq!(record.model.as_deref(), Some("Samsung Galaxy Tab S9 FE"));
        assert_eq!(record.price, Some(36999.0));
        assert_eq!(record.spec_score, Some(79.0));
        assert_eq!(record.cpu_model.as_deref(), Some("Exynos 1380, Octa Core, 2.4 GHz Processor"));
        assert_eq!(record.cpu_brand.as_deref(), Some("Samsung"));
        assert_eq!(record.cpu_cores, Some(8));
        assert_eq!(record.cpu_clock_ghz, Some(2.4));
        assert_eq!(record.ram_gb, Some(6.0));
        assert_eq!(record.storage_gb, Some(128.0));
        assert_eq!(record.battery_mah, Some(8000));
        assert_eq!(record.fast_charging_w, Some(45));
        assert_eq!(record.fast_charging, Some(true));
        assert_eq!(record.screen_size_in, Some(10.9));
        assert_eq!(record.sim_slots, Some(0));
        assert_eq!(record.network_tech.as_deref(), Some("Wi-Fi"));
        assert_eq!(record.os.as_deref(), Some("Android"));
        assert_eq!(record.touchscreen, Some(true));
    }

    #[test]
    fn test_sparse_row() {
        let record = with_row(&["name", "processor"], &["Noname Pad", ""], normalize);

        assert_eq!(record.brand.as_deref(), Some("Noname"));
        assert_eq!(record.cpu_model, None);
        assert_eq!(record.cpu_brand, None);
        assert_eq!(record.cpu_cores, None);
        assert_eq!(record.fast_charging_w, None);
        assert_eq!(record.fast_charging, Some(false));
        assert_eq!(record.ram_gb, None);
        assert_eq!(record.network_tech, None);
        assert_eq!(record.touchscreen, Some(true));
    }
}
