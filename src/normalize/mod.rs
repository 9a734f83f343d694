//! Pure field normalizers: raw CSV text in, typed and possibly absent values out.
//!
//! Every parser takes the raw cell text and returns `None` when nothing usable
//! is found. Callers chain them over optional cells with `and_then`.

pub mod categorical;
pub mod numeric;
pub mod text;

pub use categorical::{
    clean_os, derive_storage_type, guess_cpu_brand, parse_bool, parse_cpu_cores_text,
    parse_resolution, parse_sim_slots, parse_touch,
};
pub use numeric::{
    parse_battery_mah, parse_cpu_clock, parse_fast_charging_w, parse_float, parse_int,
    parse_memory_gb, parse_ram_and_storage, parse_refresh_rate, parse_screen_size_in,
};
pub use text::{clean_text, extract_brand_from_name, normalize_brand, slug, trimmed};
