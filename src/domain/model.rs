use serde::Serialize;

/// Output header, in column order.
pub const DEVICE_FIELDS: [&str; 29] = [
    "id",
    "category",
    "brand",
    "model",
    "status",
    "price",
    "currency",
    "release_year",
    "cpu_brand",
    "cpu_model",
    "cpu_cores",
    "cpu_threads",
    "cpu_clock_ghz",
    "gpu_name",
    "ram_gb",
    "storage_gb",
    "storage_type",
    "screen_size_in",
    "resolution_width",
    "resolution_height",
    "refresh_rate_hz",
    "os",
    "touchscreen",
    "battery_mah",
    "fast_charging_w",
    "fast_charging",
    "sim_slots",
    "network_tech",
    "spec_score",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Laptop,
    Phone,
    Tablet,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Laptop => "laptop",
            Category::Phone => "phone",
            Category::Tablet => "tablet",
        }
    }
}

/// One normalized row of the devices table.
///
/// Field order matches [`DEVICE_FIELDS`]; absent values serialize as empty cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRecord {
    pub id: Option<u64>,
    pub category: Category,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub status: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub release_year: Option<i64>,
    pub cpu_brand: Option<String>,
    pub cpu_model: Option<String>,
    pub cpu_cores: Option<i64>,
    pub cpu_threads: Option<i64>,
    pub cpu_clock_ghz: Option<f64>,
    pub gpu_name: Option<String>,
    pub ram_gb: Option<f64>,
    pub storage_gb: Option<f64>,
    pub storage_type: Option<String>,
    pub screen_size_in: Option<f64>,
    pub resolution_width: Option<i64>,
    pub resolution_height: Option<i64>,
    pub refresh_rate_hz: Option<i64>,
    pub os: Option<String>,
    pub touchscreen: Option<bool>,
    pub battery_mah: Option<i64>,
    pub fast_charging_w: Option<i64>,
    pub fast_charging: Option<bool>,
    pub sim_slots: Option<i64>,
    pub network_tech: Option<String>,
    pub spec_score: Option<f64>,
}

impl DeviceRecord {
    /// An unnumbered record with every optional field absent.
    pub fn new(category: Category) -> Self {
        Self {
            id: None,
            category,
            brand: None,
            model: None,
            status: None,
            price: None,
            currency: None,
            release_year: None,
            cpu_brand: None,
            cpu_model: None,
            cpu_cores: None,
            cpu_threads: None,
            cpu_clock_ghz: None,
            gpu_name: None,
            ram_gb: None,
            storage_gb: None,
            storage_type: None,
            screen_size_in: None,
            resolution_width: None,
            resolution_height: None,
            refresh_rate_hz: None,
            os: None,
            touchscreen: None,
            battery_mah: None,
            fast_charging_w: None,
            fast_charging: None,
            sim_slots: None,
            network_tech: None,
            spec_score: None,
        }
    }

    pub fn with_id(self, id: u64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

/// Records extracted from one source file.
#[derive(Debug, Clone)]
pub struct SourceBatch {
    pub source: &'static str,
    pub records: Vec<DeviceRecord>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<DeviceRecord>,
    pub csv_output: String,
}
