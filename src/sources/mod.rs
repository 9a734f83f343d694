//! Per-source readers. Each known export format maps its own column names onto
//! [`DeviceRecord`]; readers share nothing and run in [`SourceKind::ALL`] order.

pub mod laptop_catalog;
pub mod laptop_prices;
pub mod smartphones;
pub mod tablets;

use crate::domain::model::{Category, DeviceRecord};
use crate::utils::error::Result;
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    LaptopCatalog,
    LaptopPrices,
    Smartphones,
    Tablets,
}

impl SourceKind {
    /// Fixed concatenation order of the merged table.
    pub const ALL: [SourceKind; 4] = [
        SourceKind::LaptopCatalog,
        SourceKind::LaptopPrices,
        SourceKind::Smartphones,
        SourceKind::Tablets,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::LaptopCatalog => "laptop_catalog",
            SourceKind::LaptopPrices => "laptop_prices",
            SourceKind::Smartphones => "smartphones",
            SourceKind::Tablets => "tablets",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            SourceKind::LaptopCatalog | SourceKind::LaptopPrices => Category::Laptop,
            SourceKind::Smartphones => Category::Phone,
            SourceKind::Tablets => Category::Tablet,
        }
    }

    pub fn normalize(&self, row: &RawRow<'_>) -> DeviceRecord {
        match self {
            SourceKind::LaptopCatalog => laptop_catalog::normalize(row),
            SourceKind::LaptopPrices => laptop_prices::normalize(row),
            SourceKind::Smartphones => smartphones::normalize(row),
            SourceKind::Tablets => tablets::normalize(row),
        }
    }
}

/// File names of each source inside the datasets directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    pub laptop_catalog: String,
    pub laptop_prices: String,
    pub smartphones: String,
    pub tablets: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            laptop_catalog: "laptop.csv".to_string(),
            laptop_prices: "Laptops Price Dataset export 2025-12-06 13-15-48.csv".to_string(),
            smartphones: "Real World Smartphone's Dataset export 2025-12-06 13-23-56.csv"
                .to_string(),
            tablets: "tablets.csv".to_string(),
        }
    }
}

impl SourceFiles {
    pub fn file_for(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::LaptopCatalog => &self.laptop_catalog,
            SourceKind::LaptopPrices => &self.laptop_prices,
            SourceKind::Smartphones => &self.smartphones,
            SourceKind::Tablets => &self.tablets,
        }
    }
}

/// One input row, addressed by header name.
pub struct RawRow<'a> {
    columns: &'a HashMap<String, usize>,
    record: &'a StringRecord,
}

impl<'a> RawRow<'a> {
    /// Cell text for `column`; `None` when the header is unknown or the row is
    /// too short to reach it.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = *self.columns.get(column)?;
        self.record.get(index)
    }
}

/// Decodes bytes leniently: invalid UTF-8 and a leading byte-order mark are
/// dropped.
fn decode(data: &[u8]) -> String {
    let text = String::from_utf8_lossy(data);
    text.trim_start_matches('\u{feff}')
        .chars()
        .filter(|c| *c != char::REPLACEMENT_CHARACTER)
        .collect()
}

/// Parses one source file into records, in row order.
pub fn parse_source(kind: SourceKind, data: &[u8]) -> Result<Vec<DeviceRecord>> {
    let text = decode(data);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    // Later duplicates of a header shadow earlier ones.
    let columns: HashMap<String, usize> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row = RawRow {
            columns: &columns,
            record: &record,
        };
        records.push(kind.normalize(&row));
    }
    Ok(records)
}
