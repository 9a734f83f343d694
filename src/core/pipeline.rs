use crate::core::{ConfigProvider, DeviceRecord, Pipeline, SourceBatch, Storage, TransformResult};
use crate::domain::model::DEVICE_FIELDS;
use crate::sources::{parse_source, SourceKind};
use crate::utils::error::{EtlError, Result};
use csv::{Terminator, WriterBuilder};
use std::path::Path;

/// Reads every known device export, numbers the merged rows and writes the
/// unified devices table.
pub struct DevicePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DevicePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn source_path(&self, kind: SourceKind) -> String {
        let file = self.config.source_files().file_for(kind);
        Path::new(self.config.datasets_dir())
            .join(file)
            .to_string_lossy()
            .into_owned()
    }
}

/// Renders the header and all records as CSV text.
pub fn render_csv(records: &[DeviceRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(DEVICE_FIELDS)?;
    for record in records {
        writer.serialize(record)?;
    }

    let bytes = writer.into_inner().map_err(|e| EtlError::ProcessingError {
        message: format!("Failed to flush CSV writer: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("Rendered CSV is not valid UTF-8: {}", e),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DevicePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SourceBatch>> {
        let mut batches = Vec::with_capacity(SourceKind::ALL.len());

        for kind in SourceKind::ALL {
            let path = self.source_path(kind);
            let records = match self.storage.read_file(&path).await? {
                Some(data) => parse_source(kind, &data)?,
                None => {
                    tracing::debug!("Source {} not found at {}, skipping", kind.name(), path);
                    Vec::new()
                }
            };
            tracing::info!(
                "Read {} {} records from {}",
                records.len(),
                kind.category().as_str(),
                kind.name()
            );

            batches.push(SourceBatch {
                source: kind.name(),
                records,
            });
        }

        Ok(batches)
    }

    async fn transform(&self, batches: Vec<SourceBatch>) -> Result<TransformResult> {
        let records: Vec<_> = batches
            .into_iter()
            .flat_map(|batch| batch.records)
            .zip(1u64..)
            .map(|(record, id)| record.with_id(id))
            .collect();

        let csv_output = render_csv(&records)?;
        tracing::debug!("Rendered {} bytes of CSV", csv_output.len());

        Ok(TransformResult {
            records,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        tracing::debug!("Writing {} rows to {}", result.records.len(), output_path);
        self.storage
            .write_file(&output_path, result.csv_output.as_bytes())
            .await?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;
    use crate::sources::SourceFiles;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    const HEADER: &str = "id,category,brand,model,status,price,currency,release_year,cpu_brand,cpu_model,cpu_cores,cpu_threads,cpu_clock_ghz,gpu_name,ram_gb,storage_gb,storage_type,screen_size_in,resolution_width,resolution_height,refresh_rate_hz,os,touchscreen,battery_mah,fast_charging_w,fast_charging,sim_slots,network_tech,spec_score";

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put(&self, path: &str, data: &str) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.as_bytes().to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
            let files = self.files.lock().await;
            Ok(files.get(path).cloned())
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        source_files: SourceFiles,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                source_files: SourceFiles::default(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn datasets_dir(&self) -> &str {
            "data"
        }

        fn output_path(&self) -> &str {
            "out/devices.csv"
        }

        fn source_files(&self) -> &SourceFiles {
            &self.source_files
        }
    }

    #[tokio::test]
    async fn test_extract_missing_sources_yield_empty_batches() {
        let pipeline = DevicePipeline::new(MockStorage::new(), MockConfig::new());

        let batches = pipeline.extract().await.unwrap();

        assert_eq!(batches.len(), 4);
        assert!(batches.iter().all(|b| b.records.is_empty()));
        assert_eq!(
            batches.iter().map(|b| b.source).collect::<Vec<_>>(),
            vec!["laptop_catalog", "laptop_prices", "smartphones", "tablets"]
        );
    }

    #[tokio::test]
    async fn test_extract_reads_from_datasets_dir() {
        let storage = MockStorage::new();
        storage
            .put("data/tablets.csv", "name,price\nApple iPad,34900\n")
            .await;
        storage
            .put("data/laptop.csv", "brand,model_name\ndell,Inspiron 15\nhp,Pavilion\n")
            .await;
        let pipeline = DevicePipeline::new(storage, MockConfig::new());

        let batches = pipeline.extract().await.unwrap();

        assert_eq!(batches[0].records.len(), 2);
        assert_eq!(batches[1].records.len(), 0);
        assert_eq!(batches[2].records.len(), 0);
        assert_eq!(batches[3].records.len(), 1);
        assert_eq!(batches[3].records[0].brand.as_deref(), Some("Apple"));
    }

    #[tokio::test]
    async fn test_transform_assigns_contiguous_ids_in_source_order() {
        let batches = vec![
            SourceBatch {
                source: "laptop_catalog",
                records: vec![
                    DeviceRecord::new(Category::Laptop),
                    DeviceRecord::new(Category::Laptop),
                ],
            },
            SourceBatch {
                source: "laptop_prices",
                records: vec![],
            },
            SourceBatch {
                source: "tablets",
                records: vec![DeviceRecord::new(Category::Tablet)],
            },
        ];
        let pipeline = DevicePipeline::new(MockStorage::new(), MockConfig::new());

        let result = pipeline.transform(batches).await.unwrap();

        let ids: Vec<_> = result.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(result.records[2].category, Category::Tablet);

        let lines: Vec<&str> = result.csv_output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HEADER);
        assert!(lines[3].starts_with("3,tablet,"));
    }

    #[tokio::test]
    async fn test_transform_empty_renders_header_only() {
        let pipeline = DevicePipeline::new(MockStorage::new(), MockConfig::new());

        let result = pipeline.transform(vec![]).await.unwrap();

        assert!(result.records.is_empty());
        assert_eq!(result.csv_output, format!("{}\n", HEADER));
    }

    #[test]
    fn test_render_csv_formats_values() {
        let record = DeviceRecord {
            brand: Some("Samsung".to_string()),
            model: Some("Galaxy Tab, S9".to_string()),
            price: Some(36999.0),
            ram_gb: Some(0.5),
            touchscreen: Some(true),
            fast_charging: Some(false),
            sim_slots: Some(0),
            ..DeviceRecord::new(Category::Tablet)
        }
        .with_id(1);

        let output = render_csv(&[record]).unwrap();
        let row = output.lines().nth(1).unwrap();

        assert_eq!(
            row,
            "1,tablet,Samsung,\"Galaxy Tab, S9\",,36999.0,,,,,,,,,0.5,,,,,,,,true,,,false,0,,"
        );
    }

    #[tokio::test]
    async fn test_load_writes_to_output_path() {
        let storage = MockStorage::new();
        let pipeline = DevicePipeline::new(storage.clone(), MockConfig::new());
        let result = TransformResult {
            records: vec![],
            csv_output: format!("{}\n", HEADER),
        };

        let output_path = pipeline.load(result).await.unwrap();

        assert_eq!(output_path, "out/devices.csv");
        let written = storage.get_file("out/devices.csv").await.unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), format!("{}\n", HEADER));
    }
}
