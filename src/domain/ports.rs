use crate::domain::model::{SourceBatch, TransformResult};
use crate::sources::SourceFiles;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// Returns `Ok(None)` when the file does not exist.
    fn read_file(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn datasets_dir(&self) -> &str;
    fn output_path(&self) -> &str;
    fn source_files(&self) -> &SourceFiles;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SourceBatch>>;
    async fn transform(&self, batches: Vec<SourceBatch>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}

