use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Outcome of one full run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub rows_written: usize,
    /// Record count per source, in merge order.
    pub per_source: Vec<(&'static str, usize)>,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&mut self) -> Result<RunSummary> {
        tracing::info!("Starting device normalization");

        let batches = self.pipeline.extract().await?;
        let per_source: Vec<_> = batches
            .iter()
            .map(|batch| (batch.source, batch.records.len()))
            .collect();
        tracing::info!(
            "Extracted {} records from {} sources",
            per_source.iter().map(|(_, n)| n).sum::<usize>(),
            per_source.iter().filter(|(_, n)| *n > 0).count()
        );
        self.monitor.log_stats("Extract");

        let result = self.pipeline.transform(batches).await?;
        let rows_written = result.records.len();
        tracing::info!("Numbered {} records", rows_written);
        self.monitor.log_stats("Transform");

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(RunSummary {
            output_path,
            rows_written,
            per_source,
        })
    }
}
