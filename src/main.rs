use clap::Parser;
use device_etl::utils::{logger, validation::Validate};
use device_etl::{CliConfig, DevicePipeline, EtlEngine, EtlError, LocalStorage};

fn fail(e: &EtlError) -> ! {
    tracing::error!(
        "Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }
    tracing::debug!("Resolved config: {:?}", config);

    let monitor_enabled = config.monitor;
    let storage = LocalStorage::new(".");
    let pipeline = DevicePipeline::new(storage, config);
    let mut engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(summary) => {
            for (source, count) in &summary.per_source {
                tracing::debug!("{}: {} rows", source, count);
            }
            println!(
                "Wrote {} rows to {}",
                summary.rows_written, summary.output_path
            );
        }
        Err(e) => fail(&e),
    }
}
