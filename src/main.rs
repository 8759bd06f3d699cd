use calc_service::utils::{logger, validation::Validate};
use calc_service::CliConfig;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 解析配置：預設值 < 設定檔 < 命令列參數
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    logger::init_logger(config.logging.verbose, config.logging.format);

    tracing::info!(
        "Starting {} v{}",
        config.service.name,
        config.service.version
    );
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    calc_service::serve(&config).await?;

    Ok(())
}
