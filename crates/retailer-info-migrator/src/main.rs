//! retailer_info 字段迁移工具入口
//!
//! 一次性运行：加载配置、建立数据库连接、顺序处理所有行并输出报告。

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use retailer_shared::{config::AppConfig, database::Database, observability};
use tracing::{error, info};

use retailer_info_migrator::{
    cli::Cli,
    repository::RetailerInfoRepository,
    report::failure_banner,
    MigrationError, MigrationOptions, MigrationReport, RetailerInfoMigrator,
};

const SERVICE_NAME: &str = "retailer-info-migrator";

#[tokio::main]
async fn main() -> Result<()> {
    // 本地 .env 可提供数据库凭据
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 1. 加载配置
    let config = AppConfig::load(SERVICE_NAME).context("Failed to load configuration")?;

    // 2. 初始化日志（命令行级别优先）
    let obs_config = config
        .observability
        .clone()
        .with_log_level(cli.log_level.as_deref());
    observability::init_logging(&obs_config)?;

    info!(
        environment = %config.environment,
        "Starting {}...", SERVICE_NAME
    );

    let options = cli.migration_options(&config.migration);

    // 3. 执行迁移：存储错误打印横幅后正常退出，其余错误向上传播
    match migrate(&config, &options).await {
        Ok(report) => {
            println!("{report}");
        }
        Err(e) if e.is_storage_error() => {
            error!(error_code = e.error_code(), "Migration failed: {}", e);
            println!("{}", failure_banner(&e));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// 建立连接并运行迁移
///
/// 连接池在这里创建一次，作为句柄注入仓储
async fn migrate(
    config: &AppConfig,
    options: &MigrationOptions,
) -> Result<MigrationReport, MigrationError> {
    let db = Database::connect(&config.database).await?;
    db.health_check().await?;
    info!("Database connection established");

    let repo = Arc::new(RetailerInfoRepository::new(db.pool().clone()));
    let migrator = RetailerInfoMigrator::new(repo);

    let result = migrator.run(options).await;
    db.close().await;
    result
}
