//! 命令行参数定义
//!
//! 所有参数都是可选的，不带参数运行即对整张表执行一次完整迁移。

use clap::Parser;

use crate::migrator::MigrationOptions;
use retailer_shared::config::MigrationConfig;

/// retailer_info 字段迁移工具
///
/// 将 retailer_info_settings_json 中的 products、locale、retailer_type、carriers
/// 复制到 retailer_info_json，保留目标文档中的其他字段。
#[derive(Parser, Debug)]
#[command(name = "retailer-info-migrator")]
#[command(version, about = "复制 retailer_info 设置字段到信息文档")]
pub struct Cli {
    /// 只计算并报告，不写入数据库
    #[arg(long)]
    pub dry_run: bool,

    /// 只处理指定的 dbio_rowid（可重复）
    #[arg(long = "id", value_name = "ID")]
    pub ids: Vec<i64>,

    /// 从该 dbio_rowid 之后继续（用于中断后续跑）
    #[arg(long, value_name = "ID", conflicts_with = "ids")]
    pub start_after: Option<i64>,

    /// 分页扫描的页大小（默认取配置文件）
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
    pub batch_size: Option<i64>,

    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// 合并配置文件与命令行参数，命令行优先
    pub fn migration_options(&self, config: &MigrationConfig) -> MigrationOptions {
        let mut only_ids = self.ids.clone();
        only_ids.sort_unstable();
        only_ids.dedup();

        MigrationOptions {
            dry_run: self.dry_run || config.dry_run,
            batch_size: self.batch_size.unwrap_or(config.batch_size),
            start_after: self.start_after,
            only_ids,
        }
    }
}
