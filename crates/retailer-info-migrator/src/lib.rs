//! retailer_info 字段迁移
//!
//! 将 `retailer_info_settings_json` 中的 products、locale、retailer_type、carriers
//! 四个字段复制到 `retailer_info_json`，覆盖同名键并保留其他键。
//!
//! 处理流程：读取行 -> 提取字段 -> 加载目标文档 -> 合并 -> 序列化 -> 有变化时写回 -> 输出报告。

pub mod cli;
pub mod document;
pub mod error;
pub mod migrator;
pub mod models;
pub mod repository;
pub mod report;

pub use error::{MigrationError, Result};
pub use migrator::{MigrationOptions, RetailerInfoMigrator, RowOutcome};
pub use report::MigrationReport;
