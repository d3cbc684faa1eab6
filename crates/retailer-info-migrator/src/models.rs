//! retailer_info 表的行模型

use serde::Serialize;

/// 设置文档所在列（源）
pub const SETTINGS_COLUMN: &str = "retailer_info_settings_json";
/// 信息文档所在列（目标）
pub const INFO_COLUMN: &str = "retailer_info_json";

/// retailer_info 中的一行
///
/// 两个 JSON 列以文本形式读取，写回判断按原始文本逐字节比较
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct RetailerInfoRow {
    pub dbio_rowid: i64,
    /// 仅用于日志展示
    pub uri_moniker: Option<String>,
    pub retailer_info_settings_json: Option<String>,
    pub retailer_info_json: Option<String>,
}

impl RetailerInfoRow {
    pub fn new(
        dbio_rowid: i64,
        settings_json: Option<&str>,
        info_json: Option<&str>,
    ) -> Self {
        Self {
            dbio_rowid,
            uri_moniker: None,
            retailer_info_settings_json: settings_json.map(str::to_string),
            retailer_info_json: info_json.map(str::to_string),
        }
    }

    pub fn with_moniker(mut self, moniker: impl Into<String>) -> Self {
        self.uri_moniker = Some(moniker.into());
        self
    }
}
