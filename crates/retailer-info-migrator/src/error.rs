//! 迁移工具错误类型
//!
//! 区分两类失败：JSON 解析错误直接中止并向上传播；
//! 存储错误同样中止迁移，但由入口统一打印错误横幅。

use retailer_shared::error::SharedError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("JSON 解析失败: dbio_rowid={row_id}, column={column}: {source}")]
    Parse {
        row_id: i64,
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("记录未找到: retailer_info dbio_rowid={0}")]
    RowNotFound(i64),

    #[error(transparent)]
    Shared(#[from] SharedError),
}

/// 迁移 Result 类型别名
pub type Result<T> = std::result::Result<T, MigrationError>;

impl MigrationError {
    /// 是否为存储层错误（查询或更新失败）
    pub fn is_storage_error(&self) -> bool {
        match self {
            Self::Database(_) | Self::RowNotFound(_) => true,
            Self::Shared(e) => e.is_storage_error(),
            Self::Parse { .. } => false,
        }
    }

    /// 获取错误码
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "JSON_PARSE_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::RowNotFound(_) => "ROW_NOT_FOUND",
            Self::Shared(e) => e.code(),
        }
    }
}
