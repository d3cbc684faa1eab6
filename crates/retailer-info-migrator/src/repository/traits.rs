//! 仓储 Trait 定义
//!
//! 迁移流程依赖抽象而非具体实现，支持 mock 测试

use async_trait::async_trait;

use crate::error::Result;
use crate::models::RetailerInfoRow;

/// retailer_info 仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RetailerInfoRepositoryTrait: Send + Sync {
    /// 按 dbio_rowid 升序读取 `after_id` 之后的最多 `limit` 行
    async fn fetch_page(&self, after_id: Option<i64>, limit: i64) -> Result<Vec<RetailerInfoRow>>;

    /// 读取指定 id 的行，按 dbio_rowid 升序
    async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<RetailerInfoRow>>;

    /// 写回目标 JSON 列，参数以 JSON 类型交给数据库
    async fn update_info_json(&self, dbio_rowid: i64, payload: &str) -> Result<()>;
}
