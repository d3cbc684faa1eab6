//! retailer_info 仓储
//!
//! JSON 列以 `::text` 读取，保留数据库中的原始文本；写回时以 `::json` 标注类型，
//! 由数据库完成 JSON 校验。

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use super::traits::RetailerInfoRepositoryTrait;
use crate::error::{MigrationError, Result};
use crate::models::RetailerInfoRow;

pub struct RetailerInfoRepository {
    pool: PgPool,
}

impl RetailerInfoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RetailerInfoRepositoryTrait for RetailerInfoRepository {
    #[instrument(skip(self))]
    async fn fetch_page(&self, after_id: Option<i64>, limit: i64) -> Result<Vec<RetailerInfoRow>> {
        let rows = sqlx::query_as::<_, RetailerInfoRow>(
            r#"
            SELECT dbio_rowid,
                   uri_moniker,
                   retailer_info_settings_json::text AS retailer_info_settings_json,
                   retailer_info_json::text AS retailer_info_json
            FROM retailer_info
            WHERE ($1::bigint IS NULL OR dbio_rowid > $1)
            ORDER BY dbio_rowid ASC
            LIMIT $2
            "#,
        )
        .bind(after_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        debug!(fetched = rows.len(), "Fetched retailer_info page");
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn fetch_by_ids(&self, ids: &[i64]) -> Result<Vec<RetailerInfoRow>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let rows = sqlx::query_as::<_, RetailerInfoRow>(
            r#"
            SELECT dbio_rowid,
                   uri_moniker,
                   retailer_info_settings_json::text AS retailer_info_settings_json,
                   retailer_info_json::text AS retailer_info_json
            FROM retailer_info
            WHERE dbio_rowid = ANY($1)
            ORDER BY dbio_rowid ASC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    #[instrument(skip(self, payload))]
    async fn update_info_json(&self, dbio_rowid: i64, payload: &str) -> Result<()> {
        let result = sqlx::query(
            "UPDATE retailer_info SET retailer_info_json = $1::json WHERE dbio_rowid = $2",
        )
        .bind(payload)
        .bind(dbio_rowid)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(MigrationError::RowNotFound(dbio_rowid));
        }

        Ok(())
    }
}
