//! 行处理与迁移编排
//!
//! 每一行只有两种结果：合并后文本与原文本相同则跳过，否则立即写回并记录 id。
//! 行按 dbio_rowid 顺序逐一处理，写入完成后才处理下一行；
//! 任何错误都会中止剩余的迁移，已写入的行不会回滚。

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::document;
use crate::error::{MigrationError, Result};
use crate::models::{INFO_COLUMN, RetailerInfoRow, SETTINGS_COLUMN};
use crate::repository::RetailerInfoRepositoryTrait;
use crate::report::MigrationReport;

/// 单次运行的参数
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    /// 只计算不写入
    pub dry_run: bool,
    /// 分页扫描的页大小
    pub batch_size: i64,
    /// 只处理 dbio_rowid 大于该值的行
    pub start_after: Option<i64>,
    /// 非空时只处理这些行
    pub only_ids: Vec<i64>,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            batch_size: 500,
            start_after: None,
            only_ids: Vec::new(),
        }
    }
}

/// 单行处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Unchanged,
    Changed { payload: String },
}

pub struct RetailerInfoMigrator<R: RetailerInfoRepositoryTrait> {
    repo: Arc<R>,
}

impl<R: RetailerInfoRepositoryTrait> RetailerInfoMigrator<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 计算一行的合并结果，不访问数据库
    pub fn process_row(&self, row: &RetailerInfoRow) -> Result<RowOutcome> {
        let fields = document::extract_recognized_fields(
            row.retailer_info_settings_json.as_deref(),
        )
        .map_err(|source| MigrationError::Parse {
            row_id: row.dbio_rowid,
            column: SETTINGS_COLUMN,
            source,
        })?;

        let destination = document::load_document(row.retailer_info_json.as_deref()).map_err(
            |source| MigrationError::Parse {
                row_id: row.dbio_rowid,
                column: INFO_COLUMN,
                source,
            },
        )?;

        let merged = document::render(document::merge_fields(fields, destination));

        // NULL 目标列与任何序列化结果都不相等
        if row.retailer_info_json.as_deref() == Some(merged.as_str()) {
            Ok(RowOutcome::Unchanged)
        } else {
            Ok(RowOutcome::Changed { payload: merged })
        }
    }

    /// 处理一行并在需要时写回
    async fn apply_row(
        &self,
        row: &RetailerInfoRow,
        options: &MigrationOptions,
        report: &mut MigrationReport,
    ) -> Result<()> {
        report.record_scanned();

        match self.process_row(row)? {
            RowOutcome::Unchanged => {
                debug!(dbio_rowid = row.dbio_rowid, "Row unchanged, skipping");
            }
            RowOutcome::Changed { payload } => {
                if !options.dry_run {
                    self.repo.update_info_json(row.dbio_rowid, &payload).await?;
                }
                report.record_updated(row.dbio_rowid);
                info!(
                    dbio_rowid = row.dbio_rowid,
                    uri_moniker = row.uri_moniker.as_deref().unwrap_or_default(),
                    dry_run = options.dry_run,
                    "Updated retailer_info_json"
                );
            }
        }

        Ok(())
    }

    async fn scan(&self, options: &MigrationOptions, report: &mut MigrationReport) -> Result<()> {
        if !options.only_ids.is_empty() {
            let rows = self.repo.fetch_by_ids(&options.only_ids).await?;
            if rows.len() < options.only_ids.len() {
                warn!(
                    requested = options.only_ids.len(),
                    found = rows.len(),
                    "Some requested rows do not exist"
                );
            }
            for row in &rows {
                self.apply_row(row, options, report).await?;
            }
            return Ok(());
        }

        let batch_size = options.batch_size.max(1);
        let mut after_id = options.start_after;

        loop {
            let page = self.repo.fetch_page(after_id, batch_size).await?;
            let Some(last) = page.last() else {
                break;
            };
            let last_id = last.dbio_rowid;

            for row in &page {
                self.apply_row(row, options, report).await?;
            }

            debug!(
                last_dbio_rowid = last_id,
                scanned = report.scanned_rows(),
                "Page processed"
            );

            if (page.len() as i64) < batch_size {
                break;
            }
            after_id = Some(last_id);
        }

        Ok(())
    }

    /// 执行迁移
    #[instrument(skip(self))]
    pub async fn run(&self, options: &MigrationOptions) -> Result<MigrationReport> {
        let mut report = MigrationReport::new(options.dry_run);
        info!("Starting retailer_info migration");

        if let Err(e) = self.scan(options, &mut report).await {
            let written = if options.dry_run { 0 } else { report.updated_rows() };
            warn!(
                error_code = e.error_code(),
                scanned = report.scanned_rows(),
                written,
                "Migration aborted, rows written before the failure are kept"
            );
            return Err(e);
        }

        report.finish();
        info!(
            scanned = report.scanned_rows(),
            updated = report.updated_rows(),
            elapsed_ms = report.elapsed_ms().unwrap_or_default(),
            "Migration finished"
        );

        Ok(report)
    }
}
