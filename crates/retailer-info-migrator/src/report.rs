//! 迁移结果报告
//!
//! 成功时输出固定格式的统计信息；失败时只输出错误横幅，不报告部分进度。

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// 控制台横幅前缀
pub const BANNER: &str = "------------------------> ";

/// 失败时的输出内容
pub fn failure_banner(error: &dyn fmt::Display) -> String {
    format!("{BANNER}{error}")
}

/// 单次迁移的统计结果
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    scanned_rows: usize,
    updated_rows: usize,
    /// 有序且去重
    updated_ids: BTreeSet<i64>,
    dry_run: bool,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl MigrationReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            scanned_rows: 0,
            updated_rows: 0,
            updated_ids: BTreeSet::new(),
            dry_run,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn record_scanned(&mut self) {
        self.scanned_rows += 1;
    }

    pub fn record_updated(&mut self, dbio_rowid: i64) {
        self.updated_rows += 1;
        self.updated_ids.insert(dbio_rowid);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn scanned_rows(&self) -> usize {
        self.scanned_rows
    }

    pub fn updated_rows(&self) -> usize {
        self.updated_rows
    }

    pub fn updated_ids(&self) -> &BTreeSet<i64> {
        &self.updated_ids
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// 已完成时返回耗时（毫秒）
    pub fn elapsed_ms(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds())
    }

    /// 更新过的 id 列表，例如 `List starts: 1 - 2 - List ends`
    pub fn id_list(&self) -> String {
        let joined = self
            .updated_ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" - ");
        format!("List starts: {joined} - List ends")
    }

    /// 成功路径的控制台输出
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(5);
        if self.dry_run {
            lines.push(format!("{BANNER}Dry run: no rows were written"));
        }
        lines.push(format!("{BANNER}No errors"));
        lines.push(format!("{BANNER}Number of updated rows= {}", self.updated_rows));
        lines.push("A list of retailers IDs whom updated retailer_info_json column: ".to_string());
        lines.push(self.id_list());
        lines
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary_lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_format() {
        let mut report = MigrationReport::new(false);
        report.record_scanned();
        report.record_updated(133);
        report.record_scanned();
        report.record_updated(7);

        assert_eq!(
            report.to_string(),
            "------------------------> No errors\n\
             ------------------------> Number of updated rows= 2\n\
             A list of retailers IDs whom updated retailer_info_json column: \n\
             List starts: 7 - 133 - List ends"
        );
    }

    #[test]
    fn test_empty_id_list() {
        let report = MigrationReport::new(false);
        assert_eq!(report.id_list(), "List starts:  - List ends");
        assert_eq!(report.updated_rows(), 0);
    }

    #[test]
    fn test_ids_are_sorted_and_deduplicated() {
        let mut report = MigrationReport::new(false);
        for id in [4653, 12, 4653, 99] {
            report.record_updated(id);
        }
        assert_eq!(report.id_list(), "List starts: 12 - 99 - 4653 - List ends");
        assert_eq!(report.updated_ids().len(), 3);
    }

    #[test]
    fn test_dry_run_banner() {
        let report = MigrationReport::new(true);
        let lines = report.summary_lines();
        assert_eq!(lines[0], "------------------------> Dry run: no rows were written");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_failure_banner() {
        assert_eq!(
            failure_banner(&"connection refused"),
            "------------------------> connection refused"
        );
    }

    #[test]
    fn test_elapsed_only_after_finish() {
        let mut report = MigrationReport::new(false);
        assert!(report.elapsed_ms().is_none());
        report.finish();
        assert!(report.elapsed_ms().unwrap() >= 0);
    }
}
