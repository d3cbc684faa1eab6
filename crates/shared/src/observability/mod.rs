//! 可观测性模块
//!
//! 命令行工具只需要结构化日志：统一在入口处初始化 tracing subscriber，
//! 日志输出到 stderr，stdout 留给工具自身的报告输出。

pub mod logging;

use serde::Deserialize;

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// 日志级别（如 "info", "debug"），RUST_LOG 优先
    pub log_level: String,

    /// 日志输出格式：json（结构化）或 pretty（人类可读）
    pub log_format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// 覆盖日志级别（命令行参数优先于配置文件）
    pub fn with_log_level(mut self, log_level: Option<&str>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
        self
    }

    /// 是否启用 JSON 格式日志
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

pub use logging::init_logging;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs());
    }

    #[test]
    fn test_with_log_level() {
        let config = ObservabilityConfig::default().with_log_level(Some("debug"));
        assert_eq!(config.log_level, "debug");

        let config = config.with_log_level(None);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_json_format_is_case_insensitive() {
        let config = ObservabilityConfig {
            log_format: "JSON".to_string(),
            ..Default::default()
        };
        assert!(config.json_logs());
    }
}
