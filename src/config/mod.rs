//! 配置模块
//!
//! 提供 TOML 配置文件的加载与保存，当前只承载日志相关参数

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 应用配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub log: LogConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
    /// 日志级别（trace/debug/info/warn/error）
    pub level: String,
    /// 日志目录
    pub dir: String,
    /// 日志文件基础名
    pub file: String,
    /// 单个日志文件大小上限（字节），超出后轮转
    pub max_file_size: u64,
    /// 保留的日志文件数量
    pub max_files: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "routegraph".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// 将配置保存为 TOML 文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert_eq!(config.log.dir, "logs");
        assert_eq!(config.log.file, "routegraph");
        assert_eq!(config.log.max_files, 5);
    }

    #[test]
    fn test_config_toml_round_trip() {
        let dir = tempfile::tempdir().expect("Tempdir should succeed in test");
        let path = dir.path().join("routegraph.toml");

        let mut config = Config::default();
        config.log.level = "debug".to_string();
        config.save(&path).expect("Save should succeed in test");

        let loaded = Config::load(&path).expect("Load should succeed in test");
        assert_eq!(loaded.log.level, "debug");
        assert_eq!(loaded.log.max_file_size, config.log.max_file_size);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = Config::load("definitely/not/a/config.toml");
        assert!(result.is_err());
    }
}
