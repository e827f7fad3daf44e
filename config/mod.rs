use crate::rtree::error::{RTreeError, Result};
use crate::rtree::DEFAULT_MAX_CHILDREN;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// rectree 配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RectreeConfig {
    /// 索引配置
    #[serde(default)]
    pub index: IndexConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 索引配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// R-tree 最大子节点数，超过时分裂
    #[serde(default = "default_max_children")]
    pub max_children: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_max_children() -> usize {
    DEFAULT_MAX_CHILDREN
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

// ============================================================================
// 实现
// ============================================================================

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_children: default_max_children(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            output: default_log_output(),
            log_file: None,
        }
    }
}

impl RectreeConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（RECTREE__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use rectree::config::RectreeConfig;
    ///
    /// // 加载配置（如果文件不存在，使用默认配置）
    /// let config = RectreeConfig::from_file("rectree.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            // 1. 加载默认配置（内嵌）
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            // 2. 加载用户配置（可选，不存在不报错）
            .add_source(config::File::with_name(path).required(false))
            // 3. 加载环境变量（RECTREE__ 前缀，双下划线分隔嵌套）
            .add_source(
                config::Environment::with_prefix("RECTREE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| RTreeError::Config(format!("Failed to load config: {}", e)))?;

        settings
            .try_deserialize()
            .map_err(|e| RTreeError::Config(format!("Failed to parse config: {}", e)))
    }

    /// 保存配置到文件
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use rectree::config::RectreeConfig;
    ///
    /// let config = RectreeConfig::default();
    /// config.save_to_file("rectree.toml").unwrap();
    /// ```
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| RTreeError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| RTreeError::Config(format!("Failed to write config file: {}", e)))?;
        Ok(())
    }

    /// 验证配置
    ///
    /// 检查配置的合法性，包括：
    /// - 最大子节点数
    /// - 日志级别
    /// - 日志输出
    pub fn validate(&self) -> Result<()> {
        // 两个种子的分裂规则至少需要2个子节点
        if self.index.max_children < 2 {
            return Err(RTreeError::InvalidConfiguration {
                max_children: self.index.max_children,
            });
        }

        // 验证日志级别
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(RTreeError::Config(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                )))
            }
        }

        // 验证日志输出
        match self.logging.output.as_str() {
            "stdout" => {}
            "file" if self.logging.log_file.is_some() => {}
            "file" => {
                return Err(RTreeError::Config(
                    "Log output is 'file' but log_file path is not specified".to_string(),
                ))
            }
            other => {
                return Err(RTreeError::Config(format!(
                    "Invalid log output: '{}'. Must be one of: stdout, file",
                    other
                )))
            }
        }

        Ok(())
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("📋 rectree Configuration:");
        println!("   Max Children: {}", self.index.max_children);
        println!("   Log Level:    {}", self.logging.level);
        println!("   Log Output:   {}", self.logging.output);
        if let Some(ref log_file) = self.logging.log_file {
            println!("   Log File:     {}", log_file.display());
        }
        println!();
    }
}
