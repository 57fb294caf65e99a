//! 错误类型模块
//!
//! 所有底层失败在边界处都被压平为文本原因，不保留结构化错误码。

use std::path::PathBuf;
use thiserror::Error;

/// 配置加载与校验错误。
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 缺少一个或多个必填环境变量，列出全部缺失项。
    #[error("缺少环境变量: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),

    /// `.env` 文件存在但无法读取。
    #[error("无法读取环境文件 {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 上传失败。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("文件不存在：{}", .0.display())]
    FileNotFound(PathBuf),

    #[error("上传失败：{0}")]
    Store(String),
}

/// 对象存储返回的失败，仅保留文本原因。
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

impl From<StoreError> for UploadError {
    fn from(err: StoreError) -> Self {
        UploadError::Store(err.0)
    }
}

/// 命令行入口的统一错误。
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Upload(#[from] UploadError),
}
