//! COS 图片上传工具库
//!
//! 这是一个把本地图片上传到腾讯云 COS 的命令行工具，主要功能包括：
//! - 从 `.env` 文件和进程环境变量加载配置，已设置的环境变量优先
//! - 一次性报告所有缺失的必填配置
//! - 以时间戳前缀的对象键和公共读权限上传文件
//! - 返回 `{公开域名}/{对象键}` 形式的访问 URL

pub mod cli;
pub mod config;
pub mod cos;
pub mod error;
pub mod utils;

use crate::cli::Cli;
use crate::config::{CosConfig, Environment};
use crate::cos::{CosStore, Uploader, create_cos_client};
use crate::error::AppError;

/// 执行一次完整的上传流程。
///
/// 依次完成：加载环境、校验配置、构建 COS 客户端、上传文件。
/// 构建客户端不会发起网络请求，文件不存在时也不会访问 COS。
///
/// # 参数
///
/// * `cli` - 解析后的命令行参数。
///
/// # 返回值
///
/// 上传成功后的公开 URL。
///
/// # Errors
///
/// 配置缺失、文件不存在或上传失败时返回 `AppError`。
pub async fn run(cli: &Cli) -> Result<String, AppError> {
    let env = Environment::load(&cli.env_file)?;
    let config = CosConfig::from_env(&env)?;

    // 初始化 COS 客户端
    let client = create_cos_client(&config).await;
    let uploader = Uploader::new(config, CosStore::new(client));

    Ok(uploader.upload(&cli.image).await?)
}
