use crate::config::DEFAULT_ENV_FILE;
use clap::Parser;
use std::path::PathBuf;

/// 默认上传的示例图片
pub const DEFAULT_IMAGE: &str = "./cat.png";

/// 上传本地图片到腾讯云 COS，并输出公开访问 URL。
#[derive(Debug, Parser)]
#[command(name = "cos-upload", version)]
pub struct Cli {
    /// 本地图片路径
    #[arg(default_value = DEFAULT_IMAGE)]
    pub image: PathBuf,

    /// 环境文件路径，文件中的值不会覆盖已设置的环境变量
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,
}
