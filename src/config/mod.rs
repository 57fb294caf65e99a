//! COS 上传工具的配置模块。
//!
//! 该模块负责从环境快照中读取 COS 配置并校验必填项。

pub mod env_file;

pub use env_file::{DEFAULT_ENV_FILE, EnvFile, Environment};

use crate::error::ConfigError;
use std::fmt;

/// 默认地域
pub const DEFAULT_REGION: &str = "ap-hongkong";

/// 上传所需的配置变量。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigVar {
    SecretId,
    SecretKey,
    Region,
    BucketName,
    PublicDomain,
}

impl ConfigVar {
    /// 按校验顺序排列的全部变量
    pub const ALL: [ConfigVar; 5] = [
        ConfigVar::SecretId,
        ConfigVar::SecretKey,
        ConfigVar::Region,
        ConfigVar::BucketName,
        ConfigVar::PublicDomain,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConfigVar::SecretId => "CITYLING_COS_SECRET_ID",
            ConfigVar::SecretKey => "CITYLING_COS_SECRET_KEY",
            ConfigVar::Region => "CITYLING_COS_REGION",
            ConfigVar::BucketName => "CITYLING_COS_BUCKET_NAME",
            ConfigVar::PublicDomain => "CITYLING_COS_PUBLIC_DOMAIN",
        }
    }

    /// 有默认值的变量不参与必填校验。
    pub fn default_value(self) -> Option<&'static str> {
        match self {
            ConfigVar::Region => Some(DEFAULT_REGION),
            _ => None,
        }
    }

    pub fn required(self) -> bool {
        self.default_value().is_none()
    }

    /// 读取去除首尾空白后的值，空值时回退到默认值。
    fn read(self, env: &Environment) -> String {
        let value = env.get(self.name()).map(str::trim).unwrap_or_default();
        match self.default_value() {
            Some(default) if value.is_empty() => default.to_string(),
            _ => value.to_string(),
        }
    }
}

/// 校验通过的 COS 配置，启动时构建一次后按引用传递。
#[derive(Clone, PartialEq, Eq)]
pub struct CosConfig {
    pub secret_id: String,
    pub secret_key: String,
    pub region: String,
    pub bucket_name: String,
    /// 公开访问域名，末尾的 `/` 已被去掉，URL 中不会出现双斜杠
    pub public_domain: String,
}

impl CosConfig {
    /// 从环境快照构建配置。
    ///
    /// 会收集所有缺失的必填变量后一次性报告，而不是遇到第一个就返回。
    ///
    /// # 参数
    ///
    /// * `env` - 合并后的环境快照。
    ///
    /// # Errors
    ///
    /// 任一必填变量为空时返回 `ConfigError::MissingVariables`。
    pub fn from_env(env: &Environment) -> Result<Self, ConfigError> {
        let [secret_id, secret_key, region, bucket_name, public_domain] =
            ConfigVar::ALL.map(|var| var.read(env));

        let missing: Vec<&'static str> = ConfigVar::ALL
            .into_iter()
            .zip([&secret_id, &secret_key, &region, &bucket_name, &public_domain])
            .filter(|(var, value)| var.required() && value.is_empty())
            .map(|(var, _)| var.name())
            .collect();

        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        Ok(Self {
            secret_id,
            secret_key,
            region,
            bucket_name,
            public_domain: public_domain.trim_end_matches('/').to_string(),
        })
    }
}

impl fmt::Debug for CosConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CosConfig")
            .field("secret_id", &"***")
            .field("secret_key", &"***")
            .field("region", &self.region)
            .field("bucket_name", &self.bucket_name)
            .field("public_domain", &self.public_domain)
            .finish()
    }
}
