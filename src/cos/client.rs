//! COS 客户端模块
//!
//! COS 提供 S3 兼容接口，这里使用 `aws-sdk-s3` 连接地域对应的端点。

use crate::config::CosConfig;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, RequestChecksumCalculation, ResponseChecksumValidation};

/// 根据地域生成 COS 的 S3 兼容端点。
///
/// 请求使用虚拟主机风格，最终访问 `{bucket}.cos.{region}.myqcloud.com`。
pub fn cos_endpoint(region: &str) -> String {
    format!("https://cos.{}.myqcloud.com", region)
}

/// 使用已校验的配置创建 COS 客户端。
///
/// # 参数
///
/// * `config` - 已校验的 COS 配置。
///
/// # 返回值
///
/// 配置好的 `aws_sdk_s3::Client`。
pub async fn create_cos_client(config: &CosConfig) -> Client {
    let credentials = Credentials::new(
        config.secret_id.clone(),
        config.secret_key.clone(),
        None,
        None,
        "cityling-cos",
    );

    let region_provider =
        RegionProviderChain::first_try(Some(Region::new(config.region.clone())));

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .credentials_provider(credentials)
        .region(region_provider)
        .endpoint_url(cos_endpoint(&config.region))
        .load()
        .await;

    // COS 不支持 aws-chunked 上传附带的尾部校验和，只在接口强制要求时计算
    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(false)
        .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
        .response_checksum_validation(ResponseChecksumValidation::WhenRequired)
        .build();

    Client::from_conf(s3_config)
}
