//! 对象存储模块
//!
//! 把一次上传抽象为 `put_file(bucket, local_path, key, acl)`，
//! 便于在测试中替换真实的 COS 客户端。

use crate::error::StoreError;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// 上传时附带的访问控制。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectAcl {
    /// 公共读，上传后可通过公开域名访问
    PublicRead,
}

impl From<ObjectAcl> for ObjectCannedAcl {
    fn from(acl: ObjectAcl) -> Self {
        match acl {
            ObjectAcl::PublicRead => ObjectCannedAcl::PublicRead,
        }
    }
}

/// 单次上传能力。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// 将本地文件上传到指定存储桶的 `key` 下。
    async fn put_file(
        &self,
        bucket: &str,
        local_path: &Path,
        key: &str,
        acl: ObjectAcl,
    ) -> Result<(), StoreError>;
}

/// 基于 `aws-sdk-s3` 的 COS 实现。
pub struct CosStore {
    client: Client,
}

impl CosStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for CosStore {
    async fn put_file(
        &self,
        bucket: &str,
        local_path: &Path,
        key: &str,
        acl: ObjectAcl,
    ) -> Result<(), StoreError> {
        // 流式读取文件内容
        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|e| StoreError(e.to_string()))?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .acl(acl.into())
            .body(body)
            .send()
            .await
            .map_err(|e| StoreError(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }
}
