//! 上传模块
//!
//! 生成带时间戳的对象键，以公共读权限上传一次，成功时返回公开 URL。
//! 不做重试。

use crate::config::CosConfig;
use crate::cos::key::{object_key, public_url};
use crate::cos::store::{ObjectAcl, ObjectStore};
use crate::error::UploadError;
use std::path::Path;
use tracing::{error, info};

/// 图片上传客户端。
pub struct Uploader<S> {
    config: CosConfig,
    store: S,
}

impl<S: ObjectStore> Uploader<S> {
    pub fn new(config: CosConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &CosConfig {
        &self.config
    }

    /// 以当前时间生成对象键并上传本地文件。
    ///
    /// # 参数
    ///
    /// * `local_path` - 本地图片路径。
    ///
    /// # 返回值
    ///
    /// 成功时返回 `{public_domain}/{object_key}`。
    ///
    /// # Errors
    ///
    /// 文件不存在或存储端返回失败时返回 `UploadError`，失败原因只保留文本。
    pub async fn upload(&self, local_path: &Path) -> Result<String, UploadError> {
        self.upload_at(local_path, chrono::Utc::now().timestamp()).await
    }

    /// 使用指定的 Unix 时间戳（秒）上传本地文件。
    pub async fn upload_at(
        &self,
        local_path: &Path,
        timestamp: i64,
    ) -> Result<String, UploadError> {
        let is_file = tokio::fs::metadata(local_path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            error!(path = %local_path.display(), "文件不存在");
            return Err(UploadError::FileNotFound(local_path.to_path_buf()));
        }

        let key = object_key(timestamp, local_path);

        match self
            .store
            .put_file(
                &self.config.bucket_name,
                local_path,
                &key,
                ObjectAcl::PublicRead,
            )
            .await
        {
            Ok(()) => {
                let url = public_url(&self.config.public_domain, &key);
                info!(%key, %url, "上传成功");
                Ok(url)
            }
            Err(e) => {
                error!(%key, error = %e, "上传失败");
                Err(e.into())
            }
        }
    }
}
