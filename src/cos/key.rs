use crate::utils::path::file_name;
use std::path::Path;

/// 生成对象键：`{Unix 秒级时间戳}_{文件名}`。
///
/// 同一秒内上传同名文件会得到相同的键。
///
/// # 示例
///
/// ```
/// use cos_upload::cos::object_key;
///
/// assert_eq!(object_key(1700000000, "./cat.png"), "1700000000_cat.png");
/// ```
pub fn object_key(timestamp: i64, local_path: impl AsRef<Path>) -> String {
    format!("{}_{}", timestamp, file_name(local_path))
}

/// 拼接对象的公开访问 URL。
pub fn public_url(public_domain: &str, key: &str) -> String {
    format!("{}/{}", public_domain, key)
}
