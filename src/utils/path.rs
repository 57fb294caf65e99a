use std::path::Path;

/// 从文件路径中获取文件名（最后一个路径组件）
///
/// # 参数
///
/// * `path` - 文件路径
///
/// # 返回值
///
/// 返回文件名字符串，路径没有文件名时返回空字符串
///
/// # 示例
///
/// ```
/// use cos_upload::utils::path::file_name;
///
/// assert_eq!(file_name("./cat.png"), "cat.png");
/// assert_eq!(file_name("path/to/image.PNG"), "image.PNG");
/// assert_eq!(file_name("cat.png"), "cat.png");
/// assert_eq!(file_name("/"), "");
/// ```
pub fn file_name(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
