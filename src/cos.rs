//! COS 模块
//!
//! 该模块负责与腾讯云 COS 存储桶的交互，包括客户端构建、对象键生成和上传。

// 声明子模块
pub mod client;
pub mod key;
pub mod store;
pub mod upload;

// 重新导出常用的类型
pub use client::create_cos_client;
pub use key::{object_key, public_url};
pub use store::{CosStore, ObjectAcl, ObjectStore};
pub use upload::Uploader;
