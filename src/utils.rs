//! 工具函数模块
//!
//! 此模块包含了项目中使用的路径处理工具。

pub mod path;
