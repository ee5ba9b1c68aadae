//! 服务模块
//!
//! 包含路径搜索算法服务

pub mod algorithm;
