//! 统一错误处理系统 for RouteGraph
//!
//! ## 设计理念
//!
//! 1. **结构性错误即输入校验失败**：重复节点、未知节点等错误均在
//!    检测到的调用处立即返回，内部不吞错、不重试（引擎不做 I/O，
//!    没有重试的语义）。
//! 2. **不可达不是错误**：搜索未找到路径通过 `Ok(None)` 表达，
//!    错误类型只覆盖调用方的结构性输入问题。
//! 3. **统一接口**：`GraphResult<T>` 提供统一的返回类型，简化错误传播。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 统一的图操作错误类型
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphError {
    /// 尝试注册已存在的节点
    #[error("重复节点: {0}")]
    DuplicateNode(String),

    /// 操作引用了未注册的节点
    #[error("未知节点: {0}")]
    UnknownNode(String),

    /// 注册节点时没有对应的可用启发值
    #[error("节点缺少可用的启发值: {0}")]
    UnknownHeuristic(String),

    /// 边权重为负数、NaN 或无穷大
    #[error("非法边权重: {0}")]
    InvalidWeight(String),
}

/// 统一的结果类型
pub type GraphResult<T> = Result<T, GraphError>;
