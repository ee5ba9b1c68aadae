//! 图结构核心模块
//!
//! 包含带权无向图与节点搜索状态的定义

pub mod weighted;

// 重新导出图结构相关功能
pub use weighted::{NodeState, WeightedGraph};
