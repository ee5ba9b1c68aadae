//! 算法模块
//!
//! 包含最优优先路径搜索算法实现

pub mod path_finder;
pub mod types;

// 重新导出常用算法结构体
pub use path_finder::PathFinder;
pub use types::{AlgorithmStats, FrontierNode, Heuristic, PathResult};
