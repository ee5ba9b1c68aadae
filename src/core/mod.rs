//! 核心模块
//!
//! 包含统一错误处理等基础设施

pub mod error;

// 重新导出常用类型
pub use error::{GraphError, GraphResult};
