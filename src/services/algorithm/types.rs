//! 路径搜索共享类型定义
//!
//! 包含搜索引擎使用的边界节点、启发式配置、结果与统计结构

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// 边界（open set）节点，用于优先队列
///
/// 按 f 值升序出队；f 相同时按入队序号先进先出，保证结果可复现。
#[derive(Debug, Clone)]
pub struct FrontierNode<T> {
    /// 从源点到当前节点的实际代价
    pub g_cost: f64,
    /// 启发式估计代价（到终点的估计）
    pub h_cost: f64,
    /// 总代价 = g_cost + h_cost
    pub f_cost: f64,
    /// 入队序号，同 f 值时的确定性平局键
    pub order: u64,
    pub node: T,
}

impl<T: Eq> Eq for FrontierNode<T> {}

impl<T: Eq> PartialEq for FrontierNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.order == other.order && self.node == other.node
    }
}

impl<T: Eq> Ord for FrontierNode<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // 最小堆：f 小的优先；f 相同时入队早的优先
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl<T: Eq> PartialOrd for FrontierNode<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 启发式配置
///
/// 默认 `Zero`，搜索退化为统一代价（Dijkstra）行为。
#[derive(Clone)]
pub enum Heuristic<T> {
    /// 零启发：f = g，纯最短路径搜索
    Zero,
    /// 使用图中节点登记的启发值（按节点固定，不随终点变化）
    NodeValue,
    /// 自定义启发函数 h(节点, 终点)，要求非负且不高估剩余代价
    Custom(Arc<dyn Fn(&T, &T) -> f64 + Send + Sync>),
}

impl<T> Heuristic<T> {
    /// 是否为零启发
    pub fn is_zero(&self) -> bool {
        matches!(self, Heuristic::Zero)
    }
}

impl<T> Default for Heuristic<T> {
    fn default() -> Self {
        Heuristic::Zero
    }
}

impl<T> fmt::Debug for Heuristic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Zero => write!(f, "Zero"),
            Heuristic::NodeValue => write!(f, "NodeValue"),
            Heuristic::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// 最短路径搜索结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult<T> {
    /// 从源点到终点的有序节点序列（含两端）
    pub nodes: Vec<T>,
    /// 路径总代价，等于终点最终的 g 值
    pub total_cost: f64,
}

/// 算法统计信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlgorithmStats {
    pub nodes_visited: usize,
    pub edges_traversed: usize,
    pub execution_time_ms: u64,
}

impl AlgorithmStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_nodes_visited(&mut self) {
        self.nodes_visited += 1;
    }

    pub fn increment_edges_traversed(&mut self, count: usize) {
        self.edges_traversed += count;
    }

    pub fn set_execution_time(&mut self, time_ms: u64) {
        self.execution_time_ms = time_ms;
    }
}
