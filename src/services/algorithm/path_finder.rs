//! 最短路径搜索引擎
//!
//! 基于优先队列的最优优先搜索（A*形态），零启发配置下退化为
//! Dijkstra。搜索运行时的 g 值、前驱映射、闭集与边界队列均为单次
//! 调用私有，调用结束即丢弃；同一图实例上的连续或并发搜索互不干扰。

use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::time::Instant;

use crate::core::error::{GraphError, GraphResult};
use crate::graph::{NodeState, WeightedGraph};

use super::types::{AlgorithmStats, FrontierNode, Heuristic, PathResult};

/// 最短路径搜索器
///
/// 复杂度 O((V + E) log V)，V、E 为从源点可达的节点数与边数。
pub struct PathFinder<T> {
    /// 启发式配置
    heuristic: Heuristic<T>,
    stats: AlgorithmStats,
}

impl<T: Clone + Eq + Hash + fmt::Debug> PathFinder<T> {
    pub fn new() -> Self {
        Self {
            heuristic: Heuristic::Zero,
            stats: AlgorithmStats::new(),
        }
    }

    /// 设置启发式配置
    pub fn with_heuristic(mut self, heuristic: Heuristic<T>) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// 查找从源点到终点的最短路径
    ///
    /// # 参数
    /// - `graph`: 带权无向图
    /// - `source`: 源节点ID
    /// - `destination`: 目标节点ID
    ///
    /// # 返回
    /// - `Ok(Some(PathResult))` - 找到路径，节点序列以源点开头、终点结尾
    /// - `Ok(None)` - 终点不可达（正常结果，非错误）
    /// - `Err(GraphError::UnknownNode)` - 源点或终点未注册
    pub fn find_path(
        &mut self,
        graph: &WeightedGraph<T>,
        source: &T,
        destination: &T,
    ) -> GraphResult<Option<PathResult<T>>> {
        if !graph.contains(source) {
            return Err(GraphError::UnknownNode(format!("{:?}", source)));
        }
        if !graph.contains(destination) {
            return Err(GraphError::UnknownNode(format!("{:?}", destination)));
        }

        let started = Instant::now();
        self.stats = AlgorithmStats::new();
        log::debug!("开始最短路径搜索: {:?} -> {:?}", source, destination);

        if source == destination {
            self.stats
                .set_execution_time(started.elapsed().as_millis() as u64);
            return Ok(Some(PathResult {
                nodes: vec![source.clone()],
                total_cost: 0.0,
            }));
        }

        // 单次调用私有的搜索状态，按触达节点惰性分配
        let mut states: HashMap<T, NodeState> = HashMap::new();
        let mut predecessors: HashMap<T, T> = HashMap::new();
        let mut closed_set: HashSet<T> = HashSet::new();
        let mut frontier: BinaryHeap<FrontierNode<T>> = BinaryHeap::new();
        let mut next_order: u64 = 0;

        let h_source = self.heuristic_cost(graph, source, destination)?;
        let mut source_state = NodeState::new(h_source);
        source_state.relax(0.0);
        frontier.push(FrontierNode {
            g_cost: source_state.g(),
            h_cost: source_state.h(),
            f_cost: source_state.f(),
            order: next_order,
            node: source.clone(),
        });
        next_order += 1;
        states.insert(source.clone(), source_state);

        while let Some(current) = frontier.pop() {
            if current.node == *destination {
                let nodes = Self::reconstruct_path(&predecessors, destination);
                self.stats
                    .set_execution_time(started.elapsed().as_millis() as u64);
                log::debug!(
                    "搜索完成: 路径 {} 个节点, 总代价 {}, 访问节点 {}",
                    nodes.len(),
                    current.g_cost,
                    self.stats.nodes_visited
                );
                return Ok(Some(PathResult {
                    nodes,
                    total_cost: current.g_cost,
                }));
            }

            // 松弛后重复入队的过期条目在此丢弃
            if !closed_set.insert(current.node.clone()) {
                continue;
            }
            self.stats.increment_nodes_visited();

            let neighbors = graph.neighbors_of(&current.node)?;
            self.stats.increment_edges_traversed(neighbors.len());

            for (neighbor, &weight) in neighbors {
                if closed_set.contains(neighbor) {
                    continue;
                }

                let tentative_g = current.g_cost + weight;
                let known_g = states
                    .get(neighbor)
                    .map(|state| state.g())
                    .unwrap_or(f64::INFINITY);

                if tentative_g < known_g {
                    let state = match states.entry(neighbor.clone()) {
                        Entry::Occupied(entry) => entry.into_mut(),
                        Entry::Vacant(entry) => {
                            let h = self.heuristic_cost(graph, neighbor, destination)?;
                            entry.insert(NodeState::new(h))
                        }
                    };
                    state.relax(tentative_g);
                    predecessors.insert(neighbor.clone(), current.node.clone());
                    frontier.push(FrontierNode {
                        g_cost: state.g(),
                        h_cost: state.h(),
                        f_cost: state.f(),
                        order: next_order,
                        node: neighbor.clone(),
                    });
                    next_order += 1;
                }
            }
        }

        self.stats
            .set_execution_time(started.elapsed().as_millis() as u64);
        log::debug!(
            "搜索完成: {:?} 不可达, 访问节点 {}",
            destination,
            self.stats.nodes_visited
        );
        Ok(None)
    }

    /// 获取最近一次搜索的统计信息
    pub fn stats(&self) -> &AlgorithmStats {
        &self.stats
    }

    /// 计算节点的启发估计值
    fn heuristic_cost(
        &self,
        graph: &WeightedGraph<T>,
        node: &T,
        destination: &T,
    ) -> GraphResult<f64> {
        let h = match &self.heuristic {
            Heuristic::Zero => 0.0,
            Heuristic::NodeValue => graph.state_of(node)?.h(),
            Heuristic::Custom(f) => f(node, destination),
        };
        Ok(h)
    }

    /// 根据前驱映射重建路径
    ///
    /// 从终点沿前驱链回溯到源点（源点没有前驱记录），再反转。
    /// 前驱映射是路径的权威记录。
    fn reconstruct_path(predecessors: &HashMap<T, T>, destination: &T) -> Vec<T> {
        let mut path = vec![destination.clone()];
        let mut current = destination;

        while let Some(predecessor) = predecessors.get(current) {
            path.push(predecessor.clone());
            current = predecessor;
        }

        path.reverse();
        path
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> Default for PathFinder<T> {
    fn default() -> Self {
        Self::new()
    }
}
