//! 带权无向图模块
//!
//! 图持有节点注册表、构建时提供的启发值注册表以及无向带权邻接关系。
//! 节点和边在装配阶段一次性添加，搜索阶段图本身保持只读；搜索运行时
//! 的瞬态代价状态由搜索器按次分配，不写回图结构。

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::core::error::{GraphError, GraphResult};

/// 节点搜索状态
///
/// - `g`：从源点到该节点的当前最优代价，未触达时为 `+∞` 哨兵值；
///   在一次搜索内单调不增，节点进入闭集后不再变化
/// - `h`：构建时登记的启发估计值，创建后不变
/// - `f = g + h`：边界队列的排序键，随 `g` 更新而重算
#[derive(Debug, Clone, PartialEq)]
pub struct NodeState {
    g: f64,
    h: f64,
    f: f64,
}

impl NodeState {
    pub(crate) fn new(h: f64) -> Self {
        Self {
            g: f64::INFINITY,
            h,
            f: f64::INFINITY,
        }
    }

    /// 从源点到该节点的当前最优代价
    pub fn g(&self) -> f64 {
        self.g
    }

    /// 启发估计值
    pub fn h(&self) -> f64 {
        self.h
    }

    /// 边界排序键，始终等于 `g + h`
    pub fn f(&self) -> f64 {
        self.f
    }

    /// 松弛：写入更优的 g 值并重算 f
    pub(crate) fn relax(&mut self, g: f64) {
        self.g = g;
        self.f = g + self.h;
    }
}

/// 带权无向图
///
/// 节点ID为调用方提供的可比较、可哈希的不透明值（典型为字符串键）。
/// 节点必须先通过 [`add_node`](WeightedGraph::add_node) 注册，才能出现
/// 在边或搜索中。同一对端点至多一条边，重复添加时覆盖旧权重。
pub struct WeightedGraph<T> {
    /// 节点ID到搜索状态的映射
    nodes: HashMap<T, NodeState>,
    /// 节点ID到 (邻居ID -> 边权重) 的无向邻接映射
    adjacency: HashMap<T, HashMap<T, f64>>,
    /// 构建时提供的启发值注册表
    heuristics: HashMap<T, f64>,
    /// 无向边数量（每对端点计一次）
    edge_count: usize,
}

impl<T: Clone + Eq + Hash + fmt::Debug> WeightedGraph<T> {
    /// 创建空图
    ///
    /// # 参数
    /// - `heuristics`: 节点ID到启发值的映射，由外部装载器提供；
    ///   每个待注册节点必须在其中有一个有限且非负的条目
    pub fn new(heuristics: HashMap<T, f64>) -> Self {
        Self {
            nodes: HashMap::new(),
            adjacency: HashMap::new(),
            heuristics,
            edge_count: 0,
        }
    }

    /// 注册节点
    ///
    /// 为该节点分配搜索状态（`g = +∞`，`h` 取自启发值注册表）。
    ///
    /// # 返回
    /// - `Err(GraphError::DuplicateNode)` - 节点已注册
    /// - `Err(GraphError::UnknownHeuristic)` - 启发值注册表中没有该节点的
    ///   条目，或条目不是有限非负数
    pub fn add_node(&mut self, id: T) -> GraphResult<()> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(format!("{:?}", id)));
        }

        let h = match self.heuristics.get(&id) {
            Some(&h) if h.is_finite() && h >= 0.0 => h,
            Some(&h) => {
                return Err(GraphError::UnknownHeuristic(format!(
                    "{:?} (启发值 {} 不可用)",
                    id, h
                )));
            }
            None => return Err(GraphError::UnknownHeuristic(format!("{:?}", id))),
        };

        self.adjacency.insert(id.clone(), HashMap::new());
        self.nodes.insert(id, NodeState::new(h));
        Ok(())
    }

    /// 添加无向边
    ///
    /// 对称地写入 (a→b) 和 (b→a) 两个方向的邻接条目；同一对端点
    /// 重复添加时覆盖旧权重。校验失败时图保持不变。
    ///
    /// # 返回
    /// - `Err(GraphError::UnknownNode)` - 任一端点未注册
    /// - `Err(GraphError::InvalidWeight)` - 权重为负数、NaN 或无穷大
    pub fn add_edge(&mut self, a: T, b: T, weight: f64) -> GraphResult<()> {
        if !self.nodes.contains_key(&a) {
            return Err(GraphError::UnknownNode(format!("{:?}", a)));
        }
        if !self.nodes.contains_key(&b) {
            return Err(GraphError::UnknownNode(format!("{:?}", b)));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(format!(
                "{:?} -- {:?}: {}",
                a, b, weight
            )));
        }

        if let Some(neighbors) = self.adjacency.get_mut(&a) {
            if neighbors.insert(b.clone(), weight).is_none() {
                self.edge_count += 1;
            }
        }
        if let Some(neighbors) = self.adjacency.get_mut(&b) {
            neighbors.insert(a, weight);
        }
        Ok(())
    }

    /// 批量添加无向边
    ///
    /// 接收外部装载器移交的 `(端点A, 端点B, 权重)` 三元组序列，
    /// 逐条校验并写入；遇到第一个非法条目立即返回错误。
    pub fn add_edges<I>(&mut self, triples: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = (T, T, f64)>,
    {
        let mut loaded = 0usize;
        for (a, b, weight) in triples {
            self.add_edge(a, b, weight)?;
            loaded += 1;
        }
        log::info!("边批量装载完成: {} 条记录, 图中共 {} 条边", loaded, self.edge_count);
        Ok(())
    }

    /// 返回节点的只读邻接视图
    ///
    /// 视图为 `邻居ID -> 边权重` 的映射；通过不可变借用暴露，
    /// 调用方无法借此修改邻接关系或搜索状态。
    ///
    /// # 返回
    /// - `Err(GraphError::UnknownNode)` - 节点未注册
    pub fn neighbors_of(&self, id: &T) -> GraphResult<&HashMap<T, f64>> {
        self.adjacency
            .get(id)
            .ok_or_else(|| GraphError::UnknownNode(format!("{:?}", id)))
    }

    /// 返回节点的搜索状态
    ///
    /// # 返回
    /// - `Err(GraphError::UnknownNode)` - 节点未注册
    pub fn state_of(&self, id: &T) -> GraphResult<&NodeState> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::UnknownNode(format!("{:?}", id)))
    }

    /// 节点是否已注册
    pub fn contains(&self, id: &T) -> bool {
        self.nodes.contains_key(id)
    }

    /// 遍历所有已注册的节点ID（顺序不保证）
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.nodes.keys()
    }

    /// 已注册的节点数量
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 无向边数量（每对端点计一次）
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heuristics(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries
            .iter()
            .map(|(id, h)| (id.to_string(), *h))
            .collect()
    }

    #[test]
    fn test_add_node() {
        let mut graph = WeightedGraph::new(heuristics(&[("A", 1.0), ("B", 0.0)]));
        assert!(graph.add_node("A".to_string()).is_ok());
        assert!(graph.add_node("B".to_string()).is_ok());
        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains(&"A".to_string()));
    }

    #[test]
    fn test_add_duplicate_node() {
        let mut graph = WeightedGraph::new(heuristics(&[("A", 1.0)]));
        graph.add_node("A".to_string()).expect("First add should succeed in test");

        let result = graph.add_node("A".to_string());
        assert!(matches!(result, Err(GraphError::DuplicateNode(_))));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_add_node_without_heuristic() {
        let mut graph = WeightedGraph::new(heuristics(&[("A", 1.0)]));
        let result = graph.add_node("B".to_string());
        assert!(matches!(result, Err(GraphError::UnknownHeuristic(_))));
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_add_node_with_unusable_heuristic() {
        let mut graph =
            WeightedGraph::new(heuristics(&[("neg", -1.0), ("nan", f64::NAN), ("inf", f64::INFINITY)]));
        for id in ["neg", "nan", "inf"] {
            let result = graph.add_node(id.to_string());
            assert!(matches!(result, Err(GraphError::UnknownHeuristic(_))));
        }
    }

    #[test]
    fn test_node_state_initialization() {
        let mut graph = WeightedGraph::new(heuristics(&[("A", 3.5)]));
        graph.add_node("A".to_string()).expect("Add should succeed in test");

        let state = graph.state_of(&"A".to_string()).expect("State should exist in test");
        assert_eq!(state.g(), f64::INFINITY);
        assert_eq!(state.h(), 3.5);
        assert_eq!(state.f(), f64::INFINITY);
    }

    #[test]
    fn test_node_state_relax_recomputes_f() {
        let mut state = NodeState::new(2.0);
        state.relax(5.0);
        assert_eq!(state.g(), 5.0);
        assert_eq!(state.f(), 7.0);

        state.relax(3.0);
        assert_eq!(state.g(), 3.0);
        assert_eq!(state.f(), 5.0);
    }

    #[test]
    fn test_add_edge_symmetric() {
        let mut graph = WeightedGraph::new(heuristics(&[("A", 0.0), ("B", 0.0)]));
        graph.add_node("A".to_string()).expect("Add should succeed in test");
        graph.add_node("B".to_string()).expect("Add should succeed in test");
        graph
            .add_edge("A".to_string(), "B".to_string(), 5.0)
            .expect("Edge should succeed in test");

        let from_a = graph.neighbors_of(&"A".to_string()).expect("View should exist in test");
        let from_b = graph.neighbors_of(&"B".to_string()).expect("View should exist in test");
        assert_eq!(from_a.get(&"B".to_string()), Some(&5.0));
        assert_eq!(from_b.get(&"A".to_string()), Some(&5.0));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_unknown_node_leaves_graph_unmodified() {
        let mut graph = WeightedGraph::new(heuristics(&[("A", 0.0)]));
        graph.add_node("A".to_string()).expect("Add should succeed in test");

        let result = graph.add_edge("A".to_string(), "X".to_string(), 1.0);
        assert!(matches!(result, Err(GraphError::UnknownNode(_))));
        assert_eq!(graph.edge_count(), 0);
        let from_a = graph.neighbors_of(&"A".to_string()).expect("View should exist in test");
        assert!(from_a.is_empty());
    }

    #[test]
    fn test_add_edge_invalid_weight() {
        let mut graph = WeightedGraph::new(heuristics(&[("A", 0.0), ("B", 0.0)]));
        graph.add_node("A".to_string()).expect("Add should succeed in test");
        graph.add_node("B".to_string()).expect("Add should succeed in test");

        for weight in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = graph.add_edge("A".to_string(), "B".to_string(), weight);
            assert!(matches!(result, Err(GraphError::InvalidWeight(_))));
        }
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut graph = WeightedGraph::new(heuristics(&[("A", 0.0), ("B", 0.0)]));
        graph.add_node("A".to_string()).expect("Add should succeed in test");
        graph.add_node("B".to_string()).expect("Add should succeed in test");

        graph
            .add_edge("A".to_string(), "B".to_string(), 5.0)
            .expect("Edge should succeed in test");
        graph
            .add_edge("A".to_string(), "B".to_string(), 2.0)
            .expect("Edge should succeed in test");

        let from_a = graph.neighbors_of(&"A".to_string()).expect("View should exist in test");
        let from_b = graph.neighbors_of(&"B".to_string()).expect("View should exist in test");
        assert_eq!(from_a.get(&"B".to_string()), Some(&2.0));
        assert_eq!(from_b.get(&"A".to_string()), Some(&2.0));
        // 覆盖不产生新边
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edges_bulk() {
        let mut graph =
            WeightedGraph::new(heuristics(&[("A", 0.0), ("B", 0.0), ("C", 0.0)]));
        for id in ["A", "B", "C"] {
            graph.add_node(id.to_string()).expect("Add should succeed in test");
        }

        let triples = vec![
            ("A".to_string(), "B".to_string(), 1.0),
            ("B".to_string(), "C".to_string(), 2.0),
        ];
        graph.add_edges(triples).expect("Bulk load should succeed in test");
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_add_edges_stops_at_first_invalid() {
        let mut graph = WeightedGraph::new(heuristics(&[("A", 0.0), ("B", 0.0)]));
        graph.add_node("A".to_string()).expect("Add should succeed in test");
        graph.add_node("B".to_string()).expect("Add should succeed in test");

        let triples = vec![
            ("A".to_string(), "B".to_string(), 1.0),
            ("A".to_string(), "X".to_string(), 1.0),
        ];
        let result = graph.add_edges(triples);
        assert!(matches!(result, Err(GraphError::UnknownNode(_))));
        // 第一条合法边已写入
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_neighbors_of_unknown_node() {
        let graph: WeightedGraph<String> = WeightedGraph::new(HashMap::new());
        let result = graph.neighbors_of(&"X".to_string());
        assert!(matches!(result, Err(GraphError::UnknownNode(_))));
    }

    #[test]
    fn test_nodes_iterator_is_restartable() {
        let mut graph =
            WeightedGraph::new(heuristics(&[("A", 0.0), ("B", 0.0), ("C", 0.0)]));
        for id in ["A", "B", "C"] {
            graph.add_node(id.to_string()).expect("Add should succeed in test");
        }

        assert_eq!(graph.nodes().count(), 3);
        // 再次遍历得到同样的节点集合
        assert_eq!(graph.nodes().count(), 3);
    }
}
