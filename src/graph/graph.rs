//! 图数据结构
//!
//! 顶点 arena 加对称邻接表, 构建后只在分量发现时改写遍历状态

use super::registry::VertexRegistry;
use super::vertex::{Vertex, VertexId, VisitState};
use crate::types::{RawEdge, VertexNumber};

/// 无向图
///
/// 顶点按首次出现顺序存放; 邻接表对称, 重复读入的边原样保留
#[derive(Debug, Default)]
pub struct Graph {
    /// 全部顶点
    vertices: Vec<Vertex>,
    /// 构建期的外部编号映射
    registry: VertexRegistry,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            registry: VertexRegistry::new(),
        }
    }

    /// 从原始边对构建图
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = RawEdge>,
    {
        let mut graph = Self::new();
        for (a, b) in pairs {
            graph.insert_pair(a, b);
        }
        graph
    }

    // ==================== 构建操作 ====================

    /// 查找或创建顶点, 返回稠密下标
    pub fn intern(&mut self, number: VertexNumber) -> VertexId {
        let (id, created) = self.registry.get_or_create(number);
        if created {
            self.vertices.push(Vertex::new(id, number));
        }
        id
    }

    /// 插入一条无向边（向两个端点的邻接表各追加一项）
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) {
        self.vertices[a.index()].push_neighbor(b);
        self.vertices[b.index()].push_neighbor(a);
    }

    /// 按外部编号插入一条边, 端点首次出现时创建
    pub fn insert_pair(&mut self, a: VertexNumber, b: VertexNumber) {
        let id_a = self.intern(a);
        let id_b = self.intern(b);
        self.add_edge(id_a, id_b);
    }

    // ==================== 查询操作 ====================

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// 全部顶点（按首次出现顺序）
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// 按外部编号查找顶点
    pub fn vertex_by_number(&self, number: VertexNumber) -> Option<&Vertex> {
        self.registry.get(number).map(|id| self.vertex(id))
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 邻接表条目总数（每条无向边贡献两项）
    pub fn adjacency_entry_count(&self) -> usize {
        self.vertices.iter().map(|v| v.degree()).sum()
    }

    /// 边数量（多重边重复计数）
    pub fn edge_count(&self) -> usize {
        self.adjacency_entry_count() / 2
    }

    /// 顶点的度数
    pub fn degree(&self, id: VertexId) -> usize {
        self.vertices[id.index()].degree()
    }

    // ==================== 遍历状态 ====================

    pub(crate) fn state(&self, id: VertexId) -> VisitState {
        self.vertices[id.index()].state()
    }

    pub(crate) fn set_state(&mut self, id: VertexId, state: VisitState) {
        self.vertices[id.index()].set_state(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_basic() {
        let mut graph = Graph::new();

        graph.insert_pair(1, 2);
        graph.insert_pair(2, 3);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        // 邻接表对称
        let v1 = graph.vertex_by_number(1).unwrap();
        let v2 = graph.vertex_by_number(2).unwrap();
        assert_eq!(v1.neighbors(), &[v2.id()]);
        assert!(v2.neighbors().contains(&v1.id()));
        assert_eq!(v2.degree(), 2);
    }

    #[test]
    fn test_graph_dedup() {
        // 同一编号出现多次, 只创建一个顶点
        let graph = Graph::from_pairs([(1, 2), (2, 3), (3, 1), (1, 2)]);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_graph_multi_edge_multiplicity() {
        // 重复读入的边在两侧邻接表各保留一份
        let graph = Graph::from_pairs([(1, 2), (2, 1)]);

        let v1 = graph.vertex_by_number(1).unwrap();
        let v2 = graph.vertex_by_number(2).unwrap();
        assert_eq!(v1.degree(), 2);
        assert_eq!(v2.degree(), 2);
        assert_eq!(v1.neighbors(), &[v2.id(), v2.id()]);
    }

    #[test]
    fn test_graph_insertion_order() {
        // 稠密下标按首次出现顺序分配, 与外部编号无关
        let graph = Graph::from_pairs([(50, 7), (7, -3)]);

        let numbers: Vec<i64> = graph.vertices().iter().map(|v| v.number()).collect();
        assert_eq!(numbers, vec![50, 7, -3]);
    }

    #[test]
    fn test_graph_self_loop() {
        // 自环向同一邻接表追加两项
        let graph = Graph::from_pairs([(5, 5)]);

        let v = graph.vertex_by_number(5).unwrap();
        assert_eq!(v.degree(), 2);
        assert_eq!(graph.edge_count(), 1);
    }
}
