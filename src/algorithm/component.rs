//! 连通分量发现
//!
//! 多源 BFS, 单次遍历划分整图并选出最大分量

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId, VisitState};
use crate::types::VertexNumber;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 单个连通分量
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// 分量内顶点（按发现顺序）
    vertices: Vec<VertexId>,
}

impl Component {
    fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// 分量内顶点下标
    pub fn vertex_ids(&self) -> &[VertexId] {
        &self.vertices
    }

    /// 分量大小
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 分量内顶点的外部编号（按发现顺序）
    pub fn numbers(&self, graph: &Graph) -> Vec<VertexNumber> {
        self.vertices
            .iter()
            .map(|&id| graph.vertex(id).number())
            .collect()
    }
}

/// 一次分量发现的完整结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSet {
    /// 全部分量（按发现顺序）
    components: Vec<Component>,
    /// 最大分量的下标
    largest: usize,
}

impl ComponentSet {
    /// 全部分量
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// 分量数量
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 最大分量（大小相同时取先发现者）
    pub fn largest(&self) -> &Component {
        &self.components[self.largest]
    }
}

/// 发现所有连通分量并选出最大者
///
/// 按存储顺序扫描顶点, 对每个未访问顶点做一轮 BFS。队列用下标推进的
/// Vec 实现: 入队时标记 Queued 并记入当前分量, 出队时标记 Done。
/// 空图返回 EmptyGraph; 遍历状态不重置, 重复调用返回 AlreadyTraversed
pub fn find_components(graph: &mut Graph) -> Result<ComponentSet> {
    if graph.vertex_count() == 0 {
        return Err(Error::EmptyGraph);
    }
    if graph
        .vertices()
        .iter()
        .any(|v| v.state() != VisitState::Unvisited)
    {
        return Err(Error::AlreadyTraversed);
    }

    let mut components: Vec<Component> = Vec::new();

    for index in 0..graph.vertex_count() {
        let start = VertexId::new(index);
        if graph.state(start) != VisitState::Unvisited {
            continue;
        }

        let mut current = Component::new();
        let mut queue: Vec<VertexId> = Vec::new();
        graph.set_state(start, VisitState::Queued);
        queue.push(start);
        current.vertices.push(start);

        let mut head = 0;
        while head < queue.len() {
            let id = queue[head];
            head += 1;
            graph.set_state(id, VisitState::Done);

            for i in 0..graph.degree(id) {
                let neighbor = graph.vertex(id).neighbors()[i];
                if graph.state(neighbor) == VisitState::Unvisited {
                    graph.set_state(neighbor, VisitState::Queued);
                    queue.push(neighbor);
                    current.vertices.push(neighbor);
                }
            }
        }

        debug!("发现连通分量: {} 个顶点", current.len());
        components.push(current);
    }

    // 严格大于才替换, 同大小保留先发现者
    let mut largest = 0;
    for (i, component) in components.iter().enumerate() {
        if component.len() > components[largest].len() {
            largest = i;
        }
    }

    Ok(ComponentSet { components, largest })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_component() {
        let mut graph = Graph::from_pairs([(1, 2), (2, 3), (3, 1)]);

        let set = find_components(&mut graph).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.largest().len(), 3);
    }

    #[test]
    fn test_partition() {
        // 两个分量: {1,2,3} 和 {10,20}
        let mut graph = Graph::from_pairs([(1, 2), (10, 20), (2, 3)]);

        let set = find_components(&mut graph).unwrap();
        assert_eq!(set.len(), 2);

        // 分量互不相交且覆盖全部顶点
        let total: usize = set.components().iter().map(|c| c.len()).sum();
        assert_eq!(total, graph.vertex_count());

        let mut seen: Vec<VertexId> = set
            .components()
            .iter()
            .flat_map(|c| c.vertex_ids().iter().copied())
            .collect();
        seen.sort_by_key(|id| id.index());
        seen.dedup();
        assert_eq!(seen.len(), graph.vertex_count());

        // 每条边的两个端点落在同一分量
        let mut membership = vec![usize::MAX; graph.vertex_count()];
        for (index, component) in set.components().iter().enumerate() {
            for &id in component.vertex_ids() {
                membership[id.index()] = index;
            }
        }
        for vertex in graph.vertices() {
            for &neighbor in vertex.neighbors() {
                assert_eq!(
                    membership[vertex.id().index()],
                    membership[neighbor.index()]
                );
            }
        }

        assert_eq!(set.largest().numbers(&graph), vec![1, 2, 3]);
    }

    #[test]
    fn test_all_done_after_discovery() {
        let mut graph = Graph::from_pairs([(1, 2), (3, 4)]);

        find_components(&mut graph).unwrap();
        assert!(graph
            .vertices()
            .iter()
            .all(|v| v.state() == VisitState::Done));
    }

    #[test]
    fn test_largest_tie_break() {
        // 两个同为 2 个顶点的分量, 取先发现者
        let mut graph = Graph::from_pairs([(1, 2), (3, 4)]);

        let set = find_components(&mut graph).unwrap();
        assert_eq!(set.largest().numbers(&graph), vec![1, 2]);
    }

    #[test]
    fn test_largest_selection() {
        let mut graph = Graph::from_pairs([(1, 2), (10, 20), (20, 30), (30, 40)]);

        let set = find_components(&mut graph).unwrap();
        assert_eq!(set.largest().numbers(&graph), vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = Graph::new();

        let err = find_components(&mut graph).unwrap_err();
        assert!(matches!(err, Error::EmptyGraph));
    }

    #[test]
    fn test_rerun_rejected() {
        let mut graph = Graph::from_pairs([(1, 2)]);

        find_components(&mut graph).unwrap();
        let err = find_components(&mut graph).unwrap_err();
        assert!(matches!(err, Error::AlreadyTraversed));
    }

    #[test]
    fn test_discovery_order_stable() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        // 同一边表装入两个独立的图, 分量划分完全一致
        let mut rng = StdRng::seed_from_u64(42);
        let pairs: Vec<(i64, i64)> = (0..200)
            .map(|_| (rng.gen_range(0..60), rng.gen_range(0..60)))
            .collect();

        let mut graph_a = Graph::from_pairs(pairs.clone());
        let mut graph_b = Graph::from_pairs(pairs);

        let set_a = find_components(&mut graph_a).unwrap();
        let set_b = find_components(&mut graph_b).unwrap();

        assert_eq!(set_a.len(), set_b.len());
        for (a, b) in set_a.components().iter().zip(set_b.components()) {
            assert_eq!(a.numbers(&graph_a), b.numbers(&graph_b));
        }
        assert_eq!(
            set_a.largest().numbers(&graph_a),
            set_b.largest().numbers(&graph_b)
        );
    }
}
