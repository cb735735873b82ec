//! 顶点定义
//!
//! 顶点存放在图的 arena 中, 邻接表保存稠密下标而非引用

use crate::types::VertexNumber;
use serde::{Deserialize, Serialize};

/// 顶点 ID（arena 中的稠密下标, 按首次出现顺序分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl VertexId {
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for VertexId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

/// 遍历状态
///
/// 只由分量发现改写, 单次运行设计, 不会重置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    /// 尚未发现
    Unvisited,
    /// 已入队, 等待处理
    Queued,
    /// 处理完成
    Done,
}

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex {
    /// 稠密下标
    id: VertexId,
    /// 外部顶点编号
    number: VertexNumber,
    /// 遍历状态
    state: VisitState,
    /// 邻接表（按读入顺序, 重复边原样保留）
    neighbors: Vec<VertexId>,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(id: VertexId, number: VertexNumber) -> Self {
        Self {
            id,
            number,
            state: VisitState::Unvisited,
            neighbors: Vec::new(),
        }
    }

    /// 获取稠密下标
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取外部顶点编号
    pub fn number(&self) -> VertexNumber {
        self.number
    }

    /// 获取遍历状态
    pub fn state(&self) -> VisitState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: VisitState) {
        self.state = state;
    }

    /// 获取邻接表
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    pub(crate) fn push_neighbor(&mut self, neighbor: VertexId) {
        self.neighbors.push(neighbor);
    }

    /// 度数（邻接表条目数, 多重边重复计数）
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}
