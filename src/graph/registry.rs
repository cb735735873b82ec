//! 顶点注册表
//!
//! 把外部顶点编号去重映射为 arena 中的稠密下标, 仅在图构建期间使用

use crate::graph::vertex::VertexId;
use crate::types::VertexNumber;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// 顶点注册表
#[derive(Debug, Default)]
pub struct VertexRegistry {
    /// 外部编号到稠密下标的映射
    number_to_id: HashMap<VertexNumber, VertexId>,
}

impl VertexRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self {
            number_to_id: HashMap::new(),
        }
    }

    /// 查找或分配稠密下标
    ///
    /// 返回 (下标, 是否新建)。每个外部编号只分配一次下标;
    /// 新建时调用方必须向 arena 追加对应的顶点记录
    pub fn get_or_create(&mut self, number: VertexNumber) -> (VertexId, bool) {
        let next = VertexId::new(self.number_to_id.len());
        match self.number_to_id.entry(number) {
            Entry::Occupied(entry) => (*entry.get(), false),
            Entry::Vacant(entry) => {
                entry.insert(next);
                (next, true)
            }
        }
    }

    /// 查找已注册的下标
    pub fn get(&self, number: VertexNumber) -> Option<VertexId> {
        self.number_to_id.get(&number).copied()
    }

    /// 已注册的顶点数量
    pub fn len(&self) -> usize {
        self.number_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.number_to_id.is_empty()
    }
}
