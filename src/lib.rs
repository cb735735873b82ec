//! GraphCluster - 无向图连通分量与聚类系数分析
//!
//! 针对边表输入的图分析库, 支持:
//! - 外部编号去重的稠密 arena 图存储
//! - 多源 BFS 连通分量划分与最大分量选取
//! - 基于三角形计数的全局聚类系数（整数对输出, 不做隐式除法）
//! - 截断语义的边表文件加载

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod loader;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    find_components, global_clustering, ClusteringCoefficient, Component, ComponentSet,
};
pub use error::{Error, Result};
pub use graph::{Graph, Vertex, VertexId, VertexRegistry, VisitState};
pub use loader::{load_file, load_reader, LoadStats};
pub use types::{RawEdge, VertexNumber};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
