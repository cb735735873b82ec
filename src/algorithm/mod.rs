//! 图算法模块
//!
//! 包含连通分量发现和聚类系数计算

mod clustering;
mod component;

pub use clustering::{global_clustering, ClusteringCoefficient};
pub use component::{find_components, Component, ComponentSet};
