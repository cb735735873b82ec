//! 图核心模块
//!
//! 定义顶点、注册表和图的核心数据结构

mod graph;
mod registry;
mod vertex;

pub use graph::Graph;
pub use registry::VertexRegistry;
pub use vertex::{Vertex, VertexId, VisitState};
