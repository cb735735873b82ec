//! 通用类型定义

/// 外部顶点编号（来自输入文件, 不要求稠密或从 0 开始）
pub type VertexNumber = i64;

/// 一条原始输入边：两个外部顶点编号
pub type RawEdge = (VertexNumber, VertexNumber);
