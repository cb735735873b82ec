//! 结果打印器
//!
//! 分析结果的控制台输出

use crate::algorithm::{ClusteringCoefficient, ComponentSet};
use crate::graph::Graph;
use crate::loader::LoadStats;
use prettytable::{format, row, Table};

/// 加载统计表格
pub fn format_stats(graph: &Graph, stats: &LoadStats) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Property", "Value"]);
    table.add_row(row!["Vertex Count", graph.vertex_count().to_string()]);
    table.add_row(row!["Edge Count", graph.edge_count().to_string()]);
    table.add_row(row!["Load Time (ms)", stats.duration_ms.to_string()]);
    if let Some(line) = stats.truncated_at {
        table.add_row(row!["Truncated At Line", line.to_string()]);
    }
    table.to_string()
}

/// 最大分量的成员列表, 逗号分隔
pub fn format_largest_component(graph: &Graph, components: &ComponentSet) -> String {
    let numbers: Vec<String> = components
        .largest()
        .numbers(graph)
        .iter()
        .map(|n| n.to_string())
        .collect();
    format!("最大连通分量成员: {}", numbers.join(", "))
}

/// 聚类系数输出
///
/// 先给出整数对, 分母为 0 时明确标注未定义而不是输出 0
pub fn format_coefficient(coefficient: &ClusteringCoefficient) -> String {
    match coefficient.value() {
        Ok(value) => format!("全局聚类系数: {} = {}", coefficient, value),
        Err(_) => format!("全局聚类系数: {} (未定义)", coefficient),
    }
}
