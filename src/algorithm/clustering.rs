//! 全局聚类系数
//!
//! 在给定顶点集合上做三角形计数, 输出分子/分母整数对

use crate::algorithm::component::Component;
use crate::error::{Error, Result};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// 聚类系数
///
/// 以非负整数对表示; 分母为 0 时比值未定义, 不做隐式除法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusteringCoefficient {
    /// 分子: 闭合三元组数量（三角形数的 2 倍）
    pub numerator: u64,
    /// 分母: 度数 >= 2 的顶点各贡献 degree * (degree - 1)
    pub denominator: u64,
}

impl ClusteringCoefficient {
    /// 比值是否有定义
    pub fn is_defined(&self) -> bool {
        self.denominator > 0
    }

    /// 浮点比值
    ///
    /// 分母为 0 时返回 UndefinedCoefficient, 不静默产出 0 或 NaN
    pub fn value(&self) -> Result<f64> {
        if self.denominator == 0 {
            return Err(Error::UndefinedCoefficient);
        }
        Ok(self.numerator as f64 / self.denominator as f64)
    }
}

impl fmt::Display for ClusteringCoefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// 计算顶点集合上的全局聚类系数
///
/// 分母: 每个度数 >= 2 的顶点贡献 degree * (degree - 1) 个有序开三元组。
/// 分子: 逐顶点扫描邻居对, 内层下标严格大于外层, 每个无序邻居对只测一次;
/// 在 n1 的邻接表中线性查找 n2, 命中即一个三角形。每个三角形在它闭合的
/// 每个顶点处各发现一次, 按有序三元组口径分子取三角形数的 2 倍。
/// 只读访问, 不改动邻接表
pub fn global_clustering(graph: &Graph, component: &Component) -> ClusteringCoefficient {
    let mut denominator: u64 = 0;
    for &id in component.vertex_ids() {
        let degree = graph.degree(id) as u64;
        if degree >= 2 {
            denominator += degree * (degree - 1);
        }
    }

    let mut triangle_count: u64 = 0;
    for &id in component.vertex_ids() {
        let neighbors = graph.vertex(id).neighbors();
        for (i, &n1) in neighbors.iter().enumerate() {
            for &n2 in &neighbors[i + 1..] {
                if graph.vertex(n1).neighbors().contains(&n2) {
                    triangle_count += 1;
                }
            }
        }
    }

    let coefficient = ClusteringCoefficient {
        numerator: 2 * triangle_count,
        denominator,
    };
    debug!("聚类系数: {}", coefficient);
    coefficient
}
