//! 边表加载模块
//!
//! 从文本文件读取空白分隔的整数对构建无向图

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::VertexNumber;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// 加载统计
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoadStats {
    /// 去重后的顶点数
    pub vertices_loaded: usize,
    /// 插入的边数
    pub edges_loaded: usize,
    /// 首个无法解析的 token 所在行号（1 起）, None 表示完整读到文件尾
    pub truncated_at: Option<usize>,
    /// 加载耗时
    pub duration_ms: u64,
}

/// 从文件加载边表
///
/// 文件无表头无元数据, 读到文件尾或首个非整数 token 为止
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<(Graph, LoadStats)> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::InputUnreadable(format!("{}: {}", path.display(), e)))?;

    let (graph, stats) = load_reader(BufReader::new(file))?;
    info!(
        "图加载完成: {} 个顶点, {} 条边",
        stats.vertices_loaded, stats.edges_loaded
    );
    Ok((graph, stats))
}

/// 从任意 BufRead 加载边表
///
/// 解析在首个非整数 token 处停止, 之前的内容全部保留（截断语义,
/// 既不跳过坏行继续, 也不整体报错）; 文件尾落单的整数被丢弃
pub fn load_reader<R: BufRead>(reader: R) -> Result<(Graph, LoadStats)> {
    let start = std::time::Instant::now();
    let mut graph = Graph::new();
    let mut stats = LoadStats::default();
    let mut pending: Option<VertexNumber> = None;

    'read: for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = match token.parse::<VertexNumber>() {
                Ok(v) => v,
                Err(_) => {
                    warn!(
                        "第 {} 行 token {:?} 无法解析为整数, 停止读取",
                        line_index + 1,
                        token
                    );
                    stats.truncated_at = Some(line_index + 1);
                    break 'read;
                }
            };
            match pending.take() {
                Some(a) => {
                    graph.insert_pair(a, value);
                    stats.edges_loaded += 1;
                }
                None => pending = Some(value),
            }
        }
    }

    stats.vertices_loaded = graph.vertex_count();
    stats.duration_ms = start.elapsed().as_millis() as u64;
    Ok((graph, stats))
}
