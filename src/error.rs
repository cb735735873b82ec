//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无法打开输入文件: {0}")]
    InputUnreadable(String),

    #[error("图为空, 不存在最大连通分量")]
    EmptyGraph,

    #[error("分母为零, 聚类系数未定义")]
    UndefinedCoefficient,

    #[error("图已完成一次遍历, 不支持重复的分量发现")]
    AlreadyTraversed,

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
