//! 命令行辅助模块
//!
//! 结果渲染, 供二进制入口使用

pub mod printer;
