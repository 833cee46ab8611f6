//! 连接领域模块：连接配置与连接本体，所有操作都从 [`Connection`](structs::Connection) 发起。

pub mod enums;
pub mod structs;
