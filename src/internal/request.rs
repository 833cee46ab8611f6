//! 请求构造：把「操作类型 + 路径 + 连接配置」映射为一次 HTTP 请求的描述，纯函数，不发起任何 I/O。

pub mod enums;
pub mod functions;
pub mod structs;
