//! 查询句柄：只负责把查询文本与选项拼成 REST 请求，查询语言本身不在本库范围内。

pub mod structs;
