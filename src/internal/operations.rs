//! 操作实现：下载、过程调用、删除、上传。每次调用恰好一次请求，不重试。

pub mod functions;
pub mod structs;
