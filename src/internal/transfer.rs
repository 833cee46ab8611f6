//! 传输流领域模块：下载 / 过程调用返回给调用方的单向、一次性推送流。
//!
//! 生产端 [`TransferSink`](structs::TransferSink) 由传输任务持有，消费端
//! [`TransferStream`](structs::TransferStream) 在任何网络 I/O 之前就交给调用方。

pub mod structs;
pub mod traits;
