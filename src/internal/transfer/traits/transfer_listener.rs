//! 传输流监听接口。

use async_trait::async_trait;

use crate::internal::error::ExistError;

/// 传输流监听器：按到达顺序接收数据块，最后恰好收到一次 `on_end` 或 `on_error`。
///
/// 使用方式二选一（可混用）：
/// - **单事件**：用 [`TransferListeners`](crate::transfer::TransferListeners) 的 `with_on_data` / `with_on_end` / `with_on_error` 传入闭包；
/// - **完整监听器**：实现本 trait，交给 [`TransferStream::listen`](crate::transfer::TransferStream::listen)。
#[async_trait]
pub trait TransferListener: Send {
    /// 每收到一段已解码的文本时调用。
    fn on_data(&mut self, _chunk: &str) {}

    /// 传输正常结束，在最后一次 `on_data` 之后调用。
    async fn on_end(&mut self) {}

    /// 传输失败（网络错误或非 200 状态码），之后不会再有任何事件。
    async fn on_error(&mut self, _error: &ExistError) {}
}
