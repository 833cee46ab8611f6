use tokio::sync::{mpsc, watch};
use tracing::warn;

use crate::internal::error::ExistError;

use super::transfer_event::TransferEvent;
use super::transfer_state::TransferState;

/// 传输流生产端，仅库内部使用。
///
/// 队列有界：消费端不读取时，`data` 会一直挂起，响应体不会在内存中堆积。
/// `end` / `error` 会消耗自身，因此同一个生产端最多发出一次终态事件；
/// 未到终态就被丢弃（任务 panic 或被 abort）时补发 [`ExistError::Interrupted`]。
#[derive(Debug)]
pub(crate) struct TransferSink {
    sender: mpsc::Sender<TransferEvent>,
    state: watch::Sender<TransferState>,
}

impl TransferSink {
    pub(crate) fn new(
        sender: mpsc::Sender<TransferEvent>,
        state: watch::Sender<TransferState>,
    ) -> Self {
        Self { sender, state }
    }

    pub(crate) fn is_open(&self) -> bool {
        !self.state.borrow().is_terminal()
    }

    /// 转发一段数据，队列满时等待消费；返回 `false` 表示消费端已经不在了，可以停止传输。
    pub(crate) async fn data(&self, chunk: String) -> bool {
        if !self.is_open() {
            return false;
        }
        if chunk.is_empty() {
            return true;
        }
        self.sender.send(TransferEvent::Data(chunk)).await.is_ok()
    }

    pub(crate) async fn end(self) {
        self.finish(TransferState::Ended, TransferEvent::End).await;
    }

    pub(crate) async fn error(self, error: ExistError) {
        self.finish(TransferState::Errored, TransferEvent::Error(error))
            .await;
    }

    /// 尚未产生任何事件时立即以错误结束，不需要等待（此时队列必然为空）
    pub(crate) fn reject(self, error: ExistError) {
        if !self.is_open() {
            return;
        }
        let _ = self.sender.try_send(TransferEvent::Error(error));
        self.state.send_replace(TransferState::Errored);
    }

    async fn finish(&self, state: TransferState, event: TransferEvent) {
        if !self.is_open() {
            return;
        }
        let _ = self.sender.send(event).await;
        self.state.send_replace(state);
    }
}

impl Drop for TransferSink {
    fn drop(&mut self) {
        if self.is_open() {
            if !self.sender.is_closed() {
                warn!(target: "existdb", "传输任务未到终态即被丢弃");
            }
            // 队列已满时发送失败，消费端读到通道关闭时同样按中断处理
            let _ = self
                .sender
                .try_send(TransferEvent::Error(ExistError::Interrupted));
            self.state.send_replace(TransferState::Errored);
        }
    }
}
