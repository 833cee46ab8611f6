use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures_util::Stream;
use tokio::sync::{mpsc, watch};

use crate::internal::error::ExistError;
use crate::internal::transfer::traits::TransferListener;

use super::transfer_event::TransferEvent;
use super::transfer_state::TransferState;

/// 传输流（消费端），一次性、只进、不可重放。
///
/// 在发起请求之前就交给调用方，事件在被消费之前在有界队列里等待，所以先拿到流、
/// 后挂监听器也不会漏掉第一个事件；队列满时传输任务暂停，直到调用方继续读取。消费方式：
/// - 拉取：[`next_event`](Self::next_event)，或作为 [`Stream`] 使用（`Item = Result<String, ExistError>`）
/// - 推送：[`listen`](Self::listen) 把事件依次交给 [`TransferListener`]
/// - 一次性收集：[`collect_text`](Self::collect_text)
///
/// 无论哪种方式，终态事件（`End` / `Error`）恰好出现一次，之后不会再有任何事件。
#[derive(Debug)]
pub struct TransferStream {
    receiver: mpsc::Receiver<TransferEvent>,
    state: watch::Receiver<TransferState>,
    terminated: bool,
}

impl TransferStream {
    pub(crate) fn new(
        receiver: mpsc::Receiver<TransferEvent>,
        state: watch::Receiver<TransferState>,
    ) -> Self {
        Self {
            receiver,
            state,
            terminated: false,
        }
    }

    /// 生产端当前状态。终态事件入队后才会变为终态，此时队列中可能还有数据未读。
    pub fn state(&self) -> TransferState {
        *self.state.borrow()
    }

    /// 等待生产端到达终态，不消费任何事件
    pub async fn wait_terminal(&mut self) -> TransferState {
        let result = self.state.wait_for(|s| s.is_terminal()).await.map(|s| *s);
        // 生产端已释放时，Drop 中必然写入过终态
        result.unwrap_or_else(|_| *self.state.borrow())
    }

    /// 接收下一个事件；终态事件之后一律返回 `None`。
    pub async fn next_event(&mut self) -> Option<TransferEvent> {
        if self.terminated {
            return None;
        }
        let event = self.receiver.recv().await;
        self.observe(event)
    }

    fn observe(&mut self, event: Option<TransferEvent>) -> Option<TransferEvent> {
        match event {
            Some(event) => {
                if event.is_terminal() {
                    self.terminated = true;
                    self.receiver.close();
                }
                Some(event)
            }
            // 通道关闭却没见到终态，按中断处理，保证终态恰好一次
            None => {
                self.terminated = true;
                Some(TransferEvent::Error(ExistError::Interrupted))
            }
        }
    }

    /// 把全部事件按顺序交给监听器，直到终态。
    pub async fn listen<L>(mut self, listener: &mut L)
    where
        L: TransferListener + ?Sized,
    {
        while let Some(event) = self.next_event().await {
            match event {
                TransferEvent::Data(chunk) => listener.on_data(&chunk),
                TransferEvent::End => listener.on_end().await,
                TransferEvent::Error(e) => listener.on_error(&e).await,
            }
        }
    }

    /// 拼接全部数据；失败时丢弃已收到的部分并返回错误。
    pub async fn collect_text(mut self) -> Result<String, ExistError> {
        let mut text = String::new();
        while let Some(event) = self.next_event().await {
            match event {
                TransferEvent::Data(chunk) => text.push_str(&chunk),
                TransferEvent::End => return Ok(text),
                TransferEvent::Error(e) => return Err(e),
            }
        }
        Err(ExistError::Interrupted)
    }
}

impl Stream for TransferStream {
    type Item = Result<String, ExistError>;

    fn poll_next(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Self::Item>> {
        if self.terminated {
            return Poll::Ready(None);
        }
        let event = ready!(self.receiver.poll_recv(cx));

        Poll::Ready(match self.observe(event) {
            Some(TransferEvent::Data(chunk)) => Some(Ok(chunk)),
            Some(TransferEvent::Error(e)) => Some(Err(e)),
            Some(TransferEvent::End) | None => None,
        })
    }
}
