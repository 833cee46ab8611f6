pub mod listener_adapters;
pub mod transfer_event;
pub mod transfer_listeners;
pub mod transfer_sink;
pub mod transfer_state;
pub mod transfer_stream;
pub mod utf8_decoder;

pub use transfer_event::TransferEvent;
pub use transfer_listeners::TransferListeners;
pub(crate) use transfer_sink::TransferSink;
pub use transfer_state::TransferState;
pub use transfer_stream::TransferStream;
pub(crate) use utf8_decoder::Utf8ChunkDecoder;

use tokio::sync::{mpsc, watch};

/// 排队等待消费的事件上限；队列满时传输任务暂停读取响应体，直到调用方取走事件
pub const TRANSFER_CHANNEL_CAPACITY: usize = 16;

/// 创建一对相连的生产端与消费端
pub(crate) fn transfer_channel() -> (TransferSink, TransferStream) {
    let (sender, receiver) = mpsc::channel(TRANSFER_CHANNEL_CAPACITY);
    let (state_sender, state_receiver) = watch::channel(TransferState::Open);

    (
        TransferSink::new(sender, state_sender),
        TransferStream::new(receiver, state_receiver),
    )
}
