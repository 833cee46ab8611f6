//! 传输流测试：状态机、终态唯一、拉取 / 推送两种消费方式。

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::StreamExt;

use crate::ExistError;
use crate::internal::transfer::structs::{TRANSFER_CHANNEL_CAPACITY, transfer_channel};
use crate::tests::RecordingListener;
use crate::transfer::{TransferEvent, TransferListeners, TransferState};

// ═══════════════════════════ 状态机 ═══════════════════════════

#[tokio::test]
async fn data_then_end_then_nothing() {
    let (sink, mut stream) = transfer_channel();
    assert_eq!(stream.state(), TransferState::Open);

    assert!(sink.data("a".to_string()).await);
    assert!(sink.data("b".to_string()).await);
    sink.end().await;

    assert!(matches!(stream.next_event().await, Some(TransferEvent::Data(c)) if c == "a"));
    assert!(matches!(stream.next_event().await, Some(TransferEvent::Data(c)) if c == "b"));
    assert!(matches!(stream.next_event().await, Some(TransferEvent::End)));
    assert!(stream.next_event().await.is_none());
    assert_eq!(stream.state(), TransferState::Ended);
}

#[tokio::test]
async fn error_is_terminal() {
    let (sink, mut stream) = transfer_channel();

    sink.data("partial".to_string()).await;
    sink.error(ExistError::Status { status: 500 }).await;

    assert!(matches!(stream.next_event().await, Some(TransferEvent::Data(_))));
    match stream.next_event().await {
        Some(TransferEvent::Error(e)) => assert_eq!(e.status_code(), Some(500)),
        other => panic!("预期为 Error，得到 {:?}", other),
    }
    assert!(stream.next_event().await.is_none());
    assert_eq!(stream.state(), TransferState::Errored);
}

#[tokio::test]
async fn empty_chunks_are_not_forwarded() {
    let (sink, stream) = transfer_channel();

    sink.data(String::new()).await;
    sink.data("x".to_string()).await;
    sink.end().await;

    let mut listener = RecordingListener::default();
    stream.listen(&mut listener).await;
    assert_eq!(listener.trace, vec!["data", "end"]);
}

#[tokio::test]
async fn dropped_sink_reports_interrupted_once() {
    let (sink, mut stream) = transfer_channel();

    sink.data("a".to_string()).await;
    drop(sink);

    assert!(matches!(stream.next_event().await, Some(TransferEvent::Data(_))));
    assert!(matches!(
        stream.next_event().await,
        Some(TransferEvent::Error(ExistError::Interrupted))
    ));
    assert!(stream.next_event().await.is_none());
}

#[tokio::test]
async fn sink_reports_dropped_consumer() {
    let (sink, stream) = transfer_channel();
    drop(stream);

    assert!(!sink.data("ignored".to_string()).await);
}

#[tokio::test]
async fn wait_terminal_sees_producer_state() {
    let (sink, mut stream) = transfer_channel();

    tokio::spawn(async move {
        sink.data("x".to_string()).await;
        sink.end().await;
    });

    assert_eq!(stream.wait_terminal().await, TransferState::Ended);
    // 终态之后排队的数据仍可读出
    assert_eq!(stream.collect_text().await.unwrap(), "x");
}

#[tokio::test]
async fn full_queue_suspends_producer_until_consumed() {
    let (sink, mut stream) = transfer_channel();

    for i in 0..TRANSFER_CHANNEL_CAPACITY {
        assert!(sink.data(i.to_string()).await);
    }
    let blocked = tokio::time::timeout(Duration::from_millis(50), sink.data("x".to_string())).await;
    assert!(blocked.is_err(), "队列已满时 data 应挂起");

    assert!(matches!(stream.next_event().await, Some(TransferEvent::Data(c)) if c == "0"));
    assert!(sink.data("x".to_string()).await);
    sink.end().await;

    assert_eq!(stream.state(), TransferState::Ended);
}

#[tokio::test]
async fn reject_errors_without_waiting() {
    let (sink, mut stream) = transfer_channel();

    sink.reject(ExistError::Interrupted);
    assert_eq!(stream.state(), TransferState::Errored);
    assert!(matches!(
        stream.next_event().await,
        Some(TransferEvent::Error(ExistError::Interrupted))
    ));
    assert!(stream.next_event().await.is_none());
}

// ═══════════════════════════ 消费方式 ═══════════════════════════

#[tokio::test]
async fn stream_impl_yields_results_then_none() {
    let (sink, stream) = transfer_channel();

    sink.data("<a/>".to_string()).await;
    sink.error(ExistError::Status { status: 404 }).await;

    let items: Vec<Result<String, ExistError>> = stream.collect().await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_ref().unwrap(), "<a/>");
    assert_eq!(items[1].as_ref().unwrap_err().status_code(), Some(404));
}

#[tokio::test]
async fn collect_text_concatenates_in_order() {
    let (sink, stream) = transfer_channel();

    for chunk in ["<r>", "1", "</r>"] {
        sink.data(chunk.to_string()).await;
    }
    sink.end().await;

    assert_eq!(stream.collect_text().await.unwrap(), "<r>1</r>");
}

#[tokio::test]
async fn listeners_container_dispatches_to_closures() {
    let (sink, stream) = transfer_channel();

    let received = Arc::new(Mutex::new(Vec::new()));
    let ended = Arc::new(Mutex::new(false));

    let data_log = Arc::clone(&received);
    let end_flag = Arc::clone(&ended);
    let mut listeners = TransferListeners::new()
        .with_on_data(move |chunk| data_log.lock().unwrap().push(chunk.to_string()))
        .with_on_end(move || {
            let end_flag = Arc::clone(&end_flag);
            async move {
                *end_flag.lock().unwrap() = true;
            }
        })
        .with_on_error(|e| panic!("不应出现错误: {}", e));
    assert_eq!(listeners.len(), 3);

    sink.data("1".to_string()).await;
    sink.data("2".to_string()).await;
    sink.end().await;

    stream.listen(&mut listeners).await;

    assert_eq!(*received.lock().unwrap(), vec!["1", "2"]);
    assert!(*ended.lock().unwrap());
}

#[tokio::test]
async fn listener_attached_after_events_still_sees_all() {
    let (sink, stream) = transfer_channel();

    // 先产生全部事件，再挂监听器
    sink.data("early".to_string()).await;
    sink.end().await;

    let mut listener = RecordingListener::default();
    stream.listen(&mut listener).await;

    assert_eq!(listener.text(), "early");
    assert_eq!(listener.terminal_count(), 1);
}
