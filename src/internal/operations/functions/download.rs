//! 下载 / 过程调用 / 查询共用的流式转发。

use futures_util::StreamExt;
use reqwest::{Client, StatusCode};
use tokio::runtime::Handle;
use tracing::{debug, error, warn};

use crate::internal::error::ExistError;
use crate::internal::request::structs::RequestDescriptor;
use crate::internal::transfer::structs::{
    TransferSink, TransferStream, Utf8ChunkDecoder, transfer_channel,
};

/// 先创建并返回传输流，再在后台任务里发起请求并转发响应体。
///
/// 以下情况不发请求，直接在流上给出错误：
/// - 请求描述构造失败
/// - 当前线程不在 tokio 运行时内（[`ExistError::NoRuntime`]）
pub(crate) fn spawn_download(
    client: &Client,
    descriptor: Result<RequestDescriptor, ExistError>,
) -> TransferStream {
    let (sink, stream) = transfer_channel();

    let descriptor = match descriptor {
        Ok(descriptor) => descriptor,
        Err(e) => {
            sink.reject(e);
            return stream;
        }
    };

    match Handle::try_current() {
        Ok(handle) => {
            handle.spawn(relay_response(client.clone(), descriptor, sink));
        }
        Err(_) => {
            error!(target: "existdb", "未在 tokio 运行时内调用，请求未发出");
            sink.reject(ExistError::NoRuntime);
        }
    }

    stream
}

async fn relay_response(
    client: Client,
    descriptor: RequestDescriptor,
    sink: TransferSink,
) {
    debug!(
        target: "existdb",
        method = %descriptor.method,
        path = %descriptor.path_and_query(),
        "发起流式请求"
    );

    let response = match descriptor.to_request(&client).send().await {
        Ok(response) => response,
        Err(e) => {
            error!(target: "existdb", "请求失败: {}", e);
            sink.error(e.into()).await;
            return;
        }
    };

    let status = response.status();
    let mut body = response.bytes_stream();
    let mut decoder = Utf8ChunkDecoder::default();

    while let Some(chunk) = body.next().await {
        match chunk {
            Ok(bytes) => {
                if !sink.data(decoder.decode(&bytes)).await {
                    warn!(target: "existdb", "传输流已被丢弃，停止接收响应体");
                    return;
                }
            }
            Err(e) => {
                error!(target: "existdb", "读取响应体失败: {}", e);
                sink.error(e.into()).await;
                return;
            }
        }
    }
    sink.data(decoder.finish()).await;

    if status == StatusCode::OK {
        debug!(target: "existdb", "流式请求完成");
        sink.end().await;
    } else {
        debug!(target: "existdb", status = status.as_u16(), "流式请求返回异常状态码");
        sink.error(ExistError::Status { status: status.as_u16() })
            .await;
    }
}
