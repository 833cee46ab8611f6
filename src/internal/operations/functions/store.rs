use std::io::{self, ErrorKind};
use std::path::Path;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use futures_util::{Stream, stream};
use reqwest::{Body, Client, StatusCode};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, error};

use crate::internal::connection::enums::StatusPolicy;
use crate::internal::connection::structs::ConnectionConfig;
use crate::internal::error::{ConfigurationError, ExistError};
use crate::internal::operations::structs::UploadSource;
use crate::internal::request::enums::Operation;
use crate::internal::request::functions::build_request;
use crate::internal::request::structs::RequestDescriptor;

/// 上传途中本地读取出错时在此留下原始错误，请求失败后据此还原为 [`ExistError::ReadFile`]
type ReadErrorSlot = Arc<Mutex<Option<io::Error>>>;

/// 上传到 `collection`，返回服务器响应状态码。
///
/// 流程：确定文档名 -> 按上传源分派 -> 等待响应。以下情况不会发出任何请求：
/// - 内存数据且未指定文档名
/// - 文件不存在，或不是普通文件
pub(crate) async fn store_source(
    client: &Client,
    config: &ConnectionConfig,
    source: UploadSource,
    collection: &str,
    target_name: Option<&str>,
) -> Result<StatusCode, ExistError> {
    let name = source.resolve_target_name(target_name)?;
    let descriptor = build_request(
        Operation::Store {
            collection,
            name: &name,
        },
        config,
    )?;

    match source {
        UploadSource::File(path) => {
            let file = open_upload_file(&path).await?;
            send_reader(
                client,
                descriptor,
                file,
                config.upload_chunk_size,
                config.store_status_policy,
            )
            .await
        }
        UploadSource::Buffer(data) => {
            send_upload(
                client,
                descriptor,
                Body::from(data),
                config.store_status_policy,
                None,
            )
            .await
        }
    }
}

/// 以分块传输编码上传 `reader` 的全部内容。
///
/// 读取中途出错时请求被中止，返回 [`ExistError::ReadFile`] 而不是传输错误。
pub(crate) async fn send_reader<R>(
    client: &Client,
    descriptor: RequestDescriptor,
    reader: R,
    chunk_size: usize,
    policy: StatusPolicy,
) -> Result<StatusCode, ExistError>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let slot = ReadErrorSlot::default();
    let body = Body::wrap_stream(read_chunks(reader, chunk_size, Arc::clone(&slot)));
    send_upload(client, descriptor, body, policy, Some(slot)).await
}

async fn send_upload(
    client: &Client,
    descriptor: RequestDescriptor,
    body: Body,
    policy: StatusPolicy,
    read_error: Option<ReadErrorSlot>,
) -> Result<StatusCode, ExistError> {
    debug!(target: "existdb", path = %descriptor.path_and_query(), "发起上传请求");

    let sent = descriptor.to_request(client).body(body).send().await;
    check_read_error(read_error.as_ref())?;
    let response = sent?;
    let status = response.status();
    // 读完响应体再返回，连接随之释放
    let drained = response.bytes().await;
    check_read_error(read_error.as_ref())?;
    drained?;

    debug!(target: "existdb", status = status.as_u16(), "上传请求完成");

    policy.check(status)
}

fn check_read_error(slot: Option<&ReadErrorSlot>) -> Result<(), ExistError> {
    let taken = slot
        .and_then(|slot| slot.lock().ok())
        .and_then(|mut guard| guard.take());
    match taken {
        Some(e) => {
            error!(target: "existdb", "上传途中读取本地数据失败: {}", e);
            Err(ExistError::ReadFile(e))
        }
        None => Ok(()),
    }
}

async fn open_upload_file(path: &Path) -> Result<File, ExistError> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ExistError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(ExistError::ReadFile(e)),
    };

    if !metadata.is_file() {
        return Err(ConfigurationError::UnsupportedSource(path.to_path_buf()).into());
    }

    File::open(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ExistError::FileNotFound(path.to_path_buf()),
        _ => ExistError::ReadFile(e),
    })
}

/// 按块读取；读到末尾或出错时读取端随状态一起释放。
///
/// 出错时原始错误存入 `slot`，交给 HTTP 层的只是一份同类副本。
fn read_chunks<R>(
    reader: R,
    chunk_size: usize,
    slot: ReadErrorSlot,
) -> impl Stream<Item = Result<Bytes, io::Error>> + Send + 'static
where
    R: AsyncRead + Unpin + Send + 'static,
{
    stream::unfold(Some(reader), move |state| {
        let slot = Arc::clone(&slot);
        async move {
            let Some(mut reader) = state else {
                return None;
            };
            let mut buf = vec![0u8; chunk_size.max(1)];

            match reader.read(&mut buf).await {
                Ok(0) => None,
                Ok(n) => {
                    buf.truncate(n);
                    Some((Ok(Bytes::from(buf)), Some(reader)))
                }
                Err(e) => {
                    let relayed = io::Error::new(e.kind(), e.to_string());
                    if let Ok(mut guard) = slot.lock() {
                        *guard = Some(e);
                    }
                    Some((Err(relayed), None))
                }
            }
        }
    })
}
