use std::sync::Arc;

use reqwest::{Client, StatusCode};

use crate::internal::connection::structs::ConnectionConfig;
use crate::internal::error::ExistError;
use crate::internal::operations::functions::{delete_resource, spawn_download, store_source};
use crate::internal::operations::structs::UploadSource;
use crate::internal::query::structs::{Query, QueryOptions};
use crate::internal::request::enums::Operation;
use crate::internal::request::functions::build_request;
use crate::internal::transfer::structs::TransferStream;

/// 到 eXist-db REST 接口的连接
///
/// 配置在创建后只读，克隆代价很低，可在多个任务间共享。
/// 每次操作恰好发出一次请求，没有重试、超时与取消。
#[derive(Debug, Clone)]
pub struct Connection {
    config: Arc<ConnectionConfig>,
    client: Client, // 内部是Arc，不需要特殊处理
}

impl Connection {
    pub fn new(config: ConnectionConfig) -> Result<Self, ExistError> {
        let client = Client::builder().http1_only().build()?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// 构造一个查询，不发起任何请求
    pub fn query(&self, xquery: &str, options: QueryOptions) -> Query {
        Query::new(self.clone(), xquery, options)
    }

    /// 下载文档（路径相对 REST 根路径）
    ///
    /// 传输流在请求发出前就返回；只有状态码 200 以 `End` 结束，其它状态码以
    /// [`ExistError::Status`] 结束。在 tokio 运行时之外调用时不发请求，流以
    /// [`ExistError::NoRuntime`] 结束。
    pub fn get(&self, path: &str) -> TransferStream {
        spawn_download(&self.client, build_request(Operation::Get(path), &self.config))
    }

    /// 调用服务端存储过程，`path` 为绝对路径，不拼接 REST 根路径；其余与 [`get`](Self::get) 相同
    pub fn call(&self, path: &str) -> TransferStream {
        spawn_download(&self.client, build_request(Operation::Call(path), &self.config))
    }

    /// 删除资源，返回完整响应体
    pub async fn del(&self, path: &str) -> Result<String, ExistError> {
        let descriptor = build_request(Operation::Delete(path), &self.config)?;
        delete_resource(&self.client, descriptor, self.config.delete_status_policy).await
    }

    /// 上传本地文件或内存数据到 `collection`，返回响应状态码
    ///
    /// `target_name` 为空时取文件名；内存数据必须指定。
    pub async fn store(
        &self,
        source: impl Into<UploadSource>,
        collection: &str,
        target_name: Option<&str>,
    ) -> Result<StatusCode, ExistError> {
        store_source(
            &self.client,
            &self.config,
            source.into(),
            collection,
            target_name,
        )
        .await
    }
}
