use serde::{Deserialize, Serialize};

use crate::internal::auth::structs::Credentials;
use crate::internal::connection::enums::{Scheme, StatusPolicy};

/// 默认上传分块大小：512KB
pub const DEFAULT_UPLOAD_CHUNK_SIZE: usize = 512 * 1024;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REST_BASE: &str = "/exist/rest";

/// 连接配置，连接创建后不可变。
///
/// 可直接构造，也可以通过 serde 从任意配置格式反序列化，缺省字段取默认值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    /// REST 接口根路径，与资源路径直接拼接，不做任何规范化
    pub rest: String,
    /// 为 `None` 时使用访客身份，见 [`ConnectionConfig::effective_credentials`]
    pub credentials: Option<Credentials>,
    /// 上传本地文件时每次读取的字节数
    pub upload_chunk_size: usize,
    pub delete_status_policy: StatusPolicy,
    pub store_status_policy: StatusPolicy,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::Http,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            rest: DEFAULT_REST_BASE.to_string(),
            credentials: None,
            upload_chunk_size: DEFAULT_UPLOAD_CHUNK_SIZE,
            delete_status_policy: StatusPolicy::PassThrough,
            store_status_policy: StatusPolicy::PassThrough,
        }
    }
}

impl ConnectionConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
            ..Default::default()
        }
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_rest(mut self, rest: &str) -> Self {
        self.rest = rest.to_string();
        self
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// 设置上传分块大小（字节），0 会被当作 1
    pub fn with_upload_chunk_size(mut self, chunk_size: usize) -> Self {
        self.upload_chunk_size = chunk_size.max(1);
        self
    }

    pub fn with_delete_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.delete_status_policy = policy;
        self
    }

    pub fn with_store_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.store_status_policy = policy;
        self
    }

    /// 实际使用的认证信息：未配置时才回落到 `guest:guest`
    pub fn effective_credentials(&self) -> Credentials {
        self.credentials.clone().unwrap_or_else(Credentials::guest)
    }

    /// `scheme://host:port`，不带尾部斜杠
    pub fn origin(&self) -> String {
        format!("{}://{}:{}", self.scheme.as_str(), self.host, self.port)
    }
}
