//! 客户端统一错误类型。

use std::path::PathBuf;

use thiserror::Error;

/// 发起请求之前就能确定的配置类错误，此时不会产生任何网络请求。
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("上传内存数据时必须指定目标文档名")]
    MissingTargetName,

    #[error("上传源不是普通文件: {0}")]
    UnsupportedSource(PathBuf),

    /// 路径中的 `#` 会被当作片段截断，固定查询参数随之丢失。
    #[error("资源路径不能包含 '#': {0}")]
    FragmentInPath(String),

    #[error("请求地址格式错误: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("认证信息格式错误，应为 user:pass")]
    InvalidCredentials,
}

#[derive(Debug, Error)]
pub enum ExistError {
    #[error("HTTP 请求失败: {0}")]
    Transport(#[from] reqwest::Error),

    /// 下载 / 过程调用收到非 200 响应；删除、上传仅在 `StatusPolicy::RequireSuccess` 下产生。
    #[error("服务器返回异常状态码 {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    #[error("待上传文件不存在: {0}")]
    FileNotFound(PathBuf),

    /// 打开上传文件失败，或上传途中读取文件出错。
    #[error("读取本地文件失败: {0}")]
    ReadFile(std::io::Error),

    /// 传输任务在到达终态前被中止（panic 或被 abort）。
    #[error("传输在完成前中断")]
    Interrupted,

    /// `get` / `call` / 查询流在 tokio 运行时之外被调用，请求未发出。
    #[error("未在 tokio 运行时内调用")]
    NoRuntime,

    #[error("查询结果解析失败: {0}")]
    Xml(String),
}

impl ExistError {
    /// 附带的 HTTP 状态码，调用方可直接据此分支而不必解析错误消息。
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ExistError::Status { status } => Some(*status),
            ExistError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ExistError::Configuration(_))
    }
}
