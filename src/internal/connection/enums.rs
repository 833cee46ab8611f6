use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::internal::error::ExistError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// 删除、上传对响应状态码的处理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// 不校验状态码，原样交给调用方（默认）
    #[default]
    PassThrough,
    /// 非 2xx 视为失败，返回 [`ExistError::Status`]
    RequireSuccess,
}

impl StatusPolicy {
    pub fn check(&self, status: StatusCode) -> Result<StatusCode, ExistError> {
        match self {
            StatusPolicy::RequireSuccess if !status.is_success() => {
                Err(ExistError::Status { status: status.as_u16() })
            }
            _ => Ok(status),
        }
    }
}
