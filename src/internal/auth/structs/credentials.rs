use core::fmt;

use base64::Engine;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::internal::error::{ConfigurationError, ExistError};

/// 未配置认证信息时使用的访客账号
pub const GUEST_USERNAME: &str = "guest";
pub const GUEST_PASSWORD: &str = "guest";

/// 认证信息
///
/// - 以 HTTP Basic 方式附加到每一次请求上
/// - 默认 Eq 比较的是 `user:pass` 的摘要，不直接比较明文
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub(crate) password: String, // 对外导出时，不允许直接读取
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// 访客身份 `guest:guest`
    pub fn guest() -> Self {
        Self::new(GUEST_USERNAME, GUEST_PASSWORD)
    }

    /// 解析 `user:pass` 形式的认证串，密码中允许再出现 `:`
    pub fn parse(auth: &str) -> Result<Self, ExistError> {
        let (username, password) = auth
            .split_once(':')
            .ok_or(ConfigurationError::InvalidCredentials)?;

        if username.is_empty() {
            return Err(ConfigurationError::InvalidCredentials.into());
        }

        Ok(Self::new(username, password))
    }

    /// 生成 `Authorization: Basic ...` 请求头的值
    pub fn authorization_header(&self) -> Result<HeaderValue, ExistError> {
        let token = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", self.username, self.password));

        let mut value = HeaderValue::from_str(&format!("Basic {}", token))
            .map_err(|_| ConfigurationError::InvalidCredentials)?;
        value.set_sensitive(true);

        Ok(value)
    }

    fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.username.as_bytes());
        hasher.update(b":");
        hasher.update(self.password.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint() == other.fingerprint()
    }
}

impl Eq for Credentials {}

/// 防止debug泄漏密码
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<hidden>")
            .finish()
    }
}
