use url::Url;

use crate::internal::connection::structs::ConnectionConfig;
use crate::internal::error::{ConfigurationError, ExistError};
use crate::internal::request::enums::Operation;
use crate::internal::request::structs::RequestDescriptor;

/// 根据操作与连接配置构造请求描述
///
/// - 路径只做拼接，非法字符由调用方负责
/// - 拼接结果按 URL 规则规范化：`.` / `..` 段会被折叠（`/db/a/../b.xml` 实际请求 `/db/b.xml`）
/// - 路径含 `#` 时返回 [`ConfigurationError::FragmentInPath`]，否则其后内容连同固定查询参数都会被截掉
/// - 认证信息未配置时使用访客身份
pub fn build_request(
    operation: Operation<'_>,
    config: &ConnectionConfig,
) -> Result<RequestDescriptor, ExistError> {
    let path = operation.resource_path(&config.rest);
    if path.contains('#') {
        return Err(ConfigurationError::FragmentInPath(path).into());
    }

    let url = Url::parse(&format!("{}{}", config.origin(), path))
        .map_err(ConfigurationError::InvalidUrl)?;

    let authorization = config.effective_credentials().authorization_header()?;

    Ok(RequestDescriptor {
        method: operation.method(),
        url,
        authorization,
    })
}
