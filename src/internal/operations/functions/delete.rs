use reqwest::Client;
use tracing::debug;

use crate::internal::connection::enums::StatusPolicy;
use crate::internal::error::ExistError;
use crate::internal::request::structs::RequestDescriptor;

/// 删除资源，读完整个响应体后一次性返回。
///
/// 状态码是否校验由 `policy` 决定，默认原样放行。
pub(crate) async fn delete_resource(
    client: &Client,
    descriptor: RequestDescriptor,
    policy: StatusPolicy,
) -> Result<String, ExistError> {
    debug!(target: "existdb", path = %descriptor.path_and_query(), "发起删除请求");

    let response = descriptor.to_request(client).send().await?;
    let status = response.status();
    let body = response.text().await?;

    debug!(target: "existdb", status = status.as_u16(), "删除请求完成");

    policy.check(status)?;
    Ok(body)
}
