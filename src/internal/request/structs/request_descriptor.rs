use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use url::Url;

/// 一次 HTTP 请求的完整描述，由 [`build_request`](crate::internal::request::functions::build_request) 生成。
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: Url,
    pub(crate) authorization: HeaderValue,
}

impl RequestDescriptor {
    /// 交给 reqwest 客户端，得到可发送的请求
    pub fn to_request(&self, client: &Client) -> RequestBuilder {
        client
            .request(self.method.clone(), self.url.clone())
            .header(AUTHORIZATION, self.authorization.clone())
    }

    /// URL 中的路径与查询部分，便于日志与断言
    pub fn path_and_query(&self) -> String {
        match self.url.query() {
            Some(query) => format!("{}?{}", self.url.path(), query),
            None => self.url.path().to_string(),
        }
    }
}
