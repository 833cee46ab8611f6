use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::internal::connection::structs::Connection;
use crate::internal::error::ExistError;
use crate::internal::operations::functions::spawn_download;
use crate::internal::request::enums::Operation;
use crate::internal::request::functions::build_request;
use crate::internal::request::structs::RequestDescriptor;
use crate::internal::transfer::structs::TransferStream;

use super::query_options::QueryOptions;
use super::query_result::QueryResult;

/// 查询参数值中保留不编码的字符
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// 由 [`Connection::query`] 创建的查询句柄
#[derive(Debug, Clone)]
pub struct Query {
    connection: Connection,
    text: String,
    options: QueryOptions,
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

impl Query {
    pub(crate) fn new(connection: Connection, text: &str, options: QueryOptions) -> Self {
        Self {
            connection,
            text: text.to_string(),
            options,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// `?_query=...&_start=...` 形式的查询串，参数值已编码
    pub fn query_string(&self) -> String {
        let options = &self.options;
        let mut query = format!(
            "?_query={}&_start={}&_howmany={}&_wrap={}&_indent={}",
            utf8_percent_encode(&self.text, QUERY_VALUE),
            options.start,
            options.how_many,
            yes_no(options.wrap),
            yes_no(options.indent),
        );

        if options.cache {
            query.push_str("&_cache=yes");
        }
        if let Some(session) = &options.session {
            query.push_str("&_session=");
            query.extend(utf8_percent_encode(session, QUERY_VALUE));
        }

        query
    }

    pub fn request(&self) -> Result<RequestDescriptor, ExistError> {
        let query = self.query_string();
        build_request(
            Operation::Query {
                collection: &self.options.collection,
                query: &query,
            },
            self.connection.config(),
        )
    }

    /// 以流的方式取回结果，契约与 [`Connection::get`] 相同
    pub fn stream(&self) -> TransferStream {
        spawn_download(self.connection.client(), self.request())
    }

    /// 取回完整结果并解析 `exist:result` 上的统计信息
    pub async fn execute(&self) -> Result<QueryResult, ExistError> {
        let body = self.stream().collect_text().await?;
        QueryResult::parse(body)
    }
}
