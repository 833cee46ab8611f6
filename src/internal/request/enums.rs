use reqwest::Method;

/// 下载时固定附加的参数：关闭服务端 XSLT、开启缩进
pub const GET_QUERY_SUFFIX: &str = "?_xsl=no&_indent=yes";

/// 一次请求对应的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    /// 下载：相对 REST 根路径，附加 [`GET_QUERY_SUFFIX`]
    Get(&'a str),
    /// 删除：相对 REST 根路径，不附加任何参数
    Delete(&'a str),
    /// 调用服务端存储过程：调用方给出的绝对路径，不拼接 REST 根路径
    Call(&'a str),
    /// 上传：`rest + collection + "/" + name`
    Store { collection: &'a str, name: &'a str },
    /// 查询：`rest + collection + query`，`query` 已编码且以 `?` 开头
    Query { collection: &'a str, query: &'a str },
}

impl Operation<'_> {
    pub fn method(&self) -> Method {
        match self {
            Operation::Get(_) | Operation::Call(_) | Operation::Query { .. } => Method::GET,
            Operation::Delete(_) => Method::DELETE,
            Operation::Store { .. } => Method::PUT,
        }
    }

    /// 目标资源路径，只做字符串拼接
    pub fn resource_path(&self, rest: &str) -> String {
        match self {
            Operation::Get(path) => format!("{rest}{path}{GET_QUERY_SUFFIX}"),
            Operation::Delete(path) => format!("{rest}{path}"),
            Operation::Call(path) => path.to_string(),
            Operation::Store { collection, name } => format!("{rest}{collection}/{name}"),
            Operation::Query { collection, query } => format!("{rest}{collection}{query}"),
        }
    }
}
