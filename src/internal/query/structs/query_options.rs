use serde::{Deserialize, Serialize};

/// 查询参数，对应 REST 接口的 `_start` / `_howmany` / `_wrap` 等
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// 查询上下文所在的集合
    pub collection: String,
    /// 返回结果的起始序号（从 1 开始）
    pub start: u32,
    /// 最多返回的条数
    pub how_many: u32,
    /// 是否用 `exist:result` 包裹结果
    pub wrap: bool,
    pub indent: bool,
    /// 是否让服务端缓存结果集，配合 `session` 分页
    pub cache: bool,
    pub session: Option<String>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            collection: "/db".to_string(),
            start: 1,
            how_many: 10,
            wrap: true,
            indent: true,
            cache: false,
            session: None,
        }
    }
}

impl QueryOptions {
    pub fn with_collection(mut self, collection: &str) -> Self {
        self.collection = collection.to_string();
        self
    }

    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    pub fn with_how_many(mut self, how_many: u32) -> Self {
        self.how_many = how_many;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_session(mut self, session: &str) -> Self {
        self.session = Some(session.to_string());
        self
    }
}
