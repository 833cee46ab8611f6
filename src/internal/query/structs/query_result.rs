use quick_xml::Reader;
use quick_xml::events::Event;

use crate::internal::error::ExistError;

/// 查询结果；未包裹（`_wrap=no`）时统计字段均为 `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// 命中总数
    pub hits: Option<u64>,
    pub start: Option<u64>,
    /// 本次返回的条数
    pub count: Option<u64>,
    /// 服务端缓存结果集的会话号，开启 `_cache` 时才有
    pub session: Option<String>,
    /// 原始响应体
    pub body: String,
}

impl QueryResult {
    /// 只读取第一个元素；它是 `exist:result` 时取出统计属性
    pub fn parse(body: String) -> Result<Self, ExistError> {
        let mut hits = None;
        let mut start = None;
        let mut count = None;
        let mut session = None;

        {
            let mut reader = Reader::from_str(&body);
            loop {
                match reader.read_event().map_err(|e| ExistError::Xml(e.to_string()))? {
                    Event::Start(e) | Event::Empty(e) => {
                        if e.local_name().as_ref() == b"result" {
                            for attr in e.attributes() {
                                let attr = attr.map_err(|e| ExistError::Xml(e.to_string()))?;
                                let value = String::from_utf8_lossy(&attr.value).into_owned();
                                match attr.key.local_name().as_ref() {
                                    b"hits" => hits = value.parse().ok(),
                                    b"start" => start = value.parse().ok(),
                                    b"count" => count = value.parse().ok(),
                                    b"session" => session = Some(value),
                                    _ => {}
                                }
                            }
                        }
                        break;
                    }
                    Event::Eof => break,
                    _ => {}
                }
            }
        }

        Ok(Self {
            hits,
            start,
            count,
            session,
            body,
        })
    }
}
