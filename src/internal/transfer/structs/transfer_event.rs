use crate::internal::error::ExistError;

/// 传输流上的单个事件
#[derive(Debug)]
pub enum TransferEvent {
    /// 一段已按 UTF-8 解码的响应体
    Data(String),
    /// 正常结束（终态）
    End,
    /// 失败（终态）
    Error(ExistError),
}

impl TransferEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransferEvent::Data(_))
    }
}
