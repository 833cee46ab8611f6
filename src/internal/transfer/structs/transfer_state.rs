/// 传输流状态：`Open -> {Ended | Errored}`，终态之后不再变化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    Open,
    Ended,
    Errored,
}

impl TransferState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransferState::Open)
    }
}
