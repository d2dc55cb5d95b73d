/// 单次传输的状态机。
///
/// `Idle -> Requesting -> (Failed | HeadersReceived) -> Streaming -> (Failed | Completed)`
///
/// 只会向前推进，不会回到 `Idle`；每个引擎实例只走一遍。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    Idle,
    /// 已发出请求，等待响应头
    Requesting,
    /// 状态码校验通过，已拿到（可能未知的）总大小
    HeadersReceived,
    /// 正在从响应流拷贝到目标文件
    Streaming,
    Completed,
    Failed,
}

impl TransferState {
    /// 状态机是否允许从当前状态直接迁移到 `next`。
    pub fn can_transition_to(self, next: TransferState) -> bool {
        use TransferState::*;
        matches!(
            (self, next),
            (Idle, Requesting)
                | (Requesting, HeadersReceived)
                | (Requesting, Failed)
                | (HeadersReceived, Streaming)
                | (Streaming, Completed)
                | (Streaming, Failed)
        )
    }

    /// 是否为终态
    pub fn is_terminal(self) -> bool {
        matches!(self, TransferState::Completed | TransferState::Failed)
    }
}
