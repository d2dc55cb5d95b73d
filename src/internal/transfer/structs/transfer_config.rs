use super::transfer_error::TransferError;

/// 默认每次读取的块大小：8KB
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// 默认每读取多少块通知一次进度
pub const DEFAULT_NOTIFY_EVERY: u64 = 8;

/// 单次传输的拷贝循环配置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferConfig {
    /// 缓冲区大小（字节），整个传输只分配这一块
    pub chunk_size: usize,
    /// 进度节流：每成功读取 N 块通知一次，流结束时另外无条件通知一次
    pub notify_every: u64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            notify_every: DEFAULT_NOTIFY_EVERY,
        }
    }
}

impl TransferConfig {
    pub(crate) fn validate(&self) -> Result<(), TransferError> {
        if self.chunk_size == 0 {
            return Err(TransferError::InvalidConfig("chunk_size 必须大于 0"));
        }
        if self.notify_every == 0 {
            return Err(TransferError::InvalidConfig("notify_every 必须大于 0"));
        }
        Ok(())
    }
}
