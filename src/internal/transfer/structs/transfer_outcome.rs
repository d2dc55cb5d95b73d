use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::internal::progress::structs::TotalSize;

/// 传输成功后的结果。
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    /// 已写入的目标文件
    pub destination: PathBuf,
    /// 实际写入的字节数，与目标文件长度一致
    pub bytes_received: u64,
    /// 响应头声明的总大小
    pub total_size: TotalSize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl TransferOutcome {
    pub fn elapsed(&self) -> chrono::TimeDelta {
        self.finished_at - self.started_at
    }

    /// 平均速度（字节/秒）；耗时为 0 时返回 `None`。
    pub fn average_bytes_per_second(&self) -> Option<f64> {
        let micros = self.elapsed().num_microseconds()?;
        if micros <= 0 {
            return None;
        }
        Some(self.bytes_received as f64 * 1_000_000.0 / micros as f64)
    }
}
