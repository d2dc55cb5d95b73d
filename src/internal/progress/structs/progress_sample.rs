use std::fmt;

use serde::{Deserialize, Serialize};

use super::total_size::TotalSize;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// 一次进度通知的快照：已接收字节数 + 总大小。
///
/// 每次通知都会新建一个实例，引擎自身不保留对它的引用。
/// `completed` 只在流读完后那次无条件通知里为 `true`，
/// 总大小未知时靠它区分“还在下”和“已经下完”。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSample {
    bytes_received: u64,
    total_size: TotalSize,
    completed: bool,
}

impl ProgressSample {
    /// 传输途中的进度快照。
    pub fn new(bytes_received: u64, total_size: TotalSize) -> Self {
        Self {
            bytes_received,
            total_size,
            completed: false,
        }
    }

    /// 流结束时的最终快照。
    pub fn completed(bytes_received: u64, total_size: TotalSize) -> Self {
        Self {
            bytes_received,
            total_size,
            completed: true,
        }
    }

    pub fn bytes_received(&self) -> u64 {
        self.bytes_received
    }

    pub fn total_size(&self) -> TotalSize {
        self.total_size
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// 完成比例（0.0～1.0）。
    ///
    /// 总大小未知时返回 `None`；总大小已知且为 0 时视为已完成，返回 `Some(1.0)`。
    pub fn percent(&self) -> Option<f64> {
        match self.total_size {
            TotalSize::Unknown => None,
            TotalSize::Known(0) => Some(1.0),
            TotalSize::Known(total) => Some(self.bytes_received as f64 / total as f64),
        }
    }

    /// 比例保留两位小数，用于直接展示；恰好为一半时取偶数（0.125 -> 0.12）。
    pub fn rounded_percent(&self) -> Option<f64> {
        self.percent().map(|p| (p * 100.0).round_ties_even() / 100.0)
    }

    /// 是否仍在下载中；总大小未知时以是否收到最终通知为准。
    pub fn is_downloading(&self) -> bool {
        match self.percent() {
            Some(p) => p < 1.0,
            None => !self.completed,
        }
    }

    /// 例：`45.00% - 1.23MB / 2.73MB`；总大小未知时为 `--.--% - 1.23MB / ?MB`。
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProgressSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let received_mb = self.bytes_received as f64 / BYTES_PER_MB;
        match (self.percent(), self.total_size) {
            (Some(p), TotalSize::Known(total)) => write!(
                f,
                "{:.2}% - {:.2}MB / {:.2}MB",
                p * 100.0,
                received_mb,
                total as f64 / BYTES_PER_MB
            ),
            _ => write!(f, "--.--% - {:.2}MB / ?MB", received_mb),
        }
    }
}
