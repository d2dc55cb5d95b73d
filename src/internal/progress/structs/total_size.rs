use serde::{Deserialize, Serialize};

/// 资源总大小。
///
/// 服务器未返回 `Content-Length`（如 chunked 编码）时为 [`TotalSize::Unknown`]；
/// `Known(0)` 表示资源本身就是空的，两者不能混用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TotalSize {
    Known(u64),
    #[default]
    Unknown,
}

impl TotalSize {
    pub fn known(self) -> Option<u64> {
        match self {
            TotalSize::Known(n) => Some(n),
            TotalSize::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, TotalSize::Known(_))
    }
}

impl From<Option<u64>> for TotalSize {
    fn from(value: Option<u64>) -> Self {
        value.map_or(TotalSize::Unknown, TotalSize::Known)
    }
}
