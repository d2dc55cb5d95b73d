/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口函数
pub use internal::entrance::download::*;

/// 进程级共享 HTTP 客户端
pub mod client {
    use crate::internal;
    pub use internal::client::functions::*;
    pub use internal::client::structs::*;
    pub use internal::client::structs::http_client_config::DEFAULT_USER_AGENT;
}

/// 进度快照
pub mod progress {
    use crate::internal;
    pub use internal::progress::structs::*;
}

/// 传输引擎：类型、观察者接口与配置常量统一在此导出
pub mod transfer {
    use crate::internal;
    pub use internal::transfer::structs::*;
    pub use internal::transfer::structs::transfer_config::{
        DEFAULT_CHUNK_SIZE, DEFAULT_NOTIFY_EVERY,
    };
    pub use internal::transfer::traits::progress_observer::ProgressObserver;
}

pub mod states {
    pub mod unlock_reactive {
        use crate::internal;
        pub use internal::states::unlock_reactive::*;
    }
}
