//! 进度观察者接口。
//!
//! 每次传输只有一个观察者。通知在传输任务内按顺序 `await`，
//! 观察者处理得慢会直接拖慢传输，所以不要在里面做长时间阻塞的事。

use async_trait::async_trait;

use crate::internal::progress::structs::ProgressSample;

/// 进度观察者：按累计字节严格递增的顺序收到 [`ProgressSample`]，
/// 成功传输的最后一次通知一定是 `is_completed() == true` 的最终快照。
///
/// 已有实现：
/// - `()`：不关心进度；
/// - [`FnObserver`](crate::transfer::FnObserver)：用 [`from_fn`](crate::transfer::from_fn) 包装同步闭包；
/// - `tokio::sync::mpsc::Sender<ProgressSample>`：有界通道，满时等待调用方消费；
/// - `tokio::sync::mpsc::UnboundedSender<ProgressSample>`。
#[async_trait]
pub trait ProgressObserver: Send {
    async fn on_progress(&mut self, sample: ProgressSample);
}
