//! 常用通知方式的 [`ProgressObserver`] 实现。

use async_trait::async_trait;
use log::debug;
use tokio::sync::mpsc;

use crate::internal::progress::structs::ProgressSample;
use crate::internal::transfer::traits::progress_observer::ProgressObserver;

/// 不需要进度时传 `()`。
#[async_trait]
impl ProgressObserver for () {
    async fn on_progress(&mut self, _sample: ProgressSample) {}
}

/// 有界通道：通道满时等待，调用方消费不及时会反压到传输本身。
#[async_trait]
impl ProgressObserver for mpsc::Sender<ProgressSample> {
    async fn on_progress(&mut self, sample: ProgressSample) {
        if self.send(sample).await.is_err() {
            debug!("进度接收端已关闭，丢弃进度: {}", sample);
        }
    }
}

#[async_trait]
impl ProgressObserver for mpsc::UnboundedSender<ProgressSample> {
    async fn on_progress(&mut self, sample: ProgressSample) {
        if self.send(sample).is_err() {
            debug!("进度接收端已关闭，丢弃进度: {}", sample);
        }
    }
}

/// 可变引用转发，方便调用方在传输结束后继续使用自己的观察者。
#[async_trait]
impl<O> ProgressObserver for &mut O
where
    O: ProgressObserver + ?Sized,
{
    async fn on_progress(&mut self, sample: ProgressSample) {
        (**self).on_progress(sample).await
    }
}
