//! 闭包适配器：把同步闭包包装成 [`ProgressObserver`]。

use async_trait::async_trait;

use crate::internal::progress::structs::ProgressSample;
use crate::internal::transfer::traits::progress_observer::ProgressObserver;

/// 同步闭包观察者，闭包在传输任务内直接调用。
pub struct FnObserver<F>(F);

#[async_trait]
impl<F> ProgressObserver for FnObserver<F>
where
    F: FnMut(ProgressSample) + Send,
{
    async fn on_progress(&mut self, sample: ProgressSample) {
        (self.0)(sample);
    }
}

/// 用闭包创建观察者。
///
/// ```rust,no_run
/// use stream_downloader::transfer::from_fn;
///
/// let observer = from_fn(|sample| println!("{sample}"));
/// ```
pub fn from_fn<F>(f: F) -> FnObserver<F>
where
    F: FnMut(ProgressSample) + Send,
{
    FnObserver(f)
}
