use std::path::PathBuf;

use crate::internal::transfer::structs::{TransferEngine, TransferError, TransferOutcome};
use crate::internal::transfer::traits::progress_observer::ProgressObserver;

/// 本库主入口：把 `url` 下载到 `destination`，进度交给 `observer`。
///
/// 等价于 `TransferEngine::new(url, destination)?.transfer(observer).await`，
/// 需要取消、调整块大小或替换客户端时请直接使用 [`TransferEngine`]。
///
/// ```rust,no_run
/// # async fn run() -> Result<(), stream_downloader::transfer::TransferError> {
/// let (tx, mut rx) = tokio::sync::mpsc::channel(16);
/// tokio::spawn(async move {
///     while let Some(sample) = rx.recv().await {
///         println!("{sample}");
///     }
/// });
/// stream_downloader::download_file("https://example.com/a.zip", "a.zip", tx).await?;
/// # Ok(())
/// # }
/// ```
pub async fn download_file<O>(
    url: &str,
    destination: impl Into<PathBuf>,
    observer: O,
) -> Result<TransferOutcome, TransferError>
where
    O: ProgressObserver,
{
    TransferEngine::new(url, destination)?
        .transfer(observer)
        .await
}
