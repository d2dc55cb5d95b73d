//! 拷贝循环：响应流 -> 目标文件，固定大小缓冲区，节流通知进度。

use log::trace;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use crate::internal::progress::structs::{ProgressSample, TotalSize};
use crate::internal::transfer::structs::{
    TransferConfig, TransferController, TransferError,
};
use crate::internal::transfer::traits::progress_observer::ProgressObserver;

/// 把 `reader` 全部拷贝到 `writer`，返回累计字节数。
///
/// - 每次读取最多 `chunk_size` 字节，写完这一块才会发起下一次读取；
/// - 每成功读取 `notify_every` 块通知一次进度；
/// - 读到 0 字节视为流结束：刷新 `writer` 后无条件发出最终进度。
pub(crate) async fn copy_with_progress<R, W, O>(
    reader: &mut R,
    writer: &mut W,
    total_size: TotalSize,
    config: &TransferConfig,
    observer: &mut O,
    controller: &TransferController,
) -> Result<u64, TransferError>
where
    R: AsyncRead + Unpin + ?Sized,
    W: AsyncWrite + Unpin + ?Sized,
    O: ProgressObserver + ?Sized,
{
    let cancel_token: &CancellationToken = controller.cancel_token();
    let mut buffer = vec![0u8; config.chunk_size];
    let mut bytes_received: u64 = 0;
    let mut read_count: u64 = 0;

    loop {
        let read = tokio::select! {
            biased;

            _ = cancel_token.cancelled() => return Err(TransferError::Cancelled),
            result = reader.read(&mut buffer) => result.map_err(TransferError::ReadBody)?,
        };

        if read == 0 {
            writer.flush().await.map_err(TransferError::FlushFile)?;
            let sample = ProgressSample::completed(bytes_received, total_size);
            notify(observer, controller, sample).await;
            return Ok(bytes_received);
        }

        if cancel_token.is_cancelled() {
            return Err(TransferError::Cancelled);
        }
        writer
            .write_all(&buffer[..read])
            .await
            .map_err(TransferError::WriteFile)?;

        bytes_received += read as u64;
        read_count += 1;
        trace!("第 {} 次读取 {} 字节，累计 {}", read_count, read, bytes_received);

        if read_count % config.notify_every == 0 {
            notify(observer, controller, ProgressSample::new(bytes_received, total_size)).await;
        }
    }
}

async fn notify<O>(
    observer: &mut O,
    controller: &TransferController,
    sample: ProgressSample,
) where
    O: ProgressObserver + ?Sized,
{
    controller.record_progress(sample);
    observer.on_progress(sample).await;
}
