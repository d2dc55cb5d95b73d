//! 传输引擎：负责一次完整下载的请求生命周期。

mod copy_loop;
mod request;

pub(crate) use copy_loop::copy_with_progress;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use futures_util::TryStreamExt;
use log::{debug, info, warn};
use reqwest::Client;
use tokio::fs::OpenOptions;
use tokio_util::io::StreamReader;
use url::Url;

use crate::internal::client::functions::shared_client;
use crate::internal::transfer::traits::progress_observer::ProgressObserver;

use super::transfer_config::TransferConfig;
use super::transfer_controller::TransferController;
use super::transfer_error::TransferError;
use super::transfer_outcome::TransferOutcome;
use super::transfer_state::TransferState;

/// 流式下载引擎：一个实例对应一次传输。
///
/// [`transfer`](Self::transfer) 会消耗引擎本身，所以同一个实例不可能被执行两次；
/// 需要再次下载时新建一个即可（HTTP 客户端是共享的，新建引擎很便宜）。
///
/// ```rust,no_run
/// # async fn run() -> Result<(), stream_downloader::transfer::TransferError> {
/// use stream_downloader::transfer::{TransferEngine, from_fn};
///
/// let outcome = TransferEngine::new("https://example.com/big.iso", "big.iso")?
///     .transfer(from_fn(|sample| println!("{sample}")))
///     .await?;
/// println!("写入 {} 字节", outcome.bytes_received);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TransferEngine {
    url: Url,
    destination: PathBuf,
    config: TransferConfig,
    /// 不设置时使用进程级共享客户端
    client: Option<Client>,
    controller: Arc<TransferController>,
}

impl TransferEngine {
    /// 解析 URL 并创建引擎，只接受 http/https。
    pub fn new(
        url: &str,
        destination: impl Into<PathBuf>,
    ) -> Result<Self, TransferError> {
        Self::from_url(Url::parse(url)?, destination)
    }

    pub fn from_url(
        url: Url,
        destination: impl Into<PathBuf>,
    ) -> Result<Self, TransferError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(TransferError::UnsupportedScheme(url.scheme().to_string()));
        }

        Ok(Self {
            url,
            destination: destination.into(),
            config: TransferConfig::default(),
            client: None,
            controller: Arc::new(TransferController::new()),
        })
    }

    /// 设置每次读取的缓冲区大小（字节）
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size;
        self
    }

    /// 设置每读取多少块通知一次进度
    pub fn notify_every(mut self, notify_every: u64) -> Self {
        self.config.notify_every = notify_every;
        self
    }

    pub fn with_config(mut self, config: TransferConfig) -> Self {
        self.config = config;
        self
    }

    /// 使用指定客户端代替共享客户端（如测试时需要超时）。
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn config(&self) -> &TransferConfig {
        &self.config
    }

    pub fn controller(&self) -> Arc<TransferController> {
        Arc::clone(&self.controller)
    }

    /// 执行传输，直到完成或失败。
    ///
    /// 失败时已写入的部分文件保留在原地，是否清理由调用方决定。
    pub async fn transfer<O>(self, mut observer: O) -> Result<TransferOutcome, TransferError>
    where
        O: ProgressObserver,
    {
        let controller = Arc::clone(&self.controller);
        let url = self.url.clone();
        let result = self.run(&mut observer).await;

        match &result {
            Ok(outcome) => {
                controller.set_state(TransferState::Completed);
                info!(
                    "下载完成: {} -> {}，{} 字节",
                    url,
                    outcome.destination.display(),
                    outcome.bytes_received
                );
            }
            Err(e) => {
                // 请求发出前的配置错误不离开 Idle
                if controller.state() != TransferState::Idle {
                    controller.set_state(TransferState::Failed);
                }
                warn!("下载失败: {}，{}", url, e);
            }
        }

        result
    }

    async fn run<O>(self, observer: &mut O) -> Result<TransferOutcome, TransferError>
    where
        O: ProgressObserver,
    {
        self.config.validate()?;
        let client = match self.client {
            Some(ref client) => client.clone(),
            None => shared_client()?.clone(),
        };
        let started_at = Utc::now();

        // 等待响应头
        self.controller.set_state(TransferState::Requesting);
        let response = request::send_for_headers(&client, &self.url, &self.controller).await?;
        let total_size = request::total_size_of(&response);
        self.controller.set_state(TransferState::HeadersReceived);
        debug!("{} 响应头已到达，总大小: {:?}", self.url, total_size);

        // 创建或截断目标文件，不做续传；打开失败属于 Streaming 阶段的失败
        self.controller.set_state(TransferState::Streaming);
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.destination)
            .await
            .map_err(TransferError::CreateFile)?;

        let stream = response.bytes_stream().map_err(std::io::Error::other);
        let reader = StreamReader::new(stream);
        tokio::pin!(reader);

        let bytes_received = copy_with_progress(
            &mut reader,
            &mut file,
            total_size,
            &self.config,
            observer,
            &self.controller,
        )
        .await?;

        Ok(TransferOutcome {
            destination: self.destination,
            bytes_received,
            total_size,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
