//! 共享客户端单例。
//!
//! 初始化只发生一次：要么进程启动时显式调用 [`init_shared_client`]，
//! 要么第一次 [`shared_client`] 时按默认配置创建。之后整个进程都返回同一个实例，
//! 运行期间不会被销毁。

use std::sync::OnceLock;

use log::debug;
use reqwest::Client;

use crate::internal::client::structs::HttpClientConfig;
use crate::internal::transfer::structs::TransferError;

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// 用指定配置初始化共享客户端。
///
/// 已经初始化过（包括被 [`shared_client`] 隐式初始化）时返回
/// [`TransferError::ClientAlreadyInitialized`]，不会替换现有实例。
pub fn init_shared_client(
    config: HttpClientConfig,
) -> Result<&'static Client, TransferError> {
    if SHARED_CLIENT.get().is_some() {
        return Err(TransferError::ClientAlreadyInitialized);
    }

    let client = config.build()?;
    SHARED_CLIENT
        .set(client)
        .map_err(|_| TransferError::ClientAlreadyInitialized)?;
    debug!("共享 HTTP 客户端已初始化: {:?}", config);

    SHARED_CLIENT
        .get()
        .ok_or(TransferError::ClientAlreadyInitialized)
}

/// 获取共享客户端，首次调用时按默认配置（不设超时）创建。
pub fn shared_client() -> Result<&'static Client, TransferError> {
    if let Some(client) = SHARED_CLIENT.get() {
        return Ok(client);
    }

    let client = HttpClientConfig::default().build()?;
    // 并发首次调用时只有一个能写入，其余的直接丢弃自己构建的实例
    Ok(SHARED_CLIENT.get_or_init(|| client))
}
