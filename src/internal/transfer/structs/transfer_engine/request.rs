//! 发起请求并校验响应头。

use log::debug;
use reqwest::{Client, Response};
use url::Url;

use crate::internal::progress::structs::TotalSize;
use crate::internal::transfer::structs::{TransferController, TransferError};

/// 发出 GET 请求，响应头到达即返回，响应体留给调用方流式读取。
///
/// 非 2xx 状态码直接返回 [`TransferError::Status`]，此时还没有碰过目标文件。
pub(super) async fn send_for_headers(
    client: &Client,
    url: &Url,
    controller: &TransferController,
) -> Result<Response, TransferError> {
    let response = tokio::select! {
        biased;

        _ = controller.cancel_token().cancelled() => return Err(TransferError::Cancelled),
        result = client.get(url.clone()).send() => result?,
    };

    let status = response.status();
    debug!("{} 返回状态码 {}", url, status);
    if !status.is_success() {
        return Err(TransferError::Status {
            status,
            url: url.clone(),
        });
    }

    Ok(response)
}

/// 从响应头读取总大小，没有 `Content-Length` 时为 [`TotalSize::Unknown`]。
pub(super) fn total_size_of(response: &Response) -> TotalSize {
    TotalSize::from(response.content_length())
}
