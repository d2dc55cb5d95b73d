use std::time::Duration;

use reqwest::Client;

use crate::internal::transfer::structs::TransferError;

/// 默认 User-Agent：`包名/版本`
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// 共享 HTTP 客户端的配置。
///
/// `timeout` 为 `None` 表示整次请求不设超时：大文件下载可能持续很久，
/// 不能被默认超时打断。需要超时（比如测试）时显式设置即可。
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// 整次请求（含读完响应体）的超时，`None` 为不限
    pub timeout: Option<Duration>,
    /// 建立连接的超时，`None` 为不限
    pub connect_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// 按配置构建 reqwest 客户端。
    pub fn build(&self) -> Result<Client, TransferError> {
        let mut builder = Client::builder().user_agent(self.user_agent.as_str());

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        builder.build().map_err(TransferError::ClientBuild)
    }
}
