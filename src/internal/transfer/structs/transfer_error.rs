//! 传输相关错误类型。

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("URL 无效: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("仅支持 http/https，当前为: {0}")]
    UnsupportedScheme(String),

    #[error("传输配置无效: {0}")]
    InvalidConfig(&'static str),

    #[error("构建 HTTP 客户端失败: {0}")]
    ClientBuild(reqwest::Error),

    #[error("共享 HTTP 客户端已初始化，不能重复初始化")]
    ClientAlreadyInitialized,

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("服务器返回非成功状态码 {status}: {url}")]
    Status { status: StatusCode, url: Url },

    #[error("读取响应流失败: {0}")]
    ReadBody(std::io::Error),

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),

    #[error("刷新文件失败: {0}")]
    FlushFile(std::io::Error),

    #[error("下载被取消")]
    Cancelled,
}

/// 错误大类，供调用方决定是否重试。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferErrorKind {
    /// 连接、DNS、读流失败或非 2xx 状态码
    Transport,
    /// 目标文件打开、写入、刷新失败
    Io,
    Cancelled,
    /// URL、传输配置或客户端配置有误，请求尚未发出
    Config,
}

impl TransferError {
    pub fn kind(&self) -> TransferErrorKind {
        match self {
            TransferError::Request(_)
            | TransferError::Status { .. }
            | TransferError::ReadBody(_) => TransferErrorKind::Transport,
            TransferError::CreateFile(_)
            | TransferError::WriteFile(_)
            | TransferError::FlushFile(_) => TransferErrorKind::Io,
            TransferError::Cancelled => TransferErrorKind::Cancelled,
            TransferError::InvalidUrl(_)
            | TransferError::UnsupportedScheme(_)
            | TransferError::InvalidConfig(_)
            | TransferError::ClientBuild(_)
            | TransferError::ClientAlreadyInitialized => TransferErrorKind::Config,
        }
    }

    /// 非成功状态码错误时返回该状态码。
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransferError::Status { status, .. } => Some(*status),
            TransferError::Request(e) => e.status(),
            _ => None,
        }
    }
}
