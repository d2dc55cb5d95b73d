//! # ReactiveProperty — 响应式属性内核
//!
//! 基于 [`tokio::sync::watch`] 的“最新值”单元：写入方覆盖旧值，读取方随时拿快照，
//! 或通过 [`PropertyWatcher`] 异步等待下一次变化。
//!
//! 传输控制器用它保存状态机当前状态与最近一次进度快照。

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tokio::sync::watch;
use tokio::sync::watch::error::RecvError;

// ──────────────────────────── Error ────────────────────────────

#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 属性已被销毁（所有持有者都已 drop）
    #[error("属性已被销毁")]
    Destroyed,

    #[error("接收失败: {0}")]
    RecvError(#[from] RecvError),
}

// ──────────────────────────── Inner ────────────────────────────

#[derive(Debug)]
pub(crate) struct Inner<T> {
    pub(crate) sender: watch::Sender<Option<T>>,
    pub(crate) is_dropped: AtomicBool,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        self.is_dropped.store(true, Ordering::Relaxed);
        let _ = self.sender.send(None);
    }
}

// ──────────────────────────── ReactiveProperty ────────────────────────────

/// 可克隆的响应式属性，所有克隆共享同一个值。
#[derive(Clone, Debug)]
pub struct ReactiveProperty<T: Clone + Send + Sync> {
    pub(crate) inner: Arc<Inner<T>>,
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(value: T) -> Self {
        let (sender, _) = watch::channel(Some(value));
        Self {
            inner: Arc::new(Inner {
                sender,
                is_dropped: AtomicBool::new(false),
            }),
        }
    }

    /// 覆盖当前值并通知所有监听器；没有监听器时也会保存新值。
    pub fn update(&self, new_value: T) -> &Self {
        if !self.inner.is_dropped.load(Ordering::Relaxed) {
            self.inner.sender.send_replace(Some(new_value));
        }
        self
    }

    /// 当前值的快照（clone）。
    pub fn get_current(&self) -> Option<T> {
        Option::clone(&self.inner.sender.borrow())
    }

    /// 对当前值应用转换函数，避免整体 clone。
    pub fn map<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        Option::as_ref(&self.inner.sender.borrow()).map(f)
    }

    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.inner.sender.subscribe(),
        }
    }
}

// ──────────────────────────── PropertyWatcher ────────────────────────────

/// 属性监听器：只关心最新值，中间被覆盖的值不会补发。
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<Option<T>>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 等待下一次变化并返回新值。
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver.changed().await?;
        match &*self.receiver.borrow_and_update() {
            None => Err(ReactivePropertyError::Destroyed),
            Some(value) => Ok(value.clone()),
        }
    }

    /// 等待直到当前值满足条件；当前值已满足时立即返回。
    pub async fn wait_for<F>(&mut self, mut predicate: F) -> Result<T, ReactivePropertyError>
    where
        F: FnMut(&T) -> bool,
    {
        let value = self
            .receiver
            .wait_for(|v| v.as_ref().is_none_or(&mut predicate))
            .await?;
        match &*value {
            None => Err(ReactivePropertyError::Destroyed),
            Some(v) => Ok(v.clone()),
        }
    }

    pub fn borrow(&self) -> Option<T> {
        Option::clone(&self.receiver.borrow())
    }
}
