//! # UnlockReactiveProperty
//!
//! 读写都不阻塞的响应式属性，适合高频更新场景（如下载进度）。
//!
//! ```rust,no_run
//! use stream_downloader::states::unlock_reactive::UnlockReactiveProperty;
//!
//! let prop = UnlockReactiveProperty::new(0u64);
//! prop.update(1).update(2);
//! assert_eq!(prop.get_current(), Some(2));
//! ```

pub use super::reactive_core::{
    PropertyWatcher, ReactivePropertyError as UnlockReactivePropertyError,
};

pub type UnlockReactiveProperty<T> = super::reactive_core::ReactiveProperty<T>;
