//! 传输引擎领域模块：一次 GET、一个目标文件、一个观察者。
//!
//! 使用方式：`TransferEngine::new(url, path)?.transfer(observer).await`
//! 对外导出以 [`crate::transfer`] 为准，此处仅做模块划分。

pub mod impl_traits;
pub mod structs;
pub mod traits;
