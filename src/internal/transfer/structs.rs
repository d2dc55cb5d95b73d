pub mod observer_adapters;
pub mod transfer_config;
pub mod transfer_controller;
pub mod transfer_engine;
pub mod transfer_error;
pub mod transfer_outcome;
pub mod transfer_state;

// 重导出公共类型
pub use observer_adapters::{FnObserver, from_fn};
pub use transfer_config::TransferConfig;
pub use transfer_controller::TransferController;
pub use transfer_engine::TransferEngine;
pub use transfer_error::{TransferError, TransferErrorKind};
pub use transfer_outcome::TransferOutcome;
pub use transfer_state::TransferState;
