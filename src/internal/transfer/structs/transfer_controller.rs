use log::debug;
use tokio_util::sync::CancellationToken;

use crate::internal::progress::structs::ProgressSample;
use crate::internal::states::reactive_core::PropertyWatcher;
use crate::states::unlock_reactive::UnlockReactiveProperty;

use super::transfer_state::TransferState;

/// 传输控制器：可在其他任务里持有，用来取消传输或查看状态。
///
/// 通过 [`TransferEngine::controller`](super::TransferEngine::controller) 获取，
/// 传输结束后仍可读取终态和最后一次进度。
#[derive(Debug)]
pub struct TransferController {
    state: UnlockReactiveProperty<TransferState>,
    latest_progress: UnlockReactiveProperty<Option<ProgressSample>>,
    cancel_token: CancellationToken,
}

/// 内部实现
impl TransferController {
    pub(crate) fn new() -> Self {
        Self {
            state: UnlockReactiveProperty::new(TransferState::Idle),
            latest_progress: UnlockReactiveProperty::new(None),
            cancel_token: CancellationToken::new(),
        }
    }

    pub(crate) fn set_state(&self, state: TransferState) {
        let current = self.state();
        debug_assert!(
            current.can_transition_to(state),
            "非法状态迁移: {:?} -> {:?}",
            current,
            state
        );
        debug!("传输状态 -> {:?}", state);
        self.state.update(state);
    }

    pub(crate) fn record_progress(&self, sample: ProgressSample) {
        self.latest_progress.update(Some(sample));
    }

    pub(crate) fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }
}

/// 外部接口
impl TransferController {
    /// 请求取消。在等待响应头、每次读取、每次写入前检查，
    /// 已写入的部分文件不会被删除。
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    pub fn state(&self) -> TransferState {
        self.state.get_current().unwrap_or(TransferState::Idle)
    }

    /// 监听状态变化，只保证拿到最新状态，不保证每一步都能看到。
    pub fn watch_state(&self) -> PropertyWatcher<TransferState> {
        self.state.watch()
    }

    /// 最近一次通知给观察者的进度。
    pub fn latest_progress(&self) -> Option<ProgressSample> {
        self.latest_progress.get_current().flatten()
    }
}
