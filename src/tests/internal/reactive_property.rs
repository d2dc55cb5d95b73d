//! 响应式属性测试：基础读写、watch 监听、条件等待。

use std::time::Duration;

use crate::states::unlock_reactive::{UnlockReactiveProperty, UnlockReactivePropertyError};
use crate::transfer::TransferState;

#[tokio::test]
async fn basic_update_and_read() {
    let prop = UnlockReactiveProperty::new(0u64);
    prop.update(42);
    assert_eq!(prop.get_current(), Some(42));

    prop.update(43).update(50);
    assert_eq!(prop.map(|v| v * 2), Some(100));
}

#[tokio::test]
async fn watch_receives_updates() {
    let prop = UnlockReactiveProperty::new(0i32);
    let mut watcher = prop.watch();

    prop.update(1);
    assert_eq!(watcher.changed().await.unwrap(), 1);

    prop.update(2);
    assert_eq!(watcher.changed().await.unwrap(), 2);
    assert_eq!(watcher.borrow(), Some(2));
}

#[tokio::test]
async fn wait_for_terminal_state() {
    let prop = UnlockReactiveProperty::new(TransferState::Idle);
    let p = prop.clone();

    tokio::spawn(async move {
        for state in [
            TransferState::Requesting,
            TransferState::HeadersReceived,
            TransferState::Streaming,
            TransferState::Completed,
        ] {
            tokio::time::sleep(Duration::from_millis(10)).await;
            p.update(state);
        }
    });

    let mut watcher = prop.watch();
    let state = tokio::time::timeout(Duration::from_secs(5), watcher.wait_for(|s| s.is_terminal()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(state, TransferState::Completed);
}

#[tokio::test]
async fn watcher_reports_destroyed_property() {
    let prop = UnlockReactiveProperty::new(1u8);
    let mut watcher = prop.watch();
    drop(prop);

    let result = watcher.changed().await;
    assert!(matches!(
        result,
        Err(UnlockReactivePropertyError::Destroyed) | Err(UnlockReactivePropertyError::RecvError(_))
    ));
}
