//! 进度快照测试：比例推导、未知/为零总大小的保护、格式化。

use crate::progress::{ProgressSample, TotalSize};

#[test]
fn percent_matches_ratio_when_total_known() {
    for (received, total) in [(0u64, 100u64), (25, 100), (99, 100), (100, 100), (1, 3)] {
        let sample = ProgressSample::new(received, TotalSize::Known(total));
        let expected = received as f64 / total as f64;
        assert_eq!(sample.percent(), Some(expected));
        assert_eq!(sample.is_downloading(), expected < 1.0);
    }
}

#[test]
fn unknown_total_has_no_percent_and_never_faults() {
    let sample = ProgressSample::new(4096, TotalSize::Unknown);
    assert_eq!(sample.percent(), None);
    assert_eq!(sample.rounded_percent(), None);
    assert!(sample.is_downloading(), "总大小未知且未完成时应视为下载中");

    let done = ProgressSample::completed(4096, TotalSize::Unknown);
    assert!(!done.is_downloading(), "收到最终通知后不再是下载中");
}

#[test]
fn zero_total_is_an_empty_resource_not_a_division() {
    let sample = ProgressSample::completed(0, TotalSize::Known(0));
    assert_eq!(sample.percent(), Some(1.0));
    assert!(!sample.is_downloading());
    assert!(sample.percent().unwrap().is_finite());
}

#[test]
fn rounded_percent_keeps_two_decimals() {
    let sample = ProgressSample::new(1, TotalSize::Known(3));
    assert_eq!(sample.rounded_percent(), Some(0.33));

    let sample = ProgressSample::new(2, TotalSize::Known(3));
    assert_eq!(sample.rounded_percent(), Some(0.67));
}

#[test]
fn rounded_percent_ties_go_to_even() {
    // 12.5 -> 12, 37.5 -> 38
    assert_eq!(ProgressSample::new(1, TotalSize::Known(8)).rounded_percent(), Some(0.12));
    assert_eq!(ProgressSample::new(3, TotalSize::Known(8)).rounded_percent(), Some(0.38));
    assert_eq!(ProgressSample::new(1, TotalSize::Known(2)).rounded_percent(), Some(0.5));
}

#[test]
fn format_uses_percent_and_megabytes() {
    let sample = ProgressSample::new(1024 * 1024, TotalSize::Known(4 * 1024 * 1024));
    assert_eq!(sample.format(), "25.00% - 1.00MB / 4.00MB");

    let sample = ProgressSample::new(1_572_864, TotalSize::Unknown);
    assert_eq!(sample.format(), "--.--% - 1.50MB / ?MB");
    assert_eq!(sample.to_string(), sample.format());
}

#[test]
fn total_size_from_content_length() {
    assert_eq!(TotalSize::from(Some(10)), TotalSize::Known(10));
    assert_eq!(TotalSize::from(None), TotalSize::Unknown);
    assert_eq!(TotalSize::Known(0).known(), Some(0));
    assert!(!TotalSize::Unknown.is_known());
}
