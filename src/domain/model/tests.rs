// Unit tests for domain models

use std::path::PathBuf;

use super::*;

#[test]
fn media_info_accepts_zero_duration() {
    let info = MediaInfo::new(1920, 1080, 0.0, PathBuf::from("still.mp4")).unwrap();
    assert_eq!(info.width, 1920);
    assert_eq!(info.duration, 0.0);
}

#[test]
fn media_info_rejects_negative_duration() {
    let result = MediaInfo::new(1920, 1080, -1.0, PathBuf::from("bad.mp4"));
    assert!(matches!(
        result,
        Err(FrameCutError::MalformedProbeOutput { .. })
    ));
}

#[test]
fn media_info_rejects_nan_duration() {
    let result = MediaInfo::new(640, 480, f64::NAN, PathBuf::from("bad.mp4"));
    assert!(result.is_err());
}

#[test]
fn cut_range_valid() {
    let range = CutRange::new(1.0, 2.5, 10.0).unwrap();
    assert_eq!(range.start_time, 1.0);
    assert_eq!(range.end_time, 2.5);
    assert!((range.span() - 1.5).abs() < 1e-9);
}

#[test]
fn cut_range_rejects_reversed() {
    let result = CutRange::new(5.0, 2.0, 10.0);
    assert!(matches!(result, Err(FrameCutError::InvalidRange { .. })));
}

#[test]
fn cut_range_rejects_past_duration() {
    let result = CutRange::new(0.0, 11.0, 10.0);
    assert!(matches!(result, Err(FrameCutError::InvalidRange { .. })));
}

#[test]
fn cut_range_rejects_negative_start() {
    assert!(CutRange::new(-0.5, 2.0, 10.0).is_err());
}

#[test]
fn cut_range_allows_empty_range() {
    // start == end is a degenerate but valid range
    let range = CutRange::new(3.0, 3.0, 10.0).unwrap();
    assert_eq!(range.span(), 0.0);
}

#[test]
fn full_range_detection() {
    let range = CutRange::full(10.0);
    assert!(range.is_full(10.0));

    let marked = CutRange::new(0.0, 9.0, 10.0).unwrap();
    assert!(!marked.is_full(10.0));
}

#[test]
fn export_job_copy_duration() {
    let range = CutRange::new(1.0, 2.0333, 10.0).unwrap();
    let job = ExportJob::new("in.mp4", range, "in_cut_1.mp4");
    assert!((job.copy_duration() - 1.0333).abs() < 1e-9);
    assert_eq!(job.source(), Path::new("in.mp4"));
}
