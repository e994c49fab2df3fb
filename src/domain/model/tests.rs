// Unit tests for domain models

use super::*;

fn stamp(value: &str) -> Timestamp {
    let (first, rest) = value.split_once(':').unwrap();
    let (second, fraction) = rest.split_once('.').unwrap();
    Timestamp::from_parts(first, second, fraction)
}

#[test]
fn test_frame_rate_accepts_common_rates() {
    for fps in [23.976, 24.0, 25.0, 29.97, 30.0, 50.0, 59.94, 60.0] {
        assert_eq!(FrameRate::new(fps).unwrap().as_f64(), fps);
    }
}

#[test]
fn test_frame_rate_rejects_non_positive() {
    assert!(matches!(FrameRate::new(0.0), Err(DomainError::BadArgs(_))));
    assert!(matches!(FrameRate::new(-24.0), Err(DomainError::BadArgs(_))));
    assert!(FrameRate::new(f64::NAN).is_err());
    assert!(FrameRate::new(f64::INFINITY).is_err());
}

#[test]
fn test_frame_rate_default() {
    assert_eq!(FrameRate::default().as_f64(), 24.0);
    assert_eq!(FrameRate::default().to_string(), "24 fps");
}

#[test]
fn test_timestamp_display() {
    assert_eq!(stamp("00:13.54").to_string(), "00:13.54");
    assert_eq!(stamp("00:00.0").as_str(), "00:00.0");
}

#[test]
fn test_pending_marker_requires_name() {
    let pending = PendingMarker::new(stamp("00:00.0"));
    assert!(matches!(pending.clone().named(""), Err(DomainError::Format(_))));
    assert!(pending.clone().named("   ").is_err());

    let marker = pending.named("intro").unwrap();
    assert_eq!(marker.name(), "intro");
    assert_eq!(marker.start().as_str(), "00:00.0");
}

#[test]
fn test_segment_between_takes_successor_start() {
    let first = PendingMarker::new(stamp("00:00.0")).named("intro").unwrap();
    let second = PendingMarker::new(stamp("00:10.0")).named("verse").unwrap();

    let segment = Segment::between(&first, &second);
    assert_eq!(segment.name, "intro");
    assert_eq!(segment.start, *first.start());
    assert_eq!(segment.stop, *second.start());
    assert_eq!(segment.to_string(), "intro: 00:00.0-00:10.0");
}

#[test]
fn test_segment_between_keeps_inverted_interval() {
    let late = PendingMarker::new(stamp("00:30.0")).named("late").unwrap();
    let early = PendingMarker::new(stamp("00:05.0")).named("early").unwrap();

    let segment = Segment::between(&late, &early);
    assert_eq!(segment.start.as_str(), "00:30.0");
    assert_eq!(segment.stop.as_str(), "00:05.0");
}

#[test]
fn test_segment_serializes_as_plain_strings() {
    let first = PendingMarker::new(stamp("00:00.0")).named("a").unwrap();
    let second = PendingMarker::new(stamp("00:13.54")).named("b").unwrap();

    let json = serde_json::to_value(Segment::between(&first, &second)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "name": "a", "start": "00:00.0", "stop": "00:13.54" })
    );
}
