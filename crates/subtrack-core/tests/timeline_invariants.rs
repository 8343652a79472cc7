//! Property tests for segmentation and timing conversion invariants.

use proptest::prelude::*;
use subtrack_core::{Event, FrameRate, SegmentIndex, Tick, TimingMode, Track};

/// Random `(start, length)` spans; negative and zero lengths produce
/// degenerate events on purpose.
fn arb_spans() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0_i64..5_000, -50_i64..1_500), 0..40)
}

fn build_track(spans: &[(i64, i64)]) -> Track {
    let mut track = Track::new(TimingMode::Time);
    for &(start, length) in spans {
        track.add(
            Event::builder()
                .timing(Tick::new(start), Tick::new(start + length))
                .build(),
        );
    }
    track
}

/// Collapses half-open spans into their merged, sorted union.
fn merged_union(mut spans: Vec<(i64, i64)>) -> Vec<(i64, i64)> {
    spans.sort_unstable();
    let mut merged: Vec<(i64, i64)> = Vec::new();
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

proptest! {
    #[test]
    fn segments_are_sorted_disjoint_and_non_empty(spans in arb_spans()) {
        let track = build_track(&spans);
        let index = SegmentIndex::build(&track);
        for segment in index.segments() {
            prop_assert!(segment.start() < segment.end());
            prop_assert!(!segment.active().is_empty());
        }
        for pair in index.segments().windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start());
        }
    }

    #[test]
    fn lookup_agrees_with_linear_scan(spans in arb_spans(), at in -100_i64..7_000) {
        let track = build_track(&spans);
        let index = SegmentIndex::build(&track);
        let tick = Tick::new(at);
        let expected: Vec<usize> = track
            .events()
            .iter()
            .enumerate()
            .filter(|(_, event)| event.covers(tick))
            .map(|(position, _)| position)
            .collect();
        prop_assert_eq!(index.active_events_at(tick), expected.as_slice());
    }

    #[test]
    fn lookup_agrees_with_linear_scan_at_boundaries(spans in arb_spans()) {
        let track = build_track(&spans);
        let index = SegmentIndex::build(&track);
        let mut probes = vec![0_i64];
        for &(start, length) in &spans {
            let end = start + length;
            probes.extend([start - 1, start, end - 1, end, end + 1]);
        }
        for at in probes {
            let tick = Tick::new(at);
            let expected: Vec<usize> = track
                .events()
                .iter()
                .enumerate()
                .filter(|(_, event)| event.covers(tick))
                .map(|(position, _)| position)
                .collect();
            prop_assert_eq!(index.active_events_at(tick), expected.as_slice(), "at {}", at);
        }
    }

    #[test]
    fn segments_exactly_cover_visible_time(spans in arb_spans()) {
        let track = build_track(&spans);
        let index = SegmentIndex::build(&track);

        // adjacent segments fused back together must equal the merged
        // union of the live event spans
        let mut from_segments: Vec<(i64, i64)> = Vec::new();
        for segment in index.segments() {
            let (start, end) = (segment.start().value(), segment.end().value());
            match from_segments.last_mut() {
                Some(last) if last.1 == start => last.1 = end,
                _ => from_segments.push((start, end)),
            }
        }

        let live: Vec<(i64, i64)> = track
            .events()
            .iter()
            .filter(|event| !event.is_degenerate())
            .map(|event| (event.start.value(), event.end.value()))
            .collect();

        prop_assert_eq!(from_segments, merged_union(live));
    }

    #[test]
    fn sort_orders_by_start_then_read_order(spans in arb_spans()) {
        let mut track = build_track(&spans);
        track.sort();
        for pair in track.events().windows(2) {
            let first = (pair[0].start, pair[0].read_order);
            let second = (pair[1].start, pair[1].read_order);
            prop_assert!(first <= second);
        }
        // read orders are untouched, so arrival order is recoverable
        let mut read_orders: Vec<i64> = track
            .events()
            .iter()
            .map(|event| event.read_order.value())
            .collect();
        read_orders.sort_unstable();
        let expected: Vec<i64> = (0..track.len() as i64).collect();
        prop_assert_eq!(read_orders, expected);
    }

    #[test]
    fn frame_round_trip_is_exact_for_integer_rates(
        frames in prop::collection::vec(-10_000_i64..10_000, 1..50),
        rate in 1_u32..240,
    ) {
        let fps = FrameRate::new(f64::from(rate)).unwrap();
        for frame in frames {
            let millis = fps.frame_to_millis(frame);
            prop_assert_eq!(fps.millis_to_frame(millis), frame);
        }
    }

    #[test]
    fn millis_round_trip_bounded_by_one_frame(millis in -100_000_i64..100_000) {
        for rate in [23.976, 24.0, 25.0, 29.97, 30.0, 48.0, 59.94, 60.0, 120.0] {
            let fps = FrameRate::new(rate).unwrap();
            let frame_len = (1000.0 / rate).ceil() as i64;
            let back = fps.frame_to_millis(fps.millis_to_frame(millis));
            prop_assert!((back - millis).abs() <= frame_len, "rate {}", rate);
        }
    }

    #[test]
    fn conversion_keeps_segment_lookups_consistent(spans in arb_spans()) {
        let mut track = build_track(&spans);
        let fps = FrameRate::new(25.0).unwrap();
        track.convert_timing_mode(TimingMode::Frame, fps);

        let index = SegmentIndex::build(&track);
        for segment in index.segments() {
            prop_assert!(segment.start() < segment.end());
        }
        for pair in index.segments().windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start());
        }
    }
}
