//! Instant-based queries over a built [`SegmentIndex`].

use super::{Segment, SegmentIndex};
use crate::timing::{FrameRate, QueryTime, Tick};
use crate::Result;

/// A successful segment lookup: the segment plus its position.
///
/// `index` and `total` let callers step to neighbouring segments without
/// a second search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentHit<'i> {
    /// The segment containing the queried tick.
    pub segment: &'i Segment,
    /// Position of the segment in timeline order.
    pub index: usize,
    /// Total number of segments in the index.
    pub total: usize,
}

impl SegmentIndex<'_> {
    /// Binary-searches for the segment containing `at`.
    ///
    /// Returns `None` when `at` falls before the first segment, after
    /// the last one, or inside a gap where nothing is visible.
    #[must_use]
    pub fn segment_containing(&self, at: Tick) -> Option<SegmentHit<'_>> {
        let index = self.segments.partition_point(|segment| segment.end() <= at);
        let segment = self.segments.get(index)?;
        segment.contains(at).then(|| SegmentHit {
            segment,
            index,
            total: self.segments.len(),
        })
    }

    /// Like [`segment_containing`](Self::segment_containing), for a
    /// query in external units translated through `fps` into the
    /// track's timing mode first.
    #[must_use]
    pub fn segment_containing_query(
        &self,
        query: QueryTime,
        fps: FrameRate,
    ) -> Option<SegmentHit<'_>> {
        self.segment_containing(self.track.tick_from_query(query, fps))
    }

    /// Indices of the events active at `at`, ascending.
    ///
    /// Empty when nothing is visible at that instant.
    #[must_use]
    pub fn active_events_at(&self, at: Tick) -> &[usize] {
        self.segment_containing(at)
            .map_or(&[], |hit| hit.segment.active())
    }

    /// Like [`active_events_at`](Self::active_events_at), for a query in
    /// external units.
    #[must_use]
    pub fn active_events_at_query(&self, query: QueryTime, fps: FrameRate) -> &[usize] {
        self.active_events_at(self.track.tick_from_query(query, fps))
    }

    /// Start of the segment at `index`, translated to milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::SegmentOutOfRange`](crate::TrackError::SegmentOutOfRange)
    /// when `index` is past the end.
    pub fn segment_start_millis(&self, index: usize, fps: FrameRate) -> Result<i64> {
        Ok(self.track.mode().to_millis(self.get(index)?.start(), fps))
    }

    /// End of the segment at `index`, translated to milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::SegmentOutOfRange`](crate::TrackError::SegmentOutOfRange)
    /// when `index` is past the end.
    pub fn segment_end_millis(&self, index: usize, fps: FrameRate) -> Result<i64> {
        Ok(self.track.mode().to_millis(self.get(index)?.end(), fps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::TimingMode;
    use crate::track::{Event, Track};
    use crate::TrackError;

    fn track_with_spans(mode: TimingMode, spans: &[(i64, i64)]) -> Track {
        let mut track = Track::new(mode);
        for &(start, end) in spans {
            track.add(
                Event::builder()
                    .timing(Tick::new(start), Tick::new(end))
                    .build(),
            );
        }
        track
    }

    #[test]
    fn hit_reports_position_and_total() {
        let track = track_with_spans(TimingMode::Time, &[(0, 100), (50, 150), (200, 300)]);
        let index = SegmentIndex::build(&track);
        let hit = index.segment_containing(Tick::new(75)).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.total, 4);
        assert_eq!(hit.segment.active(), &[0, 1]);
        assert_eq!(hit.segment.start(), Tick::new(50));
        assert_eq!(hit.segment.end(), Tick::new(100));
    }

    #[test]
    fn gaps_and_outside_instants_miss() {
        let track = track_with_spans(TimingMode::Time, &[(0, 100), (50, 150), (200, 300)]);
        let index = SegmentIndex::build(&track);
        assert!(index.segment_containing(Tick::new(160)).is_none());
        assert!(index.segment_containing(Tick::new(-1)).is_none());
        assert!(index.segment_containing(Tick::new(300)).is_none());
        assert!(index.segment_containing(Tick::new(999)).is_none());
        assert!(index.active_events_at(Tick::new(160)).is_empty());
    }

    #[test]
    fn boundaries_are_half_open() {
        let track = track_with_spans(TimingMode::Time, &[(0, 100), (50, 150)]);
        let index = SegmentIndex::build(&track);
        // at the shared boundary only the later span is active
        assert_eq!(index.active_events_at(Tick::new(100)), &[1]);
        assert_eq!(index.active_events_at(Tick::new(99)), &[0, 1]);
        assert_eq!(index.active_events_at(Tick::new(0)), &[0]);
        assert!(index.active_events_at(Tick::new(150)).is_empty());
    }

    #[test]
    fn active_events_match_worked_timeline() {
        let track = track_with_spans(TimingMode::Time, &[(0, 100), (50, 150), (200, 300)]);
        let index = SegmentIndex::build(&track);
        assert_eq!(index.active_events_at(Tick::new(75)), &[0, 1]);
        assert!(index.active_events_at(Tick::new(160)).is_empty());
        assert_eq!(index.active_events_at(Tick::new(250)), &[2]);
    }

    #[test]
    fn queries_translate_into_frame_tracks() {
        let fps = FrameRate::new(25.0).unwrap();
        // frames 0..25 and 50..75, i.e. 0..1000 ms and 2000..3000 ms
        let track = track_with_spans(TimingMode::Frame, &[(0, 25), (50, 75)]);
        let index = SegmentIndex::build(&track);

        assert_eq!(index.active_events_at_query(QueryTime::Millis(500), fps), &[0]);
        assert!(index
            .active_events_at_query(QueryTime::Millis(1_500), fps)
            .is_empty());
        assert_eq!(
            index.active_events_at_query(QueryTime::Millis(2_500), fps),
            &[1]
        );
        assert_eq!(index.active_events_at_query(QueryTime::Frame(60), fps), &[1]);

        let hit = index
            .segment_containing_query(QueryTime::Millis(500), fps)
            .unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.total, 2);
    }

    #[test]
    fn segment_bounds_translate_to_millis() {
        let fps = FrameRate::new(25.0).unwrap();
        let track = track_with_spans(TimingMode::Frame, &[(50, 75)]);
        let index = SegmentIndex::build(&track);
        assert_eq!(index.segment_start_millis(0, fps).unwrap(), 2_000);
        assert_eq!(index.segment_end_millis(0, fps).unwrap(), 3_000);
        assert_eq!(
            index.segment_start_millis(1, fps).unwrap_err(),
            TrackError::SegmentOutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn millis_queries_are_identity_in_time_mode() {
        let fps = FrameRate::new(23.976).unwrap();
        let track = track_with_spans(TimingMode::Time, &[(0, 100)]);
        let index = SegmentIndex::build(&track);
        assert_eq!(index.segment_start_millis(0, fps).unwrap(), 0);
        assert_eq!(index.segment_end_millis(0, fps).unwrap(), 100);
        assert_eq!(index.active_events_at_query(QueryTime::Millis(99), fps), &[0]);
    }
}
