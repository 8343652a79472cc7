//! Segment construction: cutting overlapping events into disjoint spans.
//!
//! [`SegmentIndex::build`] sweeps the boundaries of every non-degenerate
//! event in a [`Track`] and produces a sorted, disjoint run of
//! [`Segment`]s, each carrying the indices of the events active inside
//! it. Spans where nothing is visible produce no segment at all.
//!
//! The index borrows the track it was built from. Mutating the track
//! therefore requires dropping the index first, and any attempt to keep
//! using a stale index is rejected by the borrow checker.
//!
//! # Performance
//!
//! Construction is `O(e log e + s * k)` for `e` events, `s` segments and
//! `k` average overlap depth. Lookups are `O(log s)`.

mod lookup;

pub use lookup::SegmentHit;

use crate::timing::Tick;
use crate::track::Track;
use crate::{Result, TrackError};
use smallvec::SmallVec;

/// Active events kept inline per segment before spilling to the heap.
const INLINE_ACTIVE: usize = 4;

/// A maximal half-open span with one fixed set of active events.
///
/// Segments are only ever produced by [`SegmentIndex::build`]; the
/// event indices point into the source track's event list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    start: Tick,
    end: Tick,
    active: SmallVec<[usize; INLINE_ACTIVE]>,
}

impl Segment {
    /// First tick inside the segment.
    #[must_use]
    pub const fn start(&self) -> Tick {
        self.start
    }

    /// First tick past the segment.
    #[must_use]
    pub const fn end(&self) -> Tick {
        self.end
    }

    /// Indices into the source track's event list, ascending.
    #[must_use]
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// Whether `tick` falls inside the half-open span.
    #[must_use]
    pub const fn contains(&self, tick: Tick) -> bool {
        self.start.value() <= tick.value() && tick.value() < self.end.value()
    }
}

/// Disjoint, sorted segmentation of a track's timeline.
///
/// Built once from a shared borrow of a [`Track`] and queried many
/// times. Because the borrow is held for the index's whole lifetime, the
/// track cannot be mutated while an index exists; rebuild after every
/// batch of edits. Construction is cheap relative to the queries it
/// serves.
#[derive(Debug, Clone)]
pub struct SegmentIndex<'a> {
    track: &'a Track,
    segments: Vec<Segment>,
}

impl<'a> SegmentIndex<'a> {
    /// Sweeps `track` and builds the segmentation.
    ///
    /// Degenerate events (no positive duration) contribute neither
    /// boundaries nor membership. Every produced segment has at least
    /// one active event.
    #[must_use]
    pub fn build(track: &'a Track) -> Self {
        let events = track.events();

        let mut bounds: Vec<Tick> = Vec::with_capacity(events.len() * 2);
        for event in events {
            if !event.is_degenerate() {
                bounds.push(event.start);
                bounds.push(event.end);
            }
        }
        bounds.sort_unstable();
        bounds.dedup();

        let slot_count = bounds.len().saturating_sub(1);
        let mut slots: Vec<SmallVec<[usize; INLINE_ACTIVE]>> = vec![SmallVec::new(); slot_count];
        for (index, event) in events.iter().enumerate() {
            if event.is_degenerate() {
                continue;
            }
            // the event's start is itself a boundary, so this lands on it
            let mut slot = bounds.partition_point(|&bound| bound < event.start);
            while slot < slot_count && bounds[slot + 1] <= event.end {
                slots[slot].push(index);
                slot += 1;
            }
        }

        let mut segments = Vec::with_capacity(slot_count);
        for (slot, active) in slots.into_iter().enumerate() {
            if !active.is_empty() {
                segments.push(Segment {
                    start: bounds[slot],
                    end: bounds[slot + 1],
                    active,
                });
            }
        }

        Self { track, segments }
    }

    /// Segments in timeline order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no visible spans.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::SegmentOutOfRange`] when `index` is past
    /// the end.
    pub fn get(&self, index: usize) -> Result<&Segment> {
        let len = self.segments.len();
        self.segments
            .get(index)
            .ok_or(TrackError::SegmentOutOfRange { index, len })
    }

    /// The track this index was built from.
    #[must_use]
    pub const fn track(&self) -> &'a Track {
        self.track
    }
}
