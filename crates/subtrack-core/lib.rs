//! Timeline engine for timed subtitle events with overlap segmentation.
//!
//! `subtrack-core` keeps an ordered collection of timed events (a [`Track`])
//! together with the [`StyleRegistry`] that resolves their style names. From
//! a track it derives a binary-searchable [`SegmentIndex`] that answers
//! "which events are visible at instant t" in `O(log n)`.
//!
//! # Features
//!
//! - Dual timing modes: wall-clock milliseconds or video frame numbers, with
//!   explicit [`FrameRate`]-driven conversion between them
//! - Sweep segmentation: overlapping events are cut into disjoint, sorted
//!   [`Segment`]s, each carrying the set of events active inside it
//! - Style resolution that never fails: unknown names fall back to the
//!   registry's default style
//! - Borrowed lookups: [`SegmentIndex`] borrows the [`Track`] it was built
//!   from, so using a stale index after a mutation is a compile error rather
//!   than a runtime bug
//!
//! # Quick Start
//!
//! ```
//! use subtrack_core::{Event, SegmentIndex, Tick, TimingMode, Track};
//!
//! let mut track = Track::new(TimingMode::Time);
//! track.add(Event::builder().text("Hello").timing(Tick::new(0), Tick::new(100)).build());
//! track.add(Event::builder().text("World").timing(Tick::new(50), Tick::new(150)).build());
//! track.sort();
//!
//! let index = SegmentIndex::build(&track);
//! assert_eq!(index.active_events_at(Tick::new(75)), &[0, 1]);
//! assert!(index.active_events_at(Tick::new(400)).is_empty());
//! ```
//!
//! # Architecture
//!
//! - [`timing`]: timing modes, opaque tick values, frame rate conversion
//! - [`track`]: the event store and its bulk operations
//! - [`style`]: style definitions and the name-to-style registry
//! - [`index`]: segment construction and instant-based lookup
//! - [`utils`]: error types shared across the crate

#![deny(unsafe_code)]

pub mod index;
pub mod style;
pub mod timing;
pub mod track;
pub mod utils;

pub use index::{Segment, SegmentHit, SegmentIndex};
pub use style::{BorderStyle, RelativeTo, Style, StyleRegistry, DEFAULT_STYLE};
pub use timing::{FrameRate, QueryTime, Tick, TimingMode};
pub use track::{Event, EventBuilder, Margins, ReadOrder, Track};
pub use utils::TrackError;

/// Result type used throughout the crate.
pub type Result<T> = core::result::Result<T, TrackError>;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
