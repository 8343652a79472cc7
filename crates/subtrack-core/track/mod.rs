//! The event store: an ordered collection of timed events plus the
//! styles they reference.
//!
//! [`Track`] owns everything: the events, the style registry, and the
//! timing mode that gives meaning to every stored tick. Bulk operations
//! (sorting, timing mode conversion, merging) live here; per-instant
//! lookup is the job of [`SegmentIndex`](crate::index::SegmentIndex),
//! which borrows a track and stays valid exactly as long as the track is
//! not mutated.

pub mod event;

pub use event::{Event, EventBuilder, Margins, ReadOrder};

use crate::style::{Style, StyleRegistry, DEFAULT_STYLE};
use crate::timing::{FrameRate, QueryTime, Tick, TimingMode};
use crate::{Result, TrackError};

/// An ordered store of timed events with their style registry.
///
/// Every stored tick is interpreted in the track's [`TimingMode`];
/// [`convert_timing_mode`](Self::convert_timing_mode) rewrites the whole
/// store from one interpretation to the other. Events keep the order
/// they were added in until [`sort`](Self::sort) is called.
///
/// # Example
///
/// ```
/// use subtrack_core::{Event, FrameRate, Tick, TimingMode, Track};
///
/// let mut track = Track::new(TimingMode::Time);
/// track.add(Event::builder().text("one").timing(Tick::new(0), Tick::new(2_000)).build());
///
/// let fps = FrameRate::new(25.0)?;
/// track.convert_timing_mode(TimingMode::Frame, fps);
/// assert_eq!(track.events()[0].end, Tick::new(50));
/// # Ok::<(), subtrack_core::TrackError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Track {
    name: String,
    mode: TimingMode,
    events: Vec<Event>,
    styles: StyleRegistry,
    next_read_order: i64,
}

impl Track {
    /// Creates an empty track whose ticks are interpreted in `mode`.
    #[must_use]
    pub fn new(mode: TimingMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Human-readable track name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the track.
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Timing mode all stored ticks are interpreted in.
    #[must_use]
    pub const fn mode(&self) -> TimingMode {
        self.mode
    }

    /// Stored events in their current order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Shared access to the style registry.
    #[must_use]
    pub const fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    /// Mutable access to the style registry.
    pub fn styles_mut(&mut self) -> &mut StyleRegistry {
        &mut self.styles
    }

    /// Number of stored events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the track holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Appends `event`, assigning a read order if it does not carry one.
    ///
    /// Events arriving with an explicit read order keep it, and the
    /// internal counter jumps past it so later automatic assignments
    /// stay unique. Returns the index the event landed at.
    pub fn add(&mut self, mut event: Event) -> usize {
        if event.read_order.is_unset() {
            event.read_order = ReadOrder::new(self.next_read_order);
            self.next_read_order += 1;
        } else {
            self.next_read_order = self.next_read_order.max(event.read_order.value() + 1);
        }
        self.events.push(event);
        self.events.len() - 1
    }

    /// Event at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EventOutOfRange`] when `index` is past the
    /// end.
    pub fn get(&self, index: usize) -> Result<&Event> {
        let len = self.events.len();
        self.events
            .get(index)
            .ok_or(TrackError::EventOutOfRange { index, len })
    }

    /// Mutable event at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EventOutOfRange`] when `index` is past the
    /// end.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Event> {
        let len = self.events.len();
        self.events
            .get_mut(index)
            .ok_or(TrackError::EventOutOfRange { index, len })
    }

    /// Removes and returns the event at `index`, shifting later events
    /// down.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EventOutOfRange`] when `index` is past the
    /// end.
    pub fn remove(&mut self, index: usize) -> Result<Event> {
        if index < self.events.len() {
            Ok(self.events.remove(index))
        } else {
            Err(TrackError::EventOutOfRange {
                index,
                len: self.events.len(),
            })
        }
    }

    /// Drops all events and styles and resets the read order counter.
    ///
    /// The timing mode and name survive.
    pub fn clear(&mut self) {
        self.events.clear();
        self.styles = StyleRegistry::default();
        self.next_read_order = 0;
    }

    /// Stable sort by start tick, breaking ties by read order.
    ///
    /// Events keep their read orders, so the arrival sequence stays
    /// recoverable afterwards.
    pub fn sort(&mut self) {
        self.events
            .sort_by_key(|event| (event.start, event.read_order));
    }

    /// Sorts like [`sort`](Self::sort), then renumbers read orders to
    /// match the new order.
    ///
    /// Use this when the arrival history should be discarded in favor of
    /// timeline order.
    pub fn sort_and_renumber(&mut self) {
        self.sort();
        for (index, event) in self.events.iter_mut().enumerate() {
            event.read_order = ReadOrder::new(index as i64);
        }
        self.next_read_order = self.events.len() as i64;
    }

    /// Rewrites every stored tick into `target` mode, converting values
    /// through `fps`.
    ///
    /// Converting to the current mode is a no-op. Conversions round to
    /// the nearest unit, so a frame -> time -> frame cycle at one rate
    /// is lossless while time -> frame quantizes onto the frame grid.
    pub fn convert_timing_mode(&mut self, target: TimingMode, fps: FrameRate) {
        if self.mode == target {
            return;
        }
        for event in &mut self.events {
            event.start = Self::convert_tick(event.start, target, fps);
            event.end = Self::convert_tick(event.end, target, fps);
        }
        self.mode = target;
    }

    /// Converts one tick out of the opposite mode into `target`.
    fn convert_tick(tick: Tick, target: TimingMode, fps: FrameRate) -> Tick {
        match target {
            TimingMode::Time => Tick::new(fps.frame_to_millis(tick.value())),
            TimingMode::Frame => Tick::new(fps.millis_to_frame(tick.value())),
        }
    }

    /// Merges `other` into this track.
    ///
    /// Styles are copied first (incoming definitions win on name
    /// clashes), then every event is shifted by `offset` and re-added
    /// with a fresh read order continuing this track's counter. `None`
    /// places `other` right after the latest end tick currently stored.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::TimingModeMismatch`] when the timing modes
    /// differ; convert one side first.
    pub fn append(&mut self, other: &Self, offset: Option<Tick>) -> Result<()> {
        if other.mode != self.mode {
            return Err(TrackError::TimingModeMismatch {
                expected: self.mode,
                found: other.mode,
            });
        }
        let shift = match offset {
            Some(tick) => tick.value(),
            None => self
                .events
                .iter()
                .map(|event| event.end.value())
                .max()
                .unwrap_or(0),
        };
        self.styles.merge(&other.styles, true);
        for event in &other.events {
            let mut event = event.clone();
            event.start = event.start.offset(shift);
            event.end = event.end.offset(shift);
            event.read_order = ReadOrder::UNSET;
            self.add(event);
        }
        Ok(())
    }

    /// Start of the event at `index`, translated to milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EventOutOfRange`] when `index` is past the
    /// end.
    pub fn event_start_millis(&self, index: usize, fps: FrameRate) -> Result<i64> {
        Ok(self.mode.to_millis(self.get(index)?.start, fps))
    }

    /// End of the event at `index`, translated to milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EventOutOfRange`] when `index` is past the
    /// end.
    pub fn event_end_millis(&self, index: usize, fps: FrameRate) -> Result<i64> {
        Ok(self.mode.to_millis(self.get(index)?.end, fps))
    }

    /// Index of the first event whose start lies at or after `millis`.
    ///
    /// Binary search over translated start times; requires the track to
    /// be sorted. Returns `None` when every event starts earlier.
    #[must_use]
    pub fn event_starting_at_or_after(&self, millis: i64, fps: FrameRate) -> Option<usize> {
        let index = self
            .events
            .partition_point(|event| self.mode.to_millis(event.start, fps) < millis);
        (index < self.events.len()).then_some(index)
    }

    /// Translates an external query instant into this track's timing
    /// mode.
    #[must_use]
    pub fn tick_from_query(&self, query: QueryTime, fps: FrameRate) -> Tick {
        self.mode.tick_from_query(query, fps)
    }

    /// Style the event at `index` renders with, falling back to the
    /// registry default for unknown names.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EventOutOfRange`] when `index` is past the
    /// end.
    pub fn style_of(&self, index: usize) -> Result<&Style> {
        Ok(self.styles.resolve(&self.get(index)?.style_name))
    }

    /// Charset identifier of the event's resolved style.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EventOutOfRange`] when `index` is past the
    /// end.
    pub fn event_encoding(&self, index: usize) -> Result<u8> {
        Ok(self.style_of(index)?.encoding)
    }

    /// Rebinds events whose style name is not registered to
    /// [`DEFAULT_STYLE`], registering the fallback under that name first
    /// if missing.
    pub fn adopt_unknown_styles(&mut self) {
        if !self.styles.contains(DEFAULT_STYLE) {
            let fallback = self.styles.default_style().clone();
            self.styles.insert(DEFAULT_STYLE, fallback);
        }
        for event in &mut self.events {
            if !self.styles.contains(&event.style_name) {
                event.style_name = String::from(DEFAULT_STYLE);
            }
        }
    }

    /// Text payload of the event at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EventOutOfRange`] when `index` is past the
    /// end.
    pub fn event_text(&self, index: usize) -> Result<&str> {
        Ok(self.get(index)?.text.as_str())
    }

    /// Replaces the text payload of the event at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EventOutOfRange`] when `index` is past the
    /// end.
    pub fn set_event_text<S: Into<String>>(&mut self, index: usize, text: S) -> Result<()> {
        self.get_mut(index)?.text = text.into();
        Ok(())
    }

    /// Whether the event's text came from a wide encoding.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EventOutOfRange`] when `index` is past the
    /// end.
    pub fn is_event_wide(&self, index: usize) -> Result<bool> {
        Ok(self.get(index)?.wide)
    }

    /// Marks the event's text as wide or narrow.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::EventOutOfRange`] when `index` is past the
    /// end.
    pub fn set_event_wide(&mut self, index: usize, wide: bool) -> Result<()> {
        self.get_mut(index)?.wide = wide;
        Ok(())
    }
}
