//! Timed events and their construction helpers.

use crate::style::DEFAULT_STYLE;
use crate::timing::Tick;

/// Pixel margins measured inward from the four frame edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    /// Distance from the left edge.
    pub left: i32,
    /// Distance from the right edge.
    pub right: i32,
    /// Distance from the top edge.
    pub top: i32,
    /// Distance from the bottom edge.
    pub bottom: i32,
}

impl Margins {
    /// Margins from explicit per-side values.
    #[must_use]
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Margins with the same inset on every side.
    #[must_use]
    pub const fn uniform(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }
}

/// Stable identity a track assigns to an event when it is added.
///
/// Read orders break ties between events that start on the same tick and
/// survive sorting, so the original arrival sequence stays recoverable.
/// The [`UNSET`](Self::UNSET) sentinel marks an event no track has
/// adopted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadOrder(i64);

impl ReadOrder {
    /// Sentinel for "not assigned yet".
    pub const UNSET: Self = Self(-1);

    /// Wraps an explicit read order.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw value, `-1` when unset.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Whether this read order still carries the unset sentinel.
    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0 < 0
    }
}

impl Default for ReadOrder {
    fn default() -> Self {
        Self::UNSET
    }
}

/// A single timed entry: text plus timing, style reference, and metadata.
///
/// `start` and `end` are opaque [`Tick`]s whose unit comes from the owning
/// track's timing mode. The span is half-open: an event is visible at
/// `start` and already gone at `end`. An event whose end does not lie
/// after its start is degenerate; it stays in the track but never appears
/// in a segment index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Raw text payload, markup preserved as-is.
    pub text: String,
    /// Whether `text` came from (and should return to) a wide encoding.
    pub wide: bool,
    /// Name of the style this event renders with.
    pub style_name: String,
    /// Speaker or actor label.
    pub actor: String,
    /// Free-form effect field.
    pub effect: String,
    /// Per-event margin override, `None` to inherit from the style.
    pub margins: Option<Margins>,
    /// Z-order layer; higher layers draw on top.
    pub layer: i32,
    /// First tick at which the event is visible.
    pub start: Tick,
    /// First tick at which the event is no longer visible.
    pub end: Tick,
    /// Arrival identity assigned by the owning track.
    pub read_order: ReadOrder,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            text: String::new(),
            wide: false,
            style_name: String::from(DEFAULT_STYLE),
            actor: String::new(),
            effect: String::new(),
            margins: None,
            layer: 0,
            start: Tick::ZERO,
            end: Tick::ZERO,
            read_order: ReadOrder::UNSET,
        }
    }
}

impl Event {
    /// Starts a fluent [`EventBuilder`].
    #[must_use]
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    /// Whether the span is empty or inverted.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.end.value() <= self.start.value()
    }

    /// Whether `tick` falls inside the half-open span `[start, end)`.
    ///
    /// Always false for degenerate events.
    #[must_use]
    pub const fn covers(&self, tick: Tick) -> bool {
        self.start.value() <= tick.value() && tick.value() < self.end.value()
    }

    /// Span length in ticks, zero for degenerate events.
    #[must_use]
    pub const fn duration(&self) -> i64 {
        if self.is_degenerate() {
            0
        } else {
            self.end.value() - self.start.value()
        }
    }
}

/// Fluent constructor for [`Event`].
///
/// Every field is optional; unset fields keep the [`Event::default`]
/// values, so building never fails.
///
/// # Example
///
/// ```
/// use subtrack_core::{Event, Tick};
///
/// let event = Event::builder()
///     .timing(Tick::new(1_000), Tick::new(3_500))
///     .style("Sign")
///     .actor("Narrator")
///     .layer(2)
///     .text("On the next day...")
///     .build();
/// assert_eq!(event.duration(), 2_500);
/// ```
#[derive(Debug, Default)]
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    /// Sets the text payload.
    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.event.text = text.into();
        self
    }

    /// Marks the text as originating from a wide encoding.
    pub fn wide(mut self, wide: bool) -> Self {
        self.event.wide = wide;
        self
    }

    /// Sets the style name the event renders with.
    pub fn style<S: Into<String>>(mut self, name: S) -> Self {
        self.event.style_name = name.into();
        self
    }

    /// Sets the speaker label.
    pub fn actor<S: Into<String>>(mut self, actor: S) -> Self {
        self.event.actor = actor.into();
        self
    }

    /// Sets the effect field.
    pub fn effect<S: Into<String>>(mut self, effect: S) -> Self {
        self.event.effect = effect.into();
        self
    }

    /// Overrides the style margins for this event.
    pub fn margins(mut self, margins: Margins) -> Self {
        self.event.margins = Some(margins);
        self
    }

    /// Sets the z-order layer.
    pub fn layer(mut self, layer: i32) -> Self {
        self.event.layer = layer;
        self
    }

    /// Sets the half-open `[start, end)` span in one call.
    pub fn timing(mut self, start: Tick, end: Tick) -> Self {
        self.event.start = start;
        self.event.end = end;
        self
    }

    /// Sets the start tick.
    pub fn start(mut self, start: Tick) -> Self {
        self.event.start = start;
        self
    }

    /// Sets the end tick.
    pub fn end(mut self, end: Tick) -> Self {
        self.event.end = end;
        self
    }

    /// Sets an explicit read order instead of the track-assigned one.
    pub fn read_order(mut self, read_order: ReadOrder) -> Self {
        self.event.read_order = read_order;
        self
    }

    /// Finishes the event.
    #[must_use]
    pub fn build(self) -> Event {
        self.event
    }
}
