//! Timing primitives: ticks, timing modes, and frame rate conversion.
//!
//! A track stores every boundary as an opaque [`Tick`]. What a tick means
//! is decided by the track's [`TimingMode`]: wall-clock milliseconds or
//! video frame numbers. Converting between the two interpretations always
//! goes through a validated [`FrameRate`], so code holding a `FrameRate`
//! converts infallibly.
//!
//! # Rounding
//!
//! Conversions rarely land on integers. They round to the nearest unit
//! with halves away from zero, matching [`f64::round`]. For integer frame
//! rates a frame -> millis -> frame cycle is exact; a millis -> frame ->
//! millis cycle quantizes to the frame grid and may move by up to one
//! frame duration.

use crate::{Result, TrackError};
use core::fmt;

/// An opaque timing value stored on events.
///
/// The numeric payload is interpreted through the owning track's
/// [`TimingMode`]: milliseconds in [`TimingMode::Time`], a frame number
/// in [`TimingMode::Frame`]. Keeping the payload opaque forces unit
/// conversion through [`FrameRate`] instead of ad-hoc arithmetic on raw
/// integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(i64);

impl Tick {
    /// Tick at the zero point of the timeline.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw value. The unit (millis or frames) comes from the
    /// track that stores it.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw numeric payload.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Shifts the tick by `delta` units, saturating at the numeric range.
    #[must_use]
    pub const fn offset(self, delta: i64) -> Self {
        Self(self.0.saturating_add(delta))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Interpretation applied to every [`Tick`] in a track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimingMode {
    /// Ticks are wall-clock milliseconds.
    #[default]
    Time,
    /// Ticks are video frame numbers at some externally known rate.
    Frame,
}

impl TimingMode {
    /// Short lowercase name, used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Frame => "frame",
        }
    }

    /// Interprets `tick` in this mode and returns wall-clock milliseconds.
    #[must_use]
    pub fn to_millis(self, tick: Tick, fps: FrameRate) -> i64 {
        match self {
            Self::Time => tick.value(),
            Self::Frame => fps.frame_to_millis(tick.value()),
        }
    }

    /// Interprets `tick` in this mode and returns a frame number.
    #[must_use]
    pub fn to_frame(self, tick: Tick, fps: FrameRate) -> i64 {
        match self {
            Self::Time => fps.millis_to_frame(tick.value()),
            Self::Frame => tick.value(),
        }
    }

    /// Builds the tick that represents `millis` in this mode.
    #[must_use]
    pub fn tick_from_millis(self, millis: i64, fps: FrameRate) -> Tick {
        match self {
            Self::Time => Tick::new(millis),
            Self::Frame => Tick::new(fps.millis_to_frame(millis)),
        }
    }

    /// Builds the tick that represents frame number `frame` in this mode.
    #[must_use]
    pub fn tick_from_frame(self, frame: i64, fps: FrameRate) -> Tick {
        match self {
            Self::Time => Tick::new(fps.frame_to_millis(frame)),
            Self::Frame => Tick::new(frame),
        }
    }

    /// Translates an externally supplied query instant into this mode.
    #[must_use]
    pub fn tick_from_query(self, query: QueryTime, fps: FrameRate) -> Tick {
        match query {
            QueryTime::Millis(millis) => self.tick_from_millis(millis, fps),
            QueryTime::Frame(frame) => self.tick_from_frame(frame, fps),
        }
    }
}

impl fmt::Display for TimingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-facing query instant, tagged with its unit.
///
/// Lookup entry points take a `QueryTime` so callers can ask in whichever
/// unit they have; translation into the track's own mode happens in one
/// place instead of at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueryTime {
    /// Wall-clock milliseconds.
    Millis(i64),
    /// A frame number at the supplied frame rate.
    Frame(i64),
}

/// A validated frames-per-second value.
///
/// Construction rejects zero, negative, and non-finite rates, which lets
/// every conversion method stay infallible. There is deliberately no
/// serde support: deserializing would bypass validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRate(f64);

impl FrameRate {
    /// Validates `fps` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::InvalidFrameRate`] when `fps` is not a
    /// finite number greater than zero.
    pub fn new(fps: f64) -> Result<Self> {
        if fps.is_finite() && fps > 0.0 {
            Ok(Self(fps))
        } else {
            Err(TrackError::InvalidFrameRate { fps })
        }
    }

    /// The raw frames-per-second value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Converts a frame number to milliseconds, rounding halves away
    /// from zero.
    #[must_use]
    pub fn frame_to_millis(self, frame: i64) -> i64 {
        round_half_from_zero(frame as f64 * 1000.0 / self.0)
    }

    /// Converts milliseconds to a frame number, rounding halves away
    /// from zero.
    #[must_use]
    pub fn millis_to_frame(self, millis: i64) -> i64 {
        round_half_from_zero(millis as f64 * self.0 / 1000.0)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Nearest-integer rounding with halves away from zero.
fn round_half_from_zero(value: f64) -> i64 {
    value.round() as i64
}
