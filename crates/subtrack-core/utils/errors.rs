//! Error taxonomy for track and index operations.
//!
//! Every fallible operation in the crate returns [`TrackError`]. Variants
//! carry enough context to report the failure without re-deriving state,
//! and all of them describe local, recoverable conditions.

use crate::timing::TimingMode;
use thiserror::Error;

/// Errors produced by track mutation, lookup, and timing conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    /// Event index past the end of the track.
    #[error("event index {index} out of range for track with {len} events")]
    EventOutOfRange { index: usize, len: usize },

    /// Segment index past the end of the segment list.
    #[error("segment index {index} out of range for index with {len} segments")]
    SegmentOutOfRange { index: usize, len: usize },

    /// Frame rate that cannot drive a time/frame conversion.
    #[error("invalid frame rate {fps}: must be finite and greater than zero")]
    InvalidFrameRate { fps: f64 },

    /// Merge attempted between tracks in different timing modes.
    #[error("timing mode mismatch: expected {expected}, found {found}")]
    TimingModeMismatch {
        expected: TimingMode,
        found: TimingMode,
    },
}

impl TrackError {
    /// Whether the caller can sensibly continue after this error.
    ///
    /// Every current variant is recoverable; the method exists so callers
    /// can branch without matching exhaustively as variants grow.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::EventOutOfRange { .. }
                | Self::SegmentOutOfRange { .. }
                | Self::InvalidFrameRate { .. }
                | Self::TimingModeMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = TrackError::EventOutOfRange { index: 9, len: 3 };
        assert_eq!(
            err.to_string(),
            "event index 9 out of range for track with 3 events"
        );

        let err = TrackError::InvalidFrameRate { fps: -1.0 };
        assert!(err.to_string().contains("-1"));

        let err = TrackError::TimingModeMismatch {
            expected: TimingMode::Time,
            found: TimingMode::Frame,
        };
        assert_eq!(
            err.to_string(),
            "timing mode mismatch: expected time, found frame"
        );
    }

    #[test]
    fn all_variants_are_recoverable() {
        assert!(TrackError::SegmentOutOfRange { index: 0, len: 0 }.is_recoverable());
        assert!(TrackError::InvalidFrameRate { fps: f64::NAN }.is_recoverable());
    }
}
