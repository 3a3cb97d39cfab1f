//! Frame-boundary alignment for cut points
//!
//! Reconciles a user-chosen timestamp with actual frame boundaries so that a
//! stream-copy export starts and ends at frame-accurate intent. The copy
//! itself is still constrained by keyframe placement; alignment narrows the
//! gap, it cannot eliminate it.

use crate::ports::PlaybackPosition;

/// How a raw timestamp snaps to a frame boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignMode {
    /// Snap down to the start of the containing frame. Used for mark-in, so
    /// the export begins no later than the frame the user saw.
    RoundToPrev,
    /// Snap up to the start of the following frame. Used for mark-out, so
    /// the marked frame is fully included in the half-open `[start, end)`.
    RoundToNext,
}

/// Frame-alignment planner
pub struct CutPlanner;

// Tolerance, in frames, against floating point representation error when a
// previously aligned time is fed back through `align`.
const FRAME_EPSILON: f64 = 1e-6;

impl CutPlanner {
    /// Align `raw_time` to a frame boundary and clamp to `[0, duration]`.
    ///
    /// Precondition: `fps > 0`. Callers must only invoke this with a valid
    /// open decoder; the result is undefined otherwise.
    pub fn align(raw_time: f64, mode: AlignMode, fps: f64, duration: f64) -> f64 {
        debug_assert!(fps > 0.0, "align called without a valid frame rate");

        let frame_duration = 1.0 / fps;
        let frame_index = (raw_time * fps + FRAME_EPSILON).floor();

        let aligned = match mode {
            AlignMode::RoundToPrev => frame_index * frame_duration,
            AlignMode::RoundToNext => (frame_index + 1.0) * frame_duration,
        };

        aligned.clamp(0.0, duration)
    }

    /// Align the decoder's current position, reading time and frame rate
    /// from the playback collaborator.
    pub fn align_position(
        position: &dyn PlaybackPosition,
        mode: AlignMode,
        duration: f64,
    ) -> f64 {
        Self::align(
            position.current_time_seconds(),
            mode,
            position.frames_per_second(),
            duration,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedPosition;

    const FPS: f64 = 30.0;
    const DURATION: f64 = 10.0;

    #[test]
    fn round_to_prev_snaps_down() {
        // 1.016s at 30fps sits inside frame 30, which starts at 1.0s
        let aligned = CutPlanner::align(1.016, AlignMode::RoundToPrev, FPS, DURATION);
        assert!((aligned - 1.0).abs() < 1e-9);
    }

    #[test]
    fn round_to_next_snaps_up() {
        // 2.001s at 30fps sits inside frame 60; the next boundary is 61/30
        let aligned = CutPlanner::align(2.001, AlignMode::RoundToNext, FPS, DURATION);
        assert!((aligned - 61.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn prev_alignment_brackets_raw_time() {
        for raw in [0.0, 0.1, 1.016, 3.333, 9.99] {
            let aligned = CutPlanner::align(raw, AlignMode::RoundToPrev, FPS, DURATION);
            assert!(aligned <= raw + 1e-9, "raw {raw}: aligned {aligned}");
            assert!(raw < aligned + 1.0 / FPS, "raw {raw}: aligned {aligned}");
        }
    }

    #[test]
    fn next_alignment_brackets_raw_time() {
        for raw in [0.0, 0.1, 1.016, 3.333, 9.9] {
            let aligned = CutPlanner::align(raw, AlignMode::RoundToNext, FPS, DURATION);
            assert!(aligned >= raw, "raw {raw}: aligned {aligned}");
            // At an exact boundary the previous boundary equals raw itself
            assert!(aligned - 1.0 / FPS <= raw + 1e-9, "raw {raw}: aligned {aligned}");
        }
    }

    #[test]
    fn prev_alignment_is_idempotent() {
        for fps in [24.0, 25.0, 29.97, 30.0, 60.0] {
            for raw in [0.0, 0.5, 1.016, 7.77] {
                let once = CutPlanner::align(raw, AlignMode::RoundToPrev, fps, DURATION);
                let twice = CutPlanner::align(once, AlignMode::RoundToPrev, fps, DURATION);
                assert!(
                    (once - twice).abs() < 1e-9,
                    "fps {fps}, raw {raw}: {once} != {twice}"
                );
            }
        }
    }

    #[test]
    fn clamps_to_zero_for_negative_input() {
        let aligned = CutPlanner::align(-5.0, AlignMode::RoundToPrev, FPS, DURATION);
        assert_eq!(aligned, 0.0);
    }

    #[test]
    fn clamps_to_duration_for_over_range_input() {
        let aligned = CutPlanner::align(99.0, AlignMode::RoundToNext, FPS, DURATION);
        assert_eq!(aligned, DURATION);
    }

    #[test]
    fn round_to_next_near_end_of_file_clamps() {
        // Last frame of a 10s 30fps file; the next boundary would land past
        // the end, so the clamp caps it at the duration.
        let aligned = CutPlanner::align(9.999, AlignMode::RoundToNext, FPS, DURATION);
        assert_eq!(aligned, DURATION);
    }

    #[test]
    fn align_position_reads_collaborator() {
        let position = FixedPosition {
            time: 1.016,
            fps: 30.0,
        };
        let aligned = CutPlanner::align_position(&position, AlignMode::RoundToPrev, DURATION);
        assert!((aligned - 1.0).abs() < 1e-9);
    }
}
